use crate::{
    client::{Client, EndpointKind, PathIds, Result},
    common::{into_object, Model, RawObject},
    LanguageModel, LanguagesCollection,
};
use serde::Serialize;

// Implementation of the languages endpoints
// https://developers.lokalise.com/reference/languages
impl Client {
    /// List every language Lokalise supports
    pub async fn system_languages<P>(&self, params: &P) -> Result<LanguagesCollection>
    where
        P: Serialize + ?Sized,
    {
        let raw = self
            .endpoint(EndpointKind::SystemLanguages)?
            .all(PathIds::default(), params)
            .await?;

        LanguagesCollection::from_raw(raw)
    }

    pub async fn project_languages<P>(
        &self,
        project_id: &str,
        params: &P,
    ) -> Result<LanguagesCollection>
    where
        P: Serialize + ?Sized,
    {
        let raw = self
            .endpoint(EndpointKind::Languages)?
            .all(PathIds::parent(project_id), params)
            .await?;

        LanguagesCollection::from_raw(raw)
    }

    pub async fn create_languages<P>(
        &self,
        project_id: &str,
        params: &P,
    ) -> Result<LanguagesCollection>
    where
        P: Serialize + ?Sized,
    {
        let raw = self
            .endpoint(EndpointKind::Languages)?
            .create(PathIds::parent(project_id), params)
            .await?;

        LanguagesCollection::from_raw(raw)
    }

    pub async fn language(&self, project_id: &str, lang_id: u64) -> Result<LanguageModel> {
        let lang_id = lang_id.to_string();
        let raw = self
            .endpoint(EndpointKind::Languages)?
            .find(PathIds::parent(project_id).resource(&lang_id))
            .await?;

        LanguageModel::from_raw(raw)
    }

    pub async fn update_language<P>(
        &self,
        project_id: &str,
        lang_id: u64,
        params: &P,
    ) -> Result<LanguageModel>
    where
        P: Serialize + ?Sized,
    {
        let lang_id = lang_id.to_string();
        let raw = self
            .endpoint(EndpointKind::Languages)?
            .update(PathIds::parent(project_id).resource(&lang_id), params)
            .await?;

        LanguageModel::from_raw(raw)
    }

    pub async fn delete_language(&self, project_id: &str, lang_id: u64) -> Result<RawObject> {
        let lang_id = lang_id.to_string();
        let raw = self
            .endpoint(EndpointKind::Languages)?
            .delete(PathIds::parent(project_id).resource(&lang_id))
            .await?;

        into_object(raw, "delete language")
    }
}

#[cfg(test)]
mod test {
    use crate::client::test::{stub_client, StubTransport};
    use serde_json::json;

    #[tokio::test]
    async fn system_languages() {
        let transport = StubTransport::respond_with(vec![json!({
            "languages": [{"lang_id": 640, "lang_iso": "en", "lang_name": "English"}]
        })]);
        let client = stub_client(transport.clone());

        let languages = client.system_languages(&json!({"limit": 1})).await.unwrap();
        assert_eq!(languages[0].lang_iso.as_deref(), Some("en"));
        assert_eq!(transport.last_request().path, "system/languages");
    }

    #[tokio::test]
    async fn language() {
        let transport = StubTransport::respond_with(vec![json!({
            "project_id": "p1",
            "language": {"lang_id": 640, "lang_iso": "en", "is_rtl": false}
        })]);
        let client = stub_client(transport.clone());

        let language = client.language("p1", 640).await.unwrap();
        assert_eq!(language.is_rtl, Some(false));
        assert_eq!(language.project_id.as_deref(), Some("p1"));
        assert_eq!(transport.last_request().path, "projects/p1/languages/640");
    }
}
