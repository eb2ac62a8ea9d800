use crate::{
    client::{pagination::serialize_flag, Client, EndpointKind, PaginationOptions, PathIds, Result},
    common::{into_object, Model, RawObject},
    ProjectModel, ProjectsCollection,
};
use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct ListProjectsOptions {
    /// Only projects of this team.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_team_id: Option<u64>,

    /// Only projects with one of these names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_names: Vec<String>,

    #[serde(
        serialize_with = "serialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub include_statistics: Option<bool>,

    #[serde(
        serialize_with = "serialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub include_settings: Option<bool>,

    #[serde(flatten)]
    pub pagination_options: PaginationOptions,
}

#[derive(Debug, Default, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Languages to add to the project. Defaults to English only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<NewProjectLanguage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_lang_iso: Option<String>,
    /// `localization_files` or `paged_documents`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct NewProjectLanguage {
    pub lang_iso: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_iso: Option<String>,
}

// Implementation of the projects endpoint
// https://developers.lokalise.com/reference/projects
impl Client {
    /// List all projects the token has access to
    ///
    /// Lokalise API docs: https://developers.lokalise.com/reference/list-all-projects
    pub async fn projects<P>(&self, params: &P) -> Result<ProjectsCollection>
    where
        P: Serialize + ?Sized,
    {
        let raw = self
            .endpoint(EndpointKind::Projects)?
            .all(PathIds::default(), params)
            .await?;

        ProjectsCollection::from_raw(raw)
    }

    /// Retrieve a project
    ///
    /// Lokalise API docs: https://developers.lokalise.com/reference/retrieve-a-project
    pub async fn project(&self, project_id: &str) -> Result<ProjectModel> {
        let raw = self
            .endpoint(EndpointKind::Projects)?
            .find(PathIds::default().resource(project_id))
            .await?;

        ProjectModel::from_raw(raw)
    }

    pub async fn create_project<P>(&self, params: &P) -> Result<ProjectModel>
    where
        P: Serialize + ?Sized,
    {
        let raw = self
            .endpoint(EndpointKind::Projects)?
            .create(PathIds::default(), params)
            .await?;

        ProjectModel::from_raw(raw)
    }

    pub async fn update_project<P>(&self, project_id: &str, params: &P) -> Result<ProjectModel>
    where
        P: Serialize + ?Sized,
    {
        let raw = self
            .endpoint(EndpointKind::Projects)?
            .update(PathIds::default().resource(project_id), params)
            .await?;

        ProjectModel::from_raw(raw)
    }

    /// Delete all keys and translations of a project, keeping the project itself
    ///
    /// Lokalise API docs: https://developers.lokalise.com/reference/empty-a-project
    pub async fn empty_project(&self, project_id: &str) -> Result<RawObject> {
        let raw = self
            .endpoint(EndpointKind::Projects)?
            .empty(PathIds::default().resource(project_id))
            .await?;

        into_object(raw, "empty project")
    }

    pub async fn delete_project(&self, project_id: &str) -> Result<RawObject> {
        let raw = self
            .endpoint(EndpointKind::Projects)?
            .delete(PathIds::default().resource(project_id))
            .await?;

        into_object(raw, "delete project")
    }
}

#[cfg(test)]
mod test {
    use super::{CreateProjectRequest, ListProjectsOptions, NewProjectLanguage};
    use crate::client::{
        test::{stub_client, StubTransport},
        PaginationOptions,
    };
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn list_options() {
        let options = ListProjectsOptions {
            filter_team_id: Some(12345),
            filter_names: vec!["TheApp".to_owned()],
            include_statistics: Some(false),
            pagination_options: PaginationOptions::page(2, 100),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "filter_team_id": 12345,
                "filter_names": ["TheApp"],
                "include_statistics": 0,
                "limit": 100,
                "page": 2
            })
        );
    }

    #[tokio::test]
    async fn project() {
        let transport = StubTransport::respond_with(vec![json!({
            "project_id": "p1",
            "name": "TheApp Project"
        })]);
        let client = stub_client(transport.clone());

        let project = client.project("p1").await.unwrap();
        assert_eq!(project.name.as_deref(), Some("TheApp Project"));

        let request = transport.last_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "projects/p1");
        assert!(request.params.is_none());
        assert!(!request.paginated);
    }

    #[tokio::test]
    async fn create_project() {
        let transport = StubTransport::respond_with(vec![json!({"project_id": "p2", "name": "New"})]);
        let client = stub_client(transport.clone());

        let request = CreateProjectRequest {
            name: "New".to_owned(),
            languages: vec![NewProjectLanguage {
                lang_iso: "en".to_owned(),
                custom_iso: None,
            }],
            ..Default::default()
        };
        let project = client.create_project(&request).await.unwrap();
        assert_eq!(project.project_id.as_deref(), Some("p2"));

        let sent = transport.last_request();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.path, "projects");
        assert_eq!(
            sent.params.unwrap(),
            json!({"name": "New", "languages": [{"lang_iso": "en"}]})
        );
    }

    #[tokio::test]
    async fn empty_and_delete_pass_through() {
        let transport = StubTransport::respond_with(vec![
            json!({"project_id": "p1", "keys_deleted": true}),
            json!({"project_id": "p1", "project_deleted": true}),
        ]);
        let client = stub_client(transport.clone());

        let emptied = client.empty_project("p1").await.unwrap();
        assert_eq!(emptied["keys_deleted"], true);
        let request = transport.last_request();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "projects/p1/empty");
        assert!(!request.paginated);

        let deleted = client.delete_project("p1").await.unwrap();
        assert_eq!(deleted.len(), 2);
        assert_eq!(deleted["project_deleted"], true);
        let request = transport.last_request();
        assert_eq!(request.method, Method::DELETE);
        assert!(!request.paginated);
    }
}
