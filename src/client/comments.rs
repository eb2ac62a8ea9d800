use crate::{
    client::{Client, EndpointKind, PathIds, Result},
    common::{into_object, Model, RawObject},
    CommentModel, CommentsCollection,
};
use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct NewComment {
    pub comment: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CreateCommentsRequest {
    pub comments: Vec<NewComment>,
}

impl CreateCommentsRequest {
    pub fn single<S: Into<String>>(comment: S) -> Self {
        Self {
            comments: vec![NewComment {
                comment: comment.into(),
            }],
        }
    }
}

// Implementation of the comments endpoints
// https://developers.lokalise.com/reference/comments
impl Client {
    /// List the comments on every key of a project
    pub async fn project_comments<P>(
        &self,
        project_id: &str,
        params: &P,
    ) -> Result<CommentsCollection>
    where
        P: Serialize + ?Sized,
    {
        let raw = self
            .endpoint(EndpointKind::Comments)?
            .all(PathIds::parent(project_id), params)
            .await?;

        CommentsCollection::from_raw(raw)
    }

    pub async fn key_comments<P>(
        &self,
        project_id: &str,
        key_id: u64,
        params: &P,
    ) -> Result<CommentsCollection>
    where
        P: Serialize + ?Sized,
    {
        let key_id = key_id.to_string();
        let raw = self
            .endpoint(EndpointKind::KeyComments)?
            .all(PathIds::parent(project_id).resource(&key_id), params)
            .await?;

        CommentsCollection::from_raw(raw)
    }

    pub async fn key_comment(
        &self,
        project_id: &str,
        key_id: u64,
        comment_id: u64,
    ) -> Result<CommentModel> {
        let key_id = key_id.to_string();
        let comment_id = comment_id.to_string();
        let raw = self
            .endpoint(EndpointKind::KeyComments)?
            .find(
                PathIds::parent(project_id)
                    .resource(&key_id)
                    .subresource(&comment_id),
            )
            .await?;

        CommentModel::from_raw(raw)
    }

    /// Add comments to a key. The API answers with the created comments.
    pub async fn create_key_comments<P>(
        &self,
        project_id: &str,
        key_id: u64,
        params: &P,
    ) -> Result<CommentsCollection>
    where
        P: Serialize + ?Sized,
    {
        let key_id = key_id.to_string();
        let raw = self
            .endpoint(EndpointKind::KeyComments)?
            .create(PathIds::parent(project_id).resource(&key_id), params)
            .await?;

        CommentsCollection::from_raw(raw)
    }

    pub async fn delete_key_comment(
        &self,
        project_id: &str,
        key_id: u64,
        comment_id: u64,
    ) -> Result<RawObject> {
        let key_id = key_id.to_string();
        let comment_id = comment_id.to_string();
        let raw = self
            .endpoint(EndpointKind::KeyComments)?
            .delete(
                PathIds::parent(project_id)
                    .resource(&key_id)
                    .subresource(&comment_id),
            )
            .await?;

        into_object(raw, "delete comment")
    }
}

#[cfg(test)]
mod test {
    use super::CreateCommentsRequest;
    use crate::client::test::{stub_client, StubTransport};
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn create_key_comments() {
        let transport = StubTransport::respond_with(vec![json!({
            "project_id": "p1",
            "comments": [{"comment_id": 9, "key_id": 42, "comment": "Typo?"}]
        })]);
        let client = stub_client(transport.clone());

        let comments = client
            .create_key_comments("p1", 42, &CreateCommentsRequest::single("Typo?"))
            .await
            .unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].comment.as_deref(), Some("Typo?"));

        let request = transport.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "projects/p1/keys/42/comments");
        assert_eq!(
            request.params.unwrap(),
            json!({"comments": [{"comment": "Typo?"}]})
        );
    }

    #[tokio::test]
    async fn key_comment_and_delete() {
        let transport = StubTransport::respond_with(vec![
            json!({"project_id": "p1", "comment": {"comment_id": 9, "comment": "Typo?"}}),
            json!({"project_id": "p1", "comment_deleted": true}),
        ]);
        let client = stub_client(transport.clone());

        let comment = client.key_comment("p1", 42, 9).await.unwrap();
        assert_eq!(comment.comment_id, Some(9));
        assert_eq!(transport.last_request().path, "projects/p1/keys/42/comments/9");

        let deleted = client.delete_key_comment("p1", 42, 9).await.unwrap();
        assert_eq!(deleted["comment_deleted"], true);
        assert_eq!(transport.last_request().method, Method::DELETE);
    }

    #[tokio::test]
    async fn project_comments() {
        let transport = StubTransport::respond_with(vec![json!({"project_id": "p1", "comments": []})]);
        let client = stub_client(transport.clone());

        let comments = client.project_comments("p1", &()).await.unwrap();
        assert!(comments.is_empty());
        assert!(comments.is_first_page() && comments.is_last_page());
        assert_eq!(transport.last_request().path, "projects/p1/comments");
    }
}
