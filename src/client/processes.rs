use crate::{
    client::{Client, EndpointKind, PathIds, Result},
    common::Model,
    QueuedProcessModel, QueuedProcessesCollection,
};
use serde::Serialize;

// Implementation of the queued processes endpoint
// https://developers.lokalise.com/reference/queued-processes
impl Client {
    pub async fn queued_processes<P>(
        &self,
        project_id: &str,
        params: &P,
    ) -> Result<QueuedProcessesCollection>
    where
        P: Serialize + ?Sized,
    {
        let raw = self
            .endpoint(EndpointKind::QueuedProcesses)?
            .all(PathIds::parent(project_id), params)
            .await?;

        QueuedProcessesCollection::from_raw(raw)
    }

    pub async fn queued_process(
        &self,
        project_id: &str,
        process_id: &str,
    ) -> Result<QueuedProcessModel> {
        let raw = self
            .endpoint(EndpointKind::QueuedProcesses)?
            .find(PathIds::parent(project_id).resource(process_id))
            .await?;

        QueuedProcessModel::from_raw(raw)
    }
}

#[cfg(test)]
mod test {
    use crate::client::{
        test::{stub_client, StubTransport},
        Action, EndpointKind, Error, PathIds,
    };
    use serde_json::json;

    #[tokio::test]
    async fn queued_process() {
        let transport = StubTransport::respond_with(vec![json!({
            "project_id": "p1",
            "process": {"process_id": "abc", "type": "file-import", "status": "finished"}
        })]);
        let client = stub_client(transport.clone());

        let process = client.queued_process("p1", "abc").await.unwrap();
        assert!(process.is_finished());
        assert_eq!(transport.last_request().path, "projects/p1/processes/abc");
    }

    #[tokio::test]
    async fn processes_cannot_be_deleted() {
        let transport = StubTransport::respond_with(vec![]);
        let client = stub_client(transport.clone());

        let endpoint = client.endpoint(EndpointKind::QueuedProcesses).unwrap();
        let err = endpoint
            .perform::<()>(Action::Delete, PathIds::parent("p1").resource("abc"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedAction { action: "delete", .. }));
        assert!(transport.requests.lock().unwrap().is_empty());
    }
}
