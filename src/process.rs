use crate::{collection::Collection, common::Model, Timestamp};
use serde::{Deserialize, Serialize};

/// A background process queued by the API, such as a file import.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct QueuedProcessModel {
    pub project_id: Option<String>,
    pub process_id: Option<String>,
    #[serde(rename = "type")]
    pub process_type: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
    pub created_by: Option<u64>,
    pub created_by_email: Option<String>,
    pub created_at: Option<String>,
    pub created_at_timestamp: Option<Timestamp>,
    // Shape depends on the process type
    pub details: Option<serde_json::Value>,
}

impl QueuedProcessModel {
    pub fn is_finished(&self) -> bool {
        matches!(self.status.as_deref(), Some("finished"))
    }
}

impl Model for QueuedProcessModel {
    const DATA_KEY: &'static str = "process";
    const COLLECTION_KEY: &'static str = "processes";
}

pub type QueuedProcessesCollection = Collection<QueuedProcessModel>;

#[cfg(test)]
mod test {
    use super::QueuedProcessModel;
    use crate::common::Model;

    #[test]
    fn upload_process() {
        const JSON: &str = include_str!("../test-input/upload-process.json");
        let process = QueuedProcessModel::from_raw(serde_json::from_str(JSON).unwrap()).unwrap();

        assert_eq!(process.project_id.as_deref(), Some("3002780358964f9bab5a92.87762498"));
        assert_eq!(process.process_id.as_deref(), Some("2e0559e60e856555fbc15bdf78ab5d5ed7cc3b1a"));
        assert_eq!(process.process_type.as_deref(), Some("file-import"));
        assert!(!process.is_finished());
        assert!(process.details.unwrap()["files"].is_array());
    }
}
