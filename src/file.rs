use crate::{collection::Collection, common::Model};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FileModel {
    pub project_id: Option<String>,
    pub filename: Option<String>,
    pub key_count: Option<u64>,
}

impl Model for FileModel {
    const DATA_KEY: &'static str = "file";
    const COLLECTION_KEY: &'static str = "files";
}

pub type FilesCollection = Collection<FileModel>;
