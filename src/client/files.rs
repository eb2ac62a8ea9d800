use crate::{
    client::{pagination::serialize_flag, Client, EndpointKind, PathIds, Result},
    common::{into_object, Model, RawObject},
    FilesCollection, QueuedProcessModel,
};
use serde::Serialize;

/// Body of a file upload. The upload is processed in the background.
#[derive(Debug, Default, Serialize)]
pub struct UploadFileRequest {
    /// Base64 encoded file contents.
    pub data: String,
    pub filename: String,
    pub lang_iso: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(
        serialize_with = "serialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub convert_placeholders: Option<bool>,
    #[serde(
        serialize_with = "serialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub replace_modified: Option<bool>,
}

#[derive(Debug, Default, Serialize)]
pub struct DownloadFilesRequest {
    /// File format, e.g. `json`, `xliff`, `strings`.
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_filenames: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_structure: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_langs: Vec<String>,
}

// Implementation of the files endpoint
// https://developers.lokalise.com/reference/files
impl Client {
    pub async fn files<P>(&self, project_id: &str, params: &P) -> Result<FilesCollection>
    where
        P: Serialize + ?Sized,
    {
        let raw = self
            .endpoint(EndpointKind::Files)?
            .all(PathIds::parent(project_id), params)
            .await?;

        FilesCollection::from_raw(raw)
    }

    /// Queue a file for import
    ///
    /// Returns the queued process; poll it with [`Client::queued_process`].
    ///
    /// Lokalise API docs: https://developers.lokalise.com/reference/upload-a-file
    pub async fn upload_file<P>(&self, project_id: &str, params: &P) -> Result<QueuedProcessModel>
    where
        P: Serialize + ?Sized,
    {
        let raw = self
            .endpoint(EndpointKind::Files)?
            .upload(PathIds::parent(project_id), params)
            .await?;

        QueuedProcessModel::from_raw(raw)
    }

    /// Build a translation bundle. The response carries the bundle URL.
    ///
    /// Lokalise API docs: https://developers.lokalise.com/reference/download-files
    pub async fn download_files<P>(&self, project_id: &str, params: &P) -> Result<RawObject>
    where
        P: Serialize + ?Sized,
    {
        let raw = self
            .endpoint(EndpointKind::Files)?
            .download(PathIds::parent(project_id), params)
            .await?;

        into_object(raw, "download files")
    }
}
