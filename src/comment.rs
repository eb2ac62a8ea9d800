use crate::{collection::Collection, common::Model, Timestamp};
use serde::{Deserialize, Serialize};

/// A comment left on a translation key.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CommentModel {
    pub project_id: Option<String>,
    pub comment_id: Option<u64>,
    pub key_id: Option<u64>,
    pub comment: Option<String>,
    pub added_by: Option<u64>,
    pub added_by_email: Option<String>,
    pub added_at: Option<String>,
    pub added_at_timestamp: Option<Timestamp>,
}

impl Model for CommentModel {
    const DATA_KEY: &'static str = "comment";
    const COLLECTION_KEY: &'static str = "comments";
}

pub type CommentsCollection = Collection<CommentModel>;
