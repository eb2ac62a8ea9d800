use crate::{collection::Collection, common::Model, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ContributorModel {
    pub project_id: Option<String>,
    pub user_id: Option<u64>,
    pub email: Option<String>,
    pub fullname: Option<String>,
    pub created_at: Option<String>,
    pub created_at_timestamp: Option<Timestamp>,
    pub is_admin: Option<bool>,
    pub is_reviewer: Option<bool>,
    pub languages: Option<Vec<ContributorLanguage>>,
    pub admin_rights: Option<Vec<String>>,
}

/// Access a contributor has to a single project language.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ContributorLanguage {
    pub lang_id: Option<u64>,
    pub lang_iso: Option<String>,
    pub lang_name: Option<String>,
    pub is_writable: Option<bool>,
}

impl Model for ContributorModel {
    const DATA_KEY: &'static str = "contributor";
    const COLLECTION_KEY: &'static str = "contributors";
}

pub type ContributorsCollection = Collection<ContributorModel>;
