use crate::{collection::Collection, common::Model, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ProjectModel {
    pub project_id: Option<String>,
    pub project_type: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub created_at_timestamp: Option<Timestamp>,
    pub created_by: Option<u64>,
    pub created_by_email: Option<String>,
    pub team_id: Option<u64>,
    pub base_language_id: Option<u64>,
    pub base_language_iso: Option<String>,

    // Only present when requested with `include_settings` / `include_statistics`
    pub settings: Option<ProjectSettings>,
    pub statistics: Option<ProjectStatistics>,
}

impl Model for ProjectModel {
    const DATA_KEY: &'static str = "project";
    const COLLECTION_KEY: &'static str = "projects";
}

pub type ProjectsCollection = Collection<ProjectModel>;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ProjectSettings {
    pub per_platform_key_names: Option<bool>,
    pub reviewing: Option<bool>,
    pub upvoting: Option<bool>,
    pub auto_toggle_unverified: Option<bool>,
    pub offline_translation: Option<bool>,
    pub key_editing: Option<bool>,
    pub inline_machine_translations: Option<bool>,
    pub branching: Option<bool>,
    pub segmentation: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ProjectStatistics {
    pub progress_total: Option<u64>,
    pub keys_total: Option<u64>,
    pub team: Option<u64>,
    pub base_words: Option<u64>,
    pub qa_issues_total: Option<u64>,
    pub languages: Option<Vec<LanguageProgress>>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LanguageProgress {
    pub language_id: Option<u64>,
    pub language_iso: Option<String>,
    pub progress: Option<u64>,
    pub words_to_do: Option<u64>,
}
