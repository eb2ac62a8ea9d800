use crate::{collection::Collection, common::Model};
use serde::{Deserialize, Serialize};

/// A language, either one of the system languages or one added to a project.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LanguageModel {
    pub project_id: Option<String>,
    pub lang_id: Option<u64>,
    pub lang_iso: Option<String>,
    pub lang_name: Option<String>,
    pub is_rtl: Option<bool>,
    pub plural_forms: Option<Vec<String>>,
}

impl Model for LanguageModel {
    const DATA_KEY: &'static str = "language";
    const COLLECTION_KEY: &'static str = "languages";
}

pub type LanguagesCollection = Collection<LanguageModel>;
