use crate::{
    client::{Error, Result},
    collection::Collection,
    common::{inherit_project_id, into_object, Model, RawObject},
    Timestamp,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct BranchModel {
    pub project_id: Option<String>,
    pub branch_id: Option<u64>,
    pub name: Option<String>,
    pub created_at: Option<String>,
    pub created_at_timestamp: Option<Timestamp>,
    pub created_by: Option<u64>,
    pub created_by_email: Option<String>,
}

impl Model for BranchModel {
    const DATA_KEY: &'static str = "branch";
    const COLLECTION_KEY: &'static str = "branches";
}

pub type BranchesCollection = Collection<BranchModel>;

/// Result of merging one branch into another.
#[derive(Clone, Debug)]
pub struct MergedBranch {
    pub project_id: Option<String>,
    pub branch_merged: Option<bool>,
    pub branch: BranchModel,
    pub target_branch: BranchModel,
}

impl MergedBranch {
    pub fn from_raw(raw: Value) -> Result<Self> {
        let mut object = into_object(raw, "merge")?;

        let branch = nested_branch(&mut object, "branch")?;
        let target_branch = nested_branch(&mut object, "target_branch")?;

        Ok(Self {
            project_id: object
                .get("project_id")
                .and_then(Value::as_str)
                .map(str::to_owned),
            branch_merged: object.get("branch_merged").and_then(Value::as_bool),
            branch,
            target_branch,
        })
    }
}

fn nested_branch(object: &mut RawObject, key: &'static str) -> Result<BranchModel> {
    let mut inner = match object.remove(key) {
        Some(inner) => into_object(inner, key)?,
        None => return Err(Error::malformed(format!("merge response is missing `{}`", key))),
    };
    inherit_project_id(object, &mut inner);

    BranchModel::from_raw(Value::Object(inner))
}
