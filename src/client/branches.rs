use crate::{
    client::{Client, EndpointKind, PathIds, Result},
    common::{into_object, Model, RawObject},
    BranchModel, BranchesCollection, MergedBranch,
};
use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct CreateBranchRequest {
    pub name: String,
}

#[derive(Debug, Default, Serialize)]
pub struct MergeBranchOptions {
    /// Which side wins a conflict: `master` or `source`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_conflict_resolve_using: Option<String>,

    /// Merge into this branch instead of master.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_branch_id: Option<u64>,
}

// Implementation of the branches endpoint
// https://developers.lokalise.com/reference/branches
impl Client {
    pub async fn branches<P>(&self, project_id: &str, params: &P) -> Result<BranchesCollection>
    where
        P: Serialize + ?Sized,
    {
        let raw = self
            .endpoint(EndpointKind::Branches)?
            .all(PathIds::parent(project_id), params)
            .await?;

        BranchesCollection::from_raw(raw)
    }

    pub async fn branch(&self, project_id: &str, branch_id: u64) -> Result<BranchModel> {
        let branch_id = branch_id.to_string();
        let raw = self
            .endpoint(EndpointKind::Branches)?
            .find(PathIds::parent(project_id).resource(&branch_id))
            .await?;

        BranchModel::from_raw(raw)
    }

    pub async fn create_branch<P>(&self, project_id: &str, params: &P) -> Result<BranchModel>
    where
        P: Serialize + ?Sized,
    {
        let raw = self
            .endpoint(EndpointKind::Branches)?
            .create(PathIds::parent(project_id), params)
            .await?;

        BranchModel::from_raw(raw)
    }

    pub async fn update_branch<P>(
        &self,
        project_id: &str,
        branch_id: u64,
        params: &P,
    ) -> Result<BranchModel>
    where
        P: Serialize + ?Sized,
    {
        let branch_id = branch_id.to_string();
        let raw = self
            .endpoint(EndpointKind::Branches)?
            .update(PathIds::parent(project_id).resource(&branch_id), params)
            .await?;

        BranchModel::from_raw(raw)
    }

    pub async fn delete_branch(&self, project_id: &str, branch_id: u64) -> Result<RawObject> {
        let branch_id = branch_id.to_string();
        let raw = self
            .endpoint(EndpointKind::Branches)?
            .delete(PathIds::parent(project_id).resource(&branch_id))
            .await?;

        into_object(raw, "delete branch")
    }

    /// Merge a branch, into master unless `target_branch_id` says otherwise
    ///
    /// Both the merged branch and its target come back as models.
    ///
    /// Lokalise API docs: https://developers.lokalise.com/reference/merge-a-branch
    pub async fn merge_branch<P>(
        &self,
        project_id: &str,
        branch_id: u64,
        params: &P,
    ) -> Result<MergedBranch>
    where
        P: Serialize + ?Sized,
    {
        let branch_id = branch_id.to_string();
        let raw = self
            .endpoint(EndpointKind::Branches)?
            .merge(PathIds::parent(project_id).resource(&branch_id), params)
            .await?;

        MergedBranch::from_raw(raw)
    }
}
