use crate::{
    client::{Client, EndpointKind, PathIds, Result},
    common::{into_object, Model, RawObject},
    ContributorModel, ContributorsCollection,
};
use serde::Serialize;

// Implementation of the contributors endpoint
// https://developers.lokalise.com/reference/contributors
impl Client {
    pub async fn contributors<P>(
        &self,
        project_id: &str,
        params: &P,
    ) -> Result<ContributorsCollection>
    where
        P: Serialize + ?Sized,
    {
        let raw = self
            .endpoint(EndpointKind::Contributors)?
            .all(PathIds::parent(project_id), params)
            .await?;

        ContributorsCollection::from_raw(raw)
    }

    pub async fn contributor(&self, project_id: &str, user_id: u64) -> Result<ContributorModel> {
        let user_id = user_id.to_string();
        let raw = self
            .endpoint(EndpointKind::Contributors)?
            .find(PathIds::parent(project_id).resource(&user_id))
            .await?;

        ContributorModel::from_raw(raw)
    }

    /// Invite contributors to a project. Takes `{"contributors": [..]}`.
    pub async fn create_contributors<P>(
        &self,
        project_id: &str,
        params: &P,
    ) -> Result<ContributorsCollection>
    where
        P: Serialize + ?Sized,
    {
        let raw = self
            .endpoint(EndpointKind::Contributors)?
            .create(PathIds::parent(project_id), params)
            .await?;

        ContributorsCollection::from_raw(raw)
    }

    pub async fn update_contributor<P>(
        &self,
        project_id: &str,
        user_id: u64,
        params: &P,
    ) -> Result<ContributorModel>
    where
        P: Serialize + ?Sized,
    {
        let user_id = user_id.to_string();
        let raw = self
            .endpoint(EndpointKind::Contributors)?
            .update(PathIds::parent(project_id).resource(&user_id), params)
            .await?;

        ContributorModel::from_raw(raw)
    }

    pub async fn delete_contributor(&self, project_id: &str, user_id: u64) -> Result<RawObject> {
        let user_id = user_id.to_string();
        let raw = self
            .endpoint(EndpointKind::Contributors)?
            .delete(PathIds::parent(project_id).resource(&user_id))
            .await?;

        into_object(raw, "delete contributor")
    }
}
