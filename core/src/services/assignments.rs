use crate::client::ApiClient;
use crate::result::ApiResult;
use crate::types::{AssignmentPatch, Id, NewAssignment, PastoralAssignment};

/// `/affectations-pastorales`
#[derive(Debug, Clone, Copy)]
pub struct AssignmentService<'a> {
    client: &'a ApiClient,
}

impl<'a> AssignmentService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<PastoralAssignment>> {
        self.client.get("/affectations-pastorales").await
    }

    pub async fn get(&self, id: Id) -> ApiResult<PastoralAssignment> {
        self.client.get(&format!("/affectations-pastorales/{id}")).await
    }

    pub async fn create(&self, assignment: &NewAssignment) -> ApiResult<PastoralAssignment> {
        self.client.post("/affectations-pastorales", assignment).await
    }

    pub async fn update(&self, id: Id, patch: &AssignmentPatch) -> ApiResult<PastoralAssignment> {
        self.client
            .put(&format!("/affectations-pastorales/{id}"), patch)
            .await
    }

    pub async fn delete(&self, id: Id) -> ApiResult<()> {
        self.client.delete(&format!("/affectations-pastorales/{id}")).await
    }

    pub async fn by_pastor(&self, pasteur_id: Id) -> ApiResult<Vec<PastoralAssignment>> {
        self.client
            .get(&format!("/affectations-pastorales/pasteur/{pasteur_id}"))
            .await
    }

    pub async fn active(&self) -> ApiResult<Vec<PastoralAssignment>> {
        self.client.get("/affectations-pastorales/actives").await
    }
}
