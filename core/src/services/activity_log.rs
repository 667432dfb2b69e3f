use super::encode;
use crate::client::ApiClient;
use crate::result::ApiResult;
use crate::types::{ActivityLogEntry, Id, Page};

/// Read-only audit trail at `/journaux`.
#[derive(Debug, Clone, Copy)]
pub struct ActivityLogService<'a> {
    client: &'a ApiClient,
}

impl<'a> ActivityLogService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: Page) -> ApiResult<Vec<ActivityLogEntry>> {
        self.client.get(&format!("/journaux?{}", page.query())).await
    }

    pub async fn by_user(&self, utilisateur_id: Id, page: Page) -> ApiResult<Vec<ActivityLogEntry>> {
        self.client
            .get(&format!("/journaux/utilisateur/{utilisateur_id}?{}", page.query()))
            .await
    }

    /// History of one record, e.g. `("Employe", 7)`.
    pub async fn by_entity(&self, entite: &str, entite_id: Id) -> ApiResult<Vec<ActivityLogEntry>> {
        self.client
            .get(&format!("/journaux/entite/{}/{entite_id}", encode(entite)))
            .await
    }
}
