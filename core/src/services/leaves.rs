use serde::Serialize;

use crate::client::ApiClient;
use crate::result::ApiResult;
use crate::types::{Id, Leave, LeavePatch, LeaveStatus, LeaveType, NewLeave};

#[derive(Serialize)]
struct Rejection<'a> {
    motif: &'a str,
}

/// `/conges`
#[derive(Debug, Clone, Copy)]
pub struct LeaveService<'a> {
    client: &'a ApiClient,
}

impl<'a> LeaveService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Leave>> {
        self.client.get("/conges").await
    }

    pub async fn get(&self, id: Id) -> ApiResult<Leave> {
        self.client.get(&format!("/conges/{id}")).await
    }

    pub async fn create(&self, leave: &NewLeave) -> ApiResult<Leave> {
        self.client.post("/conges", leave).await
    }

    pub async fn update(&self, id: Id, patch: &LeavePatch) -> ApiResult<Leave> {
        self.client.put(&format!("/conges/{id}"), patch).await
    }

    pub async fn delete(&self, id: Id) -> ApiResult<()> {
        self.client.delete(&format!("/conges/{id}")).await
    }

    pub async fn approve(&self, id: Id) -> ApiResult<Leave> {
        self.client
            .put(&format!("/conges/{id}/approuver"), &serde_json::json!({}))
            .await
    }

    pub async fn reject(&self, id: Id, motif: &str) -> ApiResult<Leave> {
        self.client
            .put(&format!("/conges/{id}/rejeter"), &Rejection { motif })
            .await
    }

    pub async fn by_employee(&self, employe_id: Id) -> ApiResult<Vec<Leave>> {
        self.client.get(&format!("/conges/employe/{employe_id}")).await
    }

    pub async fn by_status(&self, status: LeaveStatus) -> ApiResult<Vec<Leave>> {
        self.client.get(&format!("/conges/statut/{status}")).await
    }

    /// Leave kinds with their yearly allowance.
    pub async fn leave_types(&self) -> ApiResult<Vec<LeaveType>> {
        self.client.get("/types-conge").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{client_with, Reply, ScriptedTransport};
    use serde_json::{json, Value};

    fn leave_json(statut: &str) -> Value {
        json!({
            "id": 12,
            "employeId": 7,
            "typeCongeId": 1,
            "dateDebut": "2024-08-01",
            "dateFin": "2024-08-10",
            "joursDemandes": 8,
            "statut": statut
        })
    }

    #[tokio::test]
    async fn approve_puts_an_empty_object() {
        let transport = ScriptedTransport::new().on(
            HttpMethod::Put,
            "/conges/12/approuver",
            Reply::json(200, leave_json("APPROUVE")),
        );
        let (client, _, log) = client_with(transport);

        let approved = client.leaves().approve(12).await;
        assert_eq!(approved.payload().map(|l| l.statut), Some(LeaveStatus::Approuve));
        assert_eq!(log.requests()[0].body.as_ref().and_then(|b| b.as_json()), Some("{}"));
    }

    #[tokio::test]
    async fn reject_carries_the_reason() {
        let transport = ScriptedTransport::new().on(
            HttpMethod::Put,
            "/conges/12/rejeter",
            Reply::json(200, leave_json("REJETE")),
        );
        let (client, _, log) = client_with(transport);

        let rejected = client.leaves().reject(12, "Période chargée").await;
        assert_eq!(rejected.payload().map(|l| l.statut), Some(LeaveStatus::Rejete));
        let body: Value =
            serde_json::from_str(log.requests()[0].body.as_ref().and_then(|b| b.as_json()).unwrap()).unwrap();
        assert_eq!(body, json!({"motif": "Période chargée"}));
    }

    #[tokio::test]
    async fn filters_hit_their_paths() {
        let transport = ScriptedTransport::new()
            .on(HttpMethod::Get, "/conges/employe/7", Reply::json(200, json!([leave_json("EN_ATTENTE")])))
            .on(HttpMethod::Get, "/conges/statut/EN_ATTENTE", Reply::json(200, json!([])))
            .on(
                HttpMethod::Get,
                "/types-conge",
                Reply::json(200, json!([{"id": 1, "code": "CA", "nom": "Annuel", "joursAlloues": 30}])),
            );
        let (client, _, _) = client_with(transport);
        let leaves = client.leaves();

        assert_eq!(leaves.by_employee(7).await.payload().map(Vec::len), Some(1));
        assert_eq!(leaves.by_status(LeaveStatus::EnAttente).await.payload().map(Vec::len), Some(0));
        let types = leaves.leave_types().await.into_payload().unwrap();
        assert!(!types[0].reportable);
    }
}
