use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::result::ApiResult;
use crate::types::{
    Absence, AbsenceStatus, AbsenceType, AbsenceTypePatch, Employee, Id, NewAbsence,
    NewAbsenceType,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Rejection<'a> {
    motif_rejet: &'a str,
}

/// What an absence entry form needs before it can render. Both loads settle
/// independently, so a failed employee list still leaves the types usable.
#[derive(Debug)]
pub struct AbsenceFormOptions {
    pub types: ApiResult<Vec<AbsenceType>>,
    pub employees: ApiResult<Vec<Employee>>,
}

/// `/absences`
#[derive(Debug, Clone, Copy)]
pub struct AbsenceService<'a> {
    client: &'a ApiClient,
}

impl<'a> AbsenceService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Absence>> {
        self.client.get("/absences").await
    }

    pub async fn get(&self, id: Id) -> ApiResult<Absence> {
        self.client.get(&format!("/absences/{id}")).await
    }

    pub async fn create(&self, absence: &NewAbsence) -> ApiResult<Absence> {
        self.client.post("/absences", absence).await
    }

    pub async fn update(&self, id: Id, absence: &NewAbsence) -> ApiResult<Absence> {
        self.client.put(&format!("/absences/{id}"), absence).await
    }

    pub async fn delete(&self, id: Id) -> ApiResult<()> {
        self.client.delete(&format!("/absences/{id}")).await
    }

    pub async fn by_employee(&self, employe_id: Id) -> ApiResult<Vec<Absence>> {
        self.client.get(&format!("/absences/employe/{employe_id}")).await
    }

    pub async fn by_status(&self, status: AbsenceStatus) -> ApiResult<Vec<Absence>> {
        self.client.get(&format!("/absences/statut/{status}")).await
    }

    pub async fn validate(&self, id: Id) -> ApiResult<Absence> {
        self.client.put_empty(&format!("/absences/{id}/validate")).await
    }

    pub async fn reject(&self, id: Id, motif_rejet: &str) -> ApiResult<Absence> {
        self.client
            .put(&format!("/absences/{id}/reject"), &Rejection { motif_rejet })
            .await
    }

    pub async fn cancel(&self, id: Id) -> ApiResult<Absence> {
        self.client.put_empty(&format!("/absences/{id}/cancel")).await
    }

    /// Yearly figures. The server decides the shape, so it stays raw JSON.
    pub async fn statistics(&self, annee: i32) -> ApiResult<Value> {
        self.client.get(&format!("/absences/statistics/{annee}")).await
    }

    /// Loads absence types and employees concurrently.
    pub async fn form_options(&self) -> AbsenceFormOptions {
        let absence_types = self.client.absence_types();
        let employees_svc = self.client.employees();
        let (types, employees) = tokio::join!(absence_types.list(), employees_svc.list(),);
        AbsenceFormOptions { types, employees }
    }
}

/// `/types-absence`
#[derive(Debug, Clone, Copy)]
pub struct AbsenceTypeService<'a> {
    client: &'a ApiClient,
}

impl<'a> AbsenceTypeService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<AbsenceType>> {
        self.client.get("/types-absence").await
    }

    pub async fn get(&self, id: Id) -> ApiResult<AbsenceType> {
        self.client.get(&format!("/types-absence/{id}")).await
    }

    pub async fn create(&self, kind: &NewAbsenceType) -> ApiResult<AbsenceType> {
        self.client.post("/types-absence", kind).await
    }

    pub async fn update(&self, id: Id, patch: &AbsenceTypePatch) -> ApiResult<AbsenceType> {
        self.client.put(&format!("/types-absence/{id}"), patch).await
    }

    pub async fn delete(&self, id: Id) -> ApiResult<()> {
        self.client.delete(&format!("/types-absence/{id}")).await
    }
}
