use tracing::warn;

use super::encode;
use crate::client::ApiClient;
use crate::result::ApiResult;
use crate::types::{Employee, EmployeePatch, EmployeeStats, EmployeeStatus, Id, NewEmployee};

/// One of the four sub-requests behind [`EmployeeService::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsPart {
    Total,
    Status(EmployeeStatus),
}

/// Headcount summary plus the parts that could not be fetched. Failed parts
/// count as zero in `stats`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    pub stats: EmployeeStats,
    pub failed: Vec<StatsPart>,
}

impl StatsReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// `/employes`
#[derive(Debug, Clone, Copy)]
pub struct EmployeeService<'a> {
    client: &'a ApiClient,
}

impl<'a> EmployeeService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Employee>> {
        self.client.get("/employes").await
    }

    pub async fn get(&self, id: Id) -> ApiResult<Employee> {
        self.client.get(&format!("/employes/{id}")).await
    }

    pub async fn by_matricule(&self, matricule: &str) -> ApiResult<Employee> {
        self.client
            .get(&format!("/employes/matricule/{}", encode(matricule)))
            .await
    }

    pub async fn create(&self, employee: &NewEmployee) -> ApiResult<Employee> {
        self.client.post("/employes", employee).await
    }

    pub async fn update(&self, id: Id, patch: &EmployeePatch) -> ApiResult<Employee> {
        self.client.put(&format!("/employes/{id}"), patch).await
    }

    pub async fn delete(&self, id: Id) -> ApiResult<()> {
        self.client.delete(&format!("/employes/{id}")).await
    }

    pub async fn search(&self, query: &str) -> ApiResult<Vec<Employee>> {
        self.client
            .get(&format!("/employes/search?query={}", encode(query)))
            .await
    }

    pub async fn by_status(&self, status: EmployeeStatus) -> ApiResult<Vec<Employee>> {
        self.client.get(&format!("/employes/statut/{status}")).await
    }

    pub async fn count_by_status(&self, status: EmployeeStatus) -> ApiResult<u64> {
        self.client
            .get(&format!("/employes/count/statut/{status}"))
            .await
    }

    pub async fn pastors(&self) -> ApiResult<Vec<Employee>> {
        self.client.get("/employes/pasteurs").await
    }

    /// Dashboard summary. Always succeeds with status 200: a sub-request that
    /// fails counts as zero. Use [`Self::stats_report`] to see which parts
    /// were missing.
    pub async fn stats(&self) -> ApiResult<EmployeeStats> {
        ApiResult::success(self.stats_report().await.stats, 200)
    }

    /// Runs the employee list and the three per-status counts concurrently.
    /// Each branch settles on its own; none cancels the others.
    pub async fn stats_report(&self) -> StatsReport {
        let (total, actifs, inactifs, en_conge) = tokio::join!(
            self.list(),
            self.count_by_status(EmployeeStatus::Actif),
            self.count_by_status(EmployeeStatus::Inactif),
            self.count_by_status(EmployeeStatus::EnConge),
        );

        let mut failed = Vec::new();
        let stats = EmployeeStats {
            total: settle(StatsPart::Total, total.map(|all| all.len() as u64), &mut failed),
            actifs: settle(StatsPart::Status(EmployeeStatus::Actif), actifs, &mut failed),
            inactifs: settle(StatsPart::Status(EmployeeStatus::Inactif), inactifs, &mut failed),
            en_conge: settle(StatsPart::Status(EmployeeStatus::EnConge), en_conge, &mut failed),
        };
        StatsReport { stats, failed }
    }
}

fn settle(part: StatsPart, result: ApiResult<u64>, failed: &mut Vec<StatsPart>) -> u64 {
    match result {
        ApiResult::Success { payload, .. } => payload.unwrap_or(0),
        ApiResult::Failure { error, status } => {
            warn!(?part, status, error = %error, "employee stats part unavailable, counting zero");
            failed.push(part);
            0
        }
    }
}
