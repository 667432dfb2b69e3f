//! Entity services: one thin, typed grouping of calls per REST resource.
//!
//! Each service borrows the `ApiClient`, builds a path, picks a verb and
//! forwards. Services hold no state of their own; everything shared (the
//! session token) lives in the client.

mod absences;
mod activity_log;
mod assignments;
mod documents;
mod employees;
mod leaves;
mod pastoral_letters;
mod trainings;
mod users;

pub use absences::{AbsenceFormOptions, AbsenceService, AbsenceTypeService};
pub use activity_log::ActivityLogService;
pub use assignments::AssignmentService;
pub use documents::DocumentService;
pub use employees::{EmployeeService, StatsPart, StatsReport};
pub use leaves::LeaveService;
pub use pastoral_letters::PastoralLetterService;
pub use trainings::TrainingService;
pub use users::UserService;

use crate::client::ApiClient;
use crate::result::ApiResult;

impl ApiClient {
    pub fn employees(&self) -> EmployeeService<'_> {
        EmployeeService::new(self)
    }

    pub fn leaves(&self) -> LeaveService<'_> {
        LeaveService::new(self)
    }

    pub fn absences(&self) -> AbsenceService<'_> {
        AbsenceService::new(self)
    }

    pub fn absence_types(&self) -> AbsenceTypeService<'_> {
        AbsenceTypeService::new(self)
    }

    pub fn documents(&self) -> DocumentService<'_> {
        DocumentService::new(self)
    }

    pub fn pastoral_letters(&self) -> PastoralLetterService<'_> {
        PastoralLetterService::new(self)
    }

    pub fn assignments(&self) -> AssignmentService<'_> {
        AssignmentService::new(self)
    }

    pub fn trainings(&self) -> TrainingService<'_> {
        TrainingService::new(self)
    }

    pub fn users(&self) -> UserService<'_> {
        UserService::new(self)
    }

    pub fn activity_log(&self) -> ActivityLogService<'_> {
        ActivityLogService::new(self)
    }
}

/// Keep the status, drop whatever body came back.
pub(crate) fn without_payload<T>(result: ApiResult<T>) -> ApiResult<()> {
    match result {
        ApiResult::Success { status, .. } => ApiResult::empty(status),
        ApiResult::Failure { error, status } => ApiResult::failure(error, status),
    }
}

/// Percent-encode a caller-supplied path segment or query value.
pub(crate) fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
