//! Domain DTOs for the RH API.
//!
//! # Design
//! Every resource has three shapes: the full server representation (carries
//! the server-assigned `id`), a `New*` creation payload (no `id`), and a
//! `*Patch` where every field is optional and omitted from the JSON when
//! unset, so updates only send what changed.
//!
//! Enum labels are the closed upper-case sets the backend hard-codes. An
//! unknown label fails to decode instead of being passed through.
//!
//! Embedded referenced entities (`Leave::employe`, ...) are read-only
//! snapshots included at the server's discretion.

/// Declares a closed label enum with its wire spelling, `as_str` and
/// `Display`. Labels double as path segments (`/employes/statut/ACTIF`).
macro_rules! labels {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use labels;

mod absence;
mod activity_log;
mod document;
mod employee;
mod leave;
mod pastoral;
mod training;
mod user;

pub use absence::{
    Absence, AbsenceDuration, AbsenceStatus, AbsenceType, AbsenceTypePatch, NewAbsence,
    NewAbsenceType, DEFAULT_ABSENCE_COLOR,
};
pub use activity_log::{ActivityLogEntry, Page};
pub use document::{Document, DocumentType, UploadedFile};
pub use employee::{
    AccreditationLevel, ContractType, Employee, EmployeePatch, EmployeeStats, EmployeeStatus,
    MaritalStatus, NewEmployee, Position,
};
pub use leave::{Leave, LeavePatch, LeaveStatus, LeaveType, NewLeave};
pub use pastoral::{
    AssignmentPatch, AssignmentStatus, AuthorityLevel, NewAssignment, NewPastoralLetter,
    PastoralAssignment, PastoralFunction, PastoralLetter, PastoralLetterPatch,
    PastoralLetterType,
};
pub use training::{Institution, NewTraining, Training, TrainingLevel, TrainingPatch, TrainingType};
pub use user::{LoginResponse, NewUser, Role, User, UserPatch};

/// Server-assigned key shared by every entity.
pub type Id = i64;
