use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{Employee, Id};

labels! {
    /// Leave request state. Transitions are decided by the server.
    pub enum LeaveStatus {
        EnAttente => "EN_ATTENTE",
        Approuve => "APPROUVE",
        Rejete => "REJETE",
        Annule => "ANNULE",
    }
}

/// Kind of leave and its yearly allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveType {
    pub id: Id,
    pub code: String,
    pub nom: String,
    pub jours_alloues: u32,
    #[serde(default)]
    pub reportable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exigences: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    pub id: Id,
    pub employe_id: Id,
    pub type_conge_id: Id,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    /// Computed by the server from the date range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jours_demandes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motif: Option<String>,
    pub statut: LeaveStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approuve_par: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_traitement: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motif_rejet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employe: Option<Box<Employee>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_conge: Option<LeaveType>,
}

/// Creation payload; the day count is left to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeave {
    pub employe_id: Id,
    pub type_conge_id: Id,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motif: Option<String>,
    pub statut: LeaveStatus,
}

impl NewLeave {
    /// A pending request for `[date_debut, date_fin]`.
    pub fn pending(employe_id: Id, type_conge_id: Id, date_debut: NaiveDate, date_fin: NaiveDate) -> Self {
        Self {
            employe_id,
            type_conge_id,
            date_debut,
            date_fin,
            motif: None,
            statut: LeaveStatus::EnAttente,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeavePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_conge_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_debut: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_fin: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motif: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statut: Option<LeaveStatus>,
}
