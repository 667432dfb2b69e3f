use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{Employee, Id};

labels! {
    /// Absence state. Moves out of `EN_ATTENTE` through validate, reject or
    /// cancel.
    pub enum AbsenceStatus {
        EnAttente => "EN_ATTENTE",
        Valide => "VALIDE",
        Rejete => "REJETE",
        Annule => "ANNULE",
    }
}

labels! {
    /// Part of the day an absence covers.
    pub enum AbsenceDuration {
        Journee => "JOURNEE",
        Matin => "MATIN",
        ApresMidi => "APRES_MIDI",
    }
}

/// Grey the server falls back to when a type has no colour.
pub const DEFAULT_ABSENCE_COLOR: &str = "#6B7280";

/// Kind of absence: paid or not, proof required or not, optional yearly cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceType {
    pub id: Id,
    pub code: String,
    pub nom: String,
    #[serde(default)]
    pub est_paye: bool,
    #[serde(default)]
    pub necessite_justificatif: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plafond_annuel: Option<u32>,
    #[serde(default = "default_color")]
    pub couleur: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_color() -> String {
    DEFAULT_ABSENCE_COLOR.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAbsenceType {
    pub code: String,
    pub nom: String,
    pub est_paye: bool,
    pub necessite_justificatif: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plafond_annuel: Option<u32>,
    pub couleur: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewAbsenceType {
    /// A paid type needing no proof, with no cap and the default colour.
    pub fn new(code: impl Into<String>, nom: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            nom: nom.into(),
            est_paye: true,
            necessite_justificatif: false,
            plafond_annuel: None,
            couleur: default_color(),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceTypePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub est_paye: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub necessite_justificatif: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plafond_annuel: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub couleur: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A single-day absence. `annee` is derived by the server from the date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Absence {
    pub id: Id,
    pub employe_id: Id,
    pub type_absence_id: Id,
    pub date_absence: NaiveDate,
    pub duree: AbsenceDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motif: Option<String>,
    pub statut: AbsenceStatus,
    /// Path returned by `/upload/justificatif`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justificatif: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_creation: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modification: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annee: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employe: Option<Box<Employee>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_absence: Option<AbsenceType>,
}

/// Creation and update payload. Updates resend the whole absence; the status
/// only changes through the dedicated transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAbsence {
    pub employe_id: Id,
    pub type_absence_id: Id,
    pub date_absence: NaiveDate,
    pub duree: AbsenceDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motif: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justificatif: Option<String>,
}

impl NewAbsence {
    /// A full-day absence with no reason or proof attached.
    pub fn full_day(employe_id: Id, type_absence_id: Id, date_absence: NaiveDate) -> Self {
        Self {
            employe_id,
            type_absence_id,
            date_absence,
            duree: AbsenceDuration::Journee,
            motif: None,
            justificatif: None,
        }
    }

    pub fn with_justificatif(mut self, path: impl Into<String>) -> Self {
        self.justificatif = Some(path.into());
        self
    }
}
