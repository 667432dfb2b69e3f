use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Employee, Id};

labels! {
    /// Church level that issues a kind of pastoral letter.
    pub enum AuthorityLevel {
        EgliseLocale => "EGLISE_LOCALE",
        District => "DISTRICT",
        Federation => "FEDERATION",
        Union => "UNION",
        Division => "DIVISION",
    }
}

labels! {
    pub enum AssignmentStatus {
        Active => "ACTIVE",
        Terminee => "TERMINEE",
        Provisoire => "PROVISOIRE",
    }
}

labels! {
    pub enum PastoralFunction {
        Evangeliste => "EVANGELISTE",
        PasteurStagiaire => "PASTEUR_STAGIAIRE",
        PasteurAutorise => "PASTEUR_AUTORISE",
        PasteurConsacre => "PASTEUR_CONSACRE",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastoralLetterType {
    pub id: Id,
    pub code: String,
    pub nom: String,
    pub niveau_autorite: AuthorityLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validite_annees: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastoralLetter {
    pub id: Id,
    pub employe_id: Id,
    pub type_lettre_id: Id,
    pub numero_lettre: String,
    pub date_emission: NaiveDate,
    /// Letters without an expiry stay valid until revoked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_expiration: Option<NaiveDate>,
    pub emetteur: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employe: Option<Box<Employee>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_lettre: Option<PastoralLetterType>,
}

impl PastoralLetter {
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.date_expiration.is_some_and(|d| d < today)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPastoralLetter {
    pub employe_id: Id,
    pub type_lettre_id: Id,
    pub numero_lettre: String,
    pub date_emission: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_expiration: Option<NaiveDate>,
    pub emetteur: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastoralLetterPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_lettre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_expiration: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

/// A pastor posted to a local church for a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastoralAssignment {
    pub id: Id,
    pub pasteur_id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lettre_affectation_id: Option<Id>,
    pub eglise_locale: String,
    pub district: String,
    pub date_debut: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_fin: Option<NaiveDate>,
    pub fonction: PastoralFunction,
    pub statut: AssignmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pasteur: Option<Box<Employee>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lettre_affectation: Option<Box<PastoralLetter>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub pasteur_id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lettre_affectation_id: Option<Id>,
    pub eglise_locale: String,
    pub district: String,
    pub date_debut: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_fin: Option<NaiveDate>,
    pub fonction: PastoralFunction,
    pub statut: AssignmentStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lettre_affectation_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eglise_locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_fin: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonction: Option<PastoralFunction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statut: Option<AssignmentStatus>,
}
