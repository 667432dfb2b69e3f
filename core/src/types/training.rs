use serde::{Deserialize, Serialize};

use super::Id;

labels! {
    pub enum TrainingType {
        Theologique => "THEOLOGIQUE",
        Missionnaire => "MISSIONNAIRE",
        Administratif => "ADMINISTRATIF",
        Medical => "MEDICAL",
        Educatif => "EDUCATIF",
    }
}

labels! {
    pub enum TrainingLevel {
        Certificat => "CERTIFICAT",
        Diplome => "DIPLOME",
        Licence => "LICENCE",
        Master => "MASTER",
        Doctorat => "DOCTORAT",
    }
}

labels! {
    pub enum Institution {
        FaculteAdventiste => "FACULTÉ_ADVENTISTE",
        Seminaire => "SEMINAIRE",
        UniversiteAdventiste => "UNIVERSITE_ADVENTISTE",
        Autre => "AUTRE",
    }
}

/// Catalog entry; not tied to any employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_formation: Option<String>,
    pub nom_formation: String,
    pub type_formation: TrainingType,
    pub niveau: TrainingLevel,
    pub institution: Institution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duree_semaines: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obligatoire_pasteur: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTraining {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_formation: Option<String>,
    pub nom_formation: String,
    pub type_formation: TrainingType,
    pub niveau: TrainingLevel,
    pub institution: Institution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duree_semaines: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obligatoire_pasteur: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nom_formation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub niveau: Option<TrainingLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duree_semaines: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obligatoire_pasteur: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
