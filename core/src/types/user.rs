use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Employee, Id};

labels! {
    pub enum Role {
        Admin => "ADMIN",
        SecretaireFederal => "SECRETAIRE_FEDERAL",
        ResponsableDistrict => "RESPONSABLE_DISTRICT",
        Pasteur => "PASTEUR",
        AssistantRh => "ASSISTANT_RH",
    }
}

/// Authentication principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub nom_utilisateur: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employe_id: Option<Id>,
    pub actif: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_creation: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employe: Option<Box<Employee>>,
}

/// Creation payload. The password travels only on creation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub nom_utilisateur: String,
    pub mot_de_passe: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employe_id: Option<Id>,
    pub actif: bool,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("nom_utilisateur", &self.nom_utilisateur)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("employe_id", &self.employe_id)
            .field("actif", &self.actif)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employe_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actif: Option<bool>,
}

/// Body of a successful `/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
