use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Id, User};

/// One audit trail record. Append-only: the client never writes these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilisateur_id: Option<Id>,
    pub action: String,
    pub entite: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entite_id: Option<Id>,
    /// Snapshot before the change, free-form JSON chosen by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anciennes_valeurs: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nouvelles_valeurs: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adresse_ip: Option<String>,
    pub horodatage: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilisateur: Option<Box<User>>,
}

/// Zero-based page request for the journal endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub size: u32,
}

impl Page {
    pub const DEFAULT_SIZE: u32 = 50;

    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn query(&self) -> String {
        format!("page={}&size={}", self.page, self.size)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }
}
