use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Employee, Id};

labels! {
    pub enum DocumentType {
        Cv => "CV",
        Diplome => "DIPLOME",
        Certificat => "CERTIFICAT",
        Contrat => "CONTRAT",
        Photo => "PHOTO",
        LettreCreance => "LETTRE_CREANCE",
        Ordination => "ORDINATION",
        AttestationTravail => "ATTESTATION_TRAVAIL",
        BulletinPaie => "BULLETIN_PAIE",
        Cin => "CIN",
        Cnaps => "CNAPS",
        Ostie => "OSTIE",
        Autre => "AUTRE",
    }
}

/// Metadata of a stored file. The content itself stays on the server and is
/// fetched with `DocumentService::download`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Id,
    pub employe_id: Id,
    pub type_document: DocumentType,
    pub nom_fichier: String,
    pub chemin_fichier: String,
    pub date_upload: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employe: Option<Box<Employee>>,
}

/// Answer of `/upload/justificatif`: where the server stored the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub file_path: String,
}
