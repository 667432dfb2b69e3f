use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Id;

labels! {
    /// Employment status; also the key of the dashboard counters.
    pub enum EmployeeStatus {
        Actif => "ACTIF",
        Inactif => "INACTIF",
        EnConge => "EN_CONGE",
    }
}

labels! {
    pub enum Position {
        Evangeliste => "EVANGELISTE",
        PasteurStagiaire => "PASTEUR_STAGIAIRE",
        PasteurAutorise => "PASTEUR_AUTORISE",
        PasteurConsacre => "PASTEUR_CONSACRE",
        SecretaireExecutif => "SECRETAIRE_EXECUTIF",
        Tresorier => "TRESORIER",
        AssistantRh => "ASSISTANT_RH",
        Verificateur => "VERIFICATEUR",
        Autre => "AUTRE",
    }
}

labels! {
    pub enum ContractType {
        Cdd => "CDD",
        Cdi => "CDI",
        Benevolat => "BENEVOLAT",
    }
}

labels! {
    pub enum MaritalStatus {
        Celibataire => "CELIBATAIRE",
        Marie => "MARIE",
        Divorce => "DIVORCE",
        Veuf => "VEUF",
    }
}

labels! {
    pub enum AccreditationLevel {
        District => "DISTRICT",
        Federation => "FEDERATION",
    }
}

/// An employee record, the root most other resources point at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Id,
    pub matricule: String,
    pub nom: String,
    pub prenom: String,
    pub date_naissance: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lieu_naissance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationalite: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statut_matrimonial: Option<MaritalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_mariage: Option<NaiveDate>,
    pub poste: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_contrat: Option<ContractType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_debut: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_fin: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salaire_base: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pourcentage_salaire: Option<f64>,
    pub statut: EmployeeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_accreditation: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub niveau_accreditation: Option<AccreditationLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groupe_accreditation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superviseur_hierarchique: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affectation_actuelle: Option<String>,
}

/// Creation payload for an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub matricule: String,
    pub nom: String,
    pub prenom: String,
    pub date_naissance: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lieu_naissance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationalite: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statut_matrimonial: Option<MaritalStatus>,
    pub poste: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_contrat: Option<ContractType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_debut: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salaire_base: Option<f64>,
    pub statut: EmployeeStatus,
}

impl NewEmployee {
    /// Minimal active employee; optional fields can be filled in afterwards.
    pub fn new(
        matricule: impl Into<String>,
        nom: impl Into<String>,
        prenom: impl Into<String>,
        date_naissance: NaiveDate,
        poste: Position,
    ) -> Self {
        Self {
            matricule: matricule.into(),
            nom: nom.into(),
            prenom: prenom.into(),
            date_naissance,
            lieu_naissance: None,
            nationalite: None,
            cin: None,
            adresse: None,
            telephone: None,
            email: None,
            statut_matrimonial: None,
            poste,
            type_contrat: None,
            date_debut: None,
            salaire_base: None,
            statut: EmployeeStatus::Actif,
        }
    }
}

/// Partial update; only the fields set here are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prenom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statut_matrimonial: Option<MaritalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poste: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_contrat: Option<ContractType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_fin: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salaire_base: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statut: Option<EmployeeStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub niveau_accreditation: Option<AccreditationLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affectation_actuelle: Option<String>,
}

/// Dashboard headcount summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStats {
    pub total: u64,
    pub actifs: u64,
    pub inactifs: u64,
    pub en_conge: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_labels_match_the_wire() {
        assert_eq!(serde_json::to_value(EmployeeStatus::EnConge).unwrap(), json!("EN_CONGE"));
        assert_eq!(EmployeeStatus::Actif.as_str(), "ACTIF");
        assert_eq!(EmployeeStatus::ALL.len(), 3);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result: Result<EmployeeStatus, _> = serde_json::from_value(json!("RETRAITE"));
        assert!(result.is_err());
    }

    #[test]
    fn employee_decodes_with_absent_and_null_optionals() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 7,
            "matricule": "EMP-007",
            "nom": "Rasoa",
            "prenom": "Lala",
            "dateNaissance": "1985-03-14",
            "email": null,
            "poste": "PASTEUR_CONSACRE",
            "statut": "ACTIF",
            "salaireBase": 450000.0
        }))
        .unwrap();
        assert_eq!(employee.id, 7);
        assert_eq!(employee.email, None);
        assert_eq!(employee.date_naissance, NaiveDate::from_ymd_opt(1985, 3, 14).unwrap());
        assert_eq!(employee.salaire_base, Some(450000.0));
    }

    #[test]
    fn new_employee_has_no_id_and_skips_absent_fields() {
        let input = NewEmployee::new(
            "EMP-008",
            "Rakoto",
            "Jean",
            NaiveDate::from_ymd_opt(1990, 1, 2).unwrap(),
            Position::Evangeliste,
        );
        let body = serde_json::to_value(&input).unwrap();
        assert!(body.get("id").is_none());
        assert!(body.get("email").is_none());
        assert_eq!(body["dateNaissance"], "1990-01-02");
        assert_eq!(body["poste"], "EVANGELISTE");
        assert_eq!(body["statut"], "ACTIF");
    }

    #[test]
    fn patch_sends_only_changed_fields() {
        let patch = EmployeePatch {
            statut: Some(EmployeeStatus::EnConge),
            ..EmployeePatch::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"statut": "EN_CONGE"}));
    }

    #[test]
    fn stats_use_dashboard_field_names() {
        let stats = EmployeeStats {
            total: 10,
            actifs: 6,
            inactifs: 3,
            en_conge: 1,
        };
        assert_eq!(
            serde_json::to_value(stats).unwrap(),
            json!({"total": 10, "actifs": 6, "inactifs": 3, "enConge": 1})
        );
    }
}
