use crate::client::ApiClient;
use crate::result::ApiResult;
use crate::types::{Id, NewTraining, Training, TrainingPatch, TrainingType};

/// `/formations`
#[derive(Debug, Clone, Copy)]
pub struct TrainingService<'a> {
    client: &'a ApiClient,
}

impl<'a> TrainingService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Training>> {
        self.client.get("/formations").await
    }

    pub async fn get(&self, id: Id) -> ApiResult<Training> {
        self.client.get(&format!("/formations/{id}")).await
    }

    pub async fn create(&self, training: &NewTraining) -> ApiResult<Training> {
        self.client.post("/formations", training).await
    }

    pub async fn update(&self, id: Id, patch: &TrainingPatch) -> ApiResult<Training> {
        self.client.put(&format!("/formations/{id}"), patch).await
    }

    pub async fn delete(&self, id: Id) -> ApiResult<()> {
        self.client.delete(&format!("/formations/{id}")).await
    }

    pub async fn by_type(&self, type_formation: TrainingType) -> ApiResult<Vec<Training>> {
        self.client
            .get(&format!("/formations/type/{type_formation}"))
            .await
    }

    /// Trainings every pastor must complete.
    pub async fn mandatory(&self) -> ApiResult<Vec<Training>> {
        self.client.get("/formations/obligatoires").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{client_with, Reply, ScriptedTransport};
    use crate::types::{Institution, TrainingLevel};
    use serde_json::json;

    #[tokio::test]
    async fn create_then_delete_twice() {
        let transport = ScriptedTransport::new()
            .on(
                HttpMethod::Post,
                "/formations",
                Reply::json(
                    201,
                    json!({
                        "id": 8,
                        "nomFormation": "Homilétique",
                        "typeFormation": "THEOLOGIQUE",
                        "niveau": "LICENCE",
                        "institution": "SEMINAIRE"
                    }),
                ),
            )
            .on(HttpMethod::Delete, "/formations/8", Reply::status(204))
            .on(HttpMethod::Delete, "/formations/8", Reply::status(404));
        let (client, _, _) = client_with(transport);
        let trainings = client.trainings();

        let created = trainings
            .create(&NewTraining {
                code_formation: None,
                nom_formation: "Homilétique".into(),
                type_formation: TrainingType::Theologique,
                niveau: TrainingLevel::Licence,
                institution: Institution::Seminaire,
                duree_semaines: None,
                obligatoire_pasteur: None,
                description: None,
            })
            .await;
        let id = created.payload().map(|t| t.id).unwrap();
        assert_eq!(id, 8);

        let first = trainings.delete(id).await;
        let second = trainings.delete(id).await;
        assert!(first.is_success() && first.payload().is_none());
        assert!(second.is_success());
        assert_eq!(first.error_kind(), second.error_kind());
    }

    #[tokio::test]
    async fn type_filter_uses_label() {
        let transport = ScriptedTransport::new().on(
            HttpMethod::Get,
            "/formations/type/MISSIONNAIRE",
            Reply::json(200, json!([])),
        );
        let (client, _, _) = client_with(transport);
        assert!(client.trainings().by_type(TrainingType::Missionnaire).await.is_success());
    }
}
