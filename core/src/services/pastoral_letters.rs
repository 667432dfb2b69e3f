use crate::client::ApiClient;
use crate::result::ApiResult;
use crate::types::{Id, NewPastoralLetter, PastoralLetter, PastoralLetterPatch, PastoralLetterType};

/// `/lettres-pastorales`
#[derive(Debug, Clone, Copy)]
pub struct PastoralLetterService<'a> {
    client: &'a ApiClient,
}

impl<'a> PastoralLetterService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<PastoralLetter>> {
        self.client.get("/lettres-pastorales").await
    }

    pub async fn get(&self, id: Id) -> ApiResult<PastoralLetter> {
        self.client.get(&format!("/lettres-pastorales/{id}")).await
    }

    pub async fn create(&self, letter: &NewPastoralLetter) -> ApiResult<PastoralLetter> {
        self.client.post("/lettres-pastorales", letter).await
    }

    pub async fn update(&self, id: Id, patch: &PastoralLetterPatch) -> ApiResult<PastoralLetter> {
        self.client.put(&format!("/lettres-pastorales/{id}"), patch).await
    }

    pub async fn delete(&self, id: Id) -> ApiResult<()> {
        self.client.delete(&format!("/lettres-pastorales/{id}")).await
    }

    pub async fn by_employee(&self, employe_id: Id) -> ApiResult<Vec<PastoralLetter>> {
        self.client
            .get(&format!("/lettres-pastorales/employe/{employe_id}"))
            .await
    }

    pub async fn letter_types(&self) -> ApiResult<Vec<PastoralLetterType>> {
        self.client.get("/types-lettres-pastorales").await
    }
}
