use serde::de::IgnoredAny;
use serde::Serialize;
use tracing::info;

use super::without_payload;
use crate::client::ApiClient;
use crate::result::ApiResult;
use crate::types::{Id, LoginResponse, NewUser, User, UserPatch};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Credentials<'a> {
    nom_utilisateur: &'a str,
    mot_de_passe: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordChange<'a> {
    ancien_mot_de_passe: &'a str,
    nouveau_mot_de_passe: &'a str,
}

/// Authentication (`/auth`) and account administration (`/utilisateurs`).
#[derive(Debug, Clone, Copy)]
pub struct UserService<'a> {
    client: &'a ApiClient,
}

impl<'a> UserService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token. On success the token is stored in
    /// the client's session and sent on every later call.
    pub async fn login(&self, nom_utilisateur: &str, mot_de_passe: &str) -> ApiResult<LoginResponse> {
        let credentials = Credentials {
            nom_utilisateur,
            mot_de_passe,
        };
        let result: ApiResult<LoginResponse> = self.client.post("/auth/login", &credentials).await;
        if let Some(response) = result.payload() {
            self.client.session().set_token(response.token.as_str());
            info!(user = nom_utilisateur, "logged in");
        }
        result
    }

    /// Tell the server to drop the token. The local session is cleared
    /// whatever the server answers.
    pub async fn logout(&self) -> ApiResult<()> {
        let result = self.client.post_empty::<IgnoredAny>("/auth/logout").await;
        self.client.session().clear();
        info!("logged out");
        without_payload(result)
    }

    pub async fn profile(&self) -> ApiResult<User> {
        self.client.get("/auth/profile").await
    }

    pub async fn list(&self) -> ApiResult<Vec<User>> {
        self.client.get("/utilisateurs").await
    }

    pub async fn get(&self, id: Id) -> ApiResult<User> {
        self.client.get(&format!("/utilisateurs/{id}")).await
    }

    pub async fn create(&self, user: &NewUser) -> ApiResult<User> {
        self.client.post("/utilisateurs", user).await
    }

    pub async fn update(&self, id: Id, patch: &UserPatch) -> ApiResult<User> {
        self.client.put(&format!("/utilisateurs/{id}"), patch).await
    }

    pub async fn delete(&self, id: Id) -> ApiResult<()> {
        self.client.delete(&format!("/utilisateurs/{id}")).await
    }

    pub async fn change_password(&self, id: Id, ancien: &str, nouveau: &str) -> ApiResult<()> {
        let body = PasswordChange {
            ancien_mot_de_passe: ancien,
            nouveau_mot_de_passe: nouveau,
        };
        let result = self
            .client
            .put::<IgnoredAny, _>(&format!("/utilisateurs/{id}/mot-de-passe"), &body)
            .await;
        without_payload(result)
    }
}
