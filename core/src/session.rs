//! Authentication session shared by every service of one client.
//!
//! Holds the bearer token issued by `/auth/login`. Set on login, cleared on
//! logout and whenever the server answers 401. Reads are lock-free so the
//! concurrent branches of an aggregation never contend on it.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Default)]
pub struct Session {
    token: ArcSwapOption<String>,
}

#[derive(Deserialize)]
struct Claims {
    exp: i64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_token(token);
        session
    }

    pub fn set_token(&self, token: impl Into<String>) {
        self.token.store(Some(Arc::new(token.into())));
    }

    pub fn clear(&self) {
        self.token.store(None);
    }

    pub fn token(&self) -> Option<Arc<String>> {
        self.token.load_full()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.load().is_some()
    }

    /// Expiry of the stored token, when it is a JWT carrying an `exp` claim.
    /// Opaque tokens yield `None`.
    pub fn token_expiry(&self) -> Option<DateTime<Utc>> {
        self.token().and_then(|t| jwt_expiry(&t))
    }

    /// `true` only for a JWT whose `exp` lies after `now`. A missing token,
    /// an opaque token or a payload without a readable `exp` is not valid.
    pub fn is_token_valid(&self, now: DateTime<Utc>) -> bool {
        self.token_expiry().is_some_and(|exp| exp > now)
    }
}

fn jwt_expiry(token: &str) -> Option<DateTime<Utc>> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    DateTime::from_timestamp(claims.exp, 0)
}
