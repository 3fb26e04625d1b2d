use std::sync::Arc;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::{Error, Result};
use crate::models::user::User;
use crate::store::AuthSlice;

/// Claims of an ID token issued by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub sub: String,
    pub exp: usize,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl From<IdentityClaims> for User {
    fn from(claims: IdentityClaims) -> Self {
        User {
            uid: claims.sub,
            email: claims.email.unwrap_or_default(),
            display_name: claims.name.unwrap_or_default(),
            photo_url: claims.picture.filter(|p| !p.is_empty()),
        }
    }
}

/// Session handling on top of the external identity provider.
///
/// Sign-in verifies a provider token and publishes the identity; every
/// published change is observable through [`IdentityService::subscribe`],
/// which is how the auth slice keeps its mirror current.
#[derive(Clone)]
pub struct IdentityService {
    decoding_key: DecodingKey,
    changes: Arc<watch::Sender<Option<User>>>,
    auth: AuthSlice,
}

impl IdentityService {
    pub fn new(secret: &str, auth: AuthSlice) -> Self {
        let (changes, _) = watch::channel(None);
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            changes: Arc::new(changes),
            auth,
        }
    }

    pub fn verify(&self, token: &str) -> Result<User> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        let data = decode::<IdentityClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| Error::Unauthorized(format!("invalid_token: {}", e)))?;
        Ok(data.claims.into())
    }

    pub fn sign_in(&self, token: &str) -> Result<User> {
        self.auth.begin();
        match self.verify(token) {
            Ok(user) => {
                tracing::info!(uid = %user.uid, "identity token accepted");
                self.changes.send_replace(Some(user.clone()));
                Ok(user)
            }
            Err(err) => {
                tracing::warn!(error = %err, "sign-in rejected");
                self.auth.fail(err.to_string());
                Err(err)
            }
        }
    }

    pub fn sign_out(&self) {
        self.auth.begin();
        self.changes.send_replace(None);
    }

    pub fn current(&self) -> Option<User> {
        self.changes.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.changes.subscribe()
    }
}
