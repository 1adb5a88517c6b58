use std::sync::Arc;

use tracing::warn;

use tastebook_prefs_store::PrefsStore;

use crate::errors::{CatalogErrorKind, CatalogResult};

/// The only credentials the app accepts. There is no account system behind
/// this check; it exists so the welcome screen has something to gate on.
pub const DEMO_USERNAME: &str = "user";
pub const DEMO_PASSWORD: &str = "123";

/// Registration form payload. Only presence is validated.
#[derive(Clone, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

pub struct AccountGate {
    prefs: Arc<dyn PrefsStore>,
    username_key: String,
}

impl AccountGate {
    pub fn new(prefs: Arc<dyn PrefsStore>, username_key: impl Into<String>) -> Self {
        Self {
            prefs,
            username_key: username_key.into(),
        }
    }

    pub fn login(&self, username: &str, password: &str) -> CatalogResult<()> {
        if username != DEMO_USERNAME || password != DEMO_PASSWORD {
            return Err(CatalogErrorKind::InvalidCredentials.into());
        }
        self.prefs.set(&self.username_key, username.as_bytes())?;
        Ok(())
    }

    /// "Registers" by remembering the username; nothing else is stored.
    pub fn register(&self, req: &RegisterRequest) -> CatalogResult<()> {
        if req.name.is_empty()
            || req.email.is_empty()
            || req.username.is_empty()
            || req.password.is_empty()
        {
            return Err(CatalogErrorKind::InvalidInput("all fields are required".into()).into());
        }
        self.prefs.set(&self.username_key, req.username.as_bytes())?;
        Ok(())
    }

    pub fn current_user(&self) -> Option<String> {
        match self.prefs.get(&self.username_key) {
            Ok(Some(raw)) => String::from_utf8(raw).ok(),
            Ok(None) => None,
            Err(err) => {
                warn!("account prefs read failed: {err}");
                None
            }
        }
    }

    pub fn logout(&self) -> CatalogResult<()> {
        self.prefs.remove(&self.username_key)?;
        Ok(())
    }
}
