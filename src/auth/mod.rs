//! Shared-secret capability checks.
//!
//! There are no user accounts: one password grants the client capability and
//! another grants admin. Admin can do everything a client can.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use serde::Serialize;
use tracing::warn;

use crate::config::Config;
use crate::error::AppError;

pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Capability {
    #[serde(rename = "user")]
    Client,
    #[serde(rename = "admin")]
    Admin,
}

impl Capability {
    pub fn allows(self, needed: Capability) -> bool {
        self == Capability::Admin || self == needed
    }
}

#[derive(Debug, Clone)]
pub struct AccessGuard {
    client_password: String,
    admin_password: String,
}

impl AccessGuard {
    pub fn new(client_password: impl Into<String>, admin_password: impl Into<String>) -> Self {
        Self {
            client_password: client_password.into(),
            admin_password: admin_password.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.client_password, &config.admin_password)
    }

    pub fn capability_for(&self, password: &str) -> Option<Capability> {
        if password.is_empty() {
            None
        } else if password == self.admin_password {
            Some(Capability::Admin)
        } else if password == self.client_password {
            Some(Capability::Client)
        } else {
            None
        }
    }

    /// `Forbidden` unless `password` grants `needed` (or admin).
    pub fn require(&self, password: &str, needed: Capability) -> Result<Capability, AppError> {
        match self.capability_for(password) {
            Some(granted) if granted.allows(needed) => Ok(granted),
            _ => {
                warn!(?needed, "Capability check failed");
                Err(AppError::Forbidden)
            }
        }
    }
}

/// Extractor proving the caller sent the admin password in `X-Admin-Token`.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

#[async_trait]
impl<S> FromRequestParts<S> for AdminAccess
where
    S: Send + Sync,
    Arc<AccessGuard>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let guard = Arc::<AccessGuard>::from_ref(state);
        let token = parts
            .headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        guard.require(token, Capability::Admin)?;
        Ok(AdminAccess)
    }
}
