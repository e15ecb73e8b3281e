use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::error::{CatalogError, Result};

/// Email domain that marks an account as a console administrator.
pub const ADMIN_EMAIL_DOMAIN: &str = "@admin.cinestream.com";

/// Authentication port over the managed identity provider.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AdminUser>;
    async fn sign_out(&self) -> Result<()>;
}

/// An authenticated identity as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser {
    pub uid: Uuid,
    pub email: String,
    pub display_name: String,
}

/// One authenticated admin session.
///
/// Constructed once per successful sign-in and passed explicitly to the
/// views that need it; there is no ambient global session.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub user: AdminUser,
    pub started_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn email(&self) -> &str {
        &self.user.email
    }
}

/// Sign-in/sign-out flows with the admin domain check applied on both sides
/// of the provider call.
#[derive(Debug)]
pub struct SessionManager<A> {
    provider: A,
}

impl<A: AuthProvider> SessionManager<A> {
    pub fn new(provider: A) -> Self {
        SessionManager { provider }
    }

    /// Authenticate and build a session. Non-admin emails are refused before
    /// the provider is contacted; a provider that nonetheless returns a
    /// non-admin identity is signed out again and the login fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<AdminSession> {
        if !email.ends_with(ADMIN_EMAIL_DOMAIN) {
            return Err(CatalogError::Unauthorized(
                "invalid admin email domain".to_string(),
            ));
        }
        let user = self.provider.sign_in(email, password).await?;
        if !user.email.ends_with(ADMIN_EMAIL_DOMAIN) {
            self.provider.sign_out().await?;
            return Err(CatalogError::Unauthorized(
                "account is not an administrator".to_string(),
            ));
        }
        info!(email = %user.email, "admin session started");
        Ok(AdminSession {
            user,
            started_at: Utc::now(),
        })
    }

    /// End a session with the provider. The session value itself is consumed.
    pub async fn logout(&self, session: AdminSession) -> Result<()> {
        self.provider.sign_out().await?;
        info!(email = %session.email(), "admin session ended");
        Ok(())
    }
}
