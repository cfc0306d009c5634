//! Admin session checks.

use std::sync::Arc;

use tracing::{error, warn};

use crate::database::{SessionRecord, SessionStore};
use crate::error::CmsError;

/// The access/refresh token pair carried in the session cookies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl SessionTokens {
    /// Both tokens, or `None` if either is missing or empty.
    pub fn from_parts(access_token: Option<String>, refresh_token: Option<String>) -> Option<Self> {
        let access_token = access_token.filter(|t| !t.is_empty())?;
        let refresh_token = refresh_token.filter(|t| !t.is_empty())?;
        Some(Self {
            access_token,
            refresh_token,
        })
    }
}

pub struct AuthService {
    sessions: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    /// Accept the request only if both tokens are present and the backend
    /// recognises them as a live session.
    pub async fn authenticate(&self, tokens: Option<&SessionTokens>) -> Result<SessionRecord, CmsError> {
        let tokens = tokens.ok_or(CmsError::Unauthorized)?;

        match self
            .sessions
            .validate(&tokens.access_token, &tokens.refresh_token)
            .await
        {
            Ok(Some(session)) => Ok(session),
            Ok(None) => {
                warn!("Rejected session tokens");
                Err(CmsError::Unauthorized)
            }
            Err(e) => {
                error!("Session validation failed: {:#}", e);
                Err(CmsError::Unauthorized)
            }
        }
    }

    /// Best-effort revoke; a failure is logged and the logout still proceeds.
    pub async fn logout(&self, tokens: Option<&SessionTokens>) {
        let Some(tokens) = tokens else {
            return;
        };

        if let Err(e) = self.sessions.revoke(&tokens.access_token).await {
            warn!("Failed to revoke session: {:#}", e);
        }
    }
}
