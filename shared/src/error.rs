//! Error types for the BlinkBuy domain
//!
//! Guard decisions and list transforms never fail for well-typed input, so
//! every error here comes from one of three places: integrator mistakes
//! (`ConfigurationError`), session writes (`SessionError`) and the auth
//! network boundary (`AuthError`). Collection edits on a single page report
//! `ListError`.

use crate::list::EntityId;
use crate::validation::ValidationErrors;
use thiserror::Error;

// =========================================================
// Configuration
// =========================================================

/// Development-time defects surfaced to the integrator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A guarded route was declared with no acceptable role
    #[error("guarded route requires at least one role")]
    EmptyRoleSet,
    /// The API base URL is blank or not http(s)
    #[error("invalid API base URL: {0:?}")]
    InvalidBaseUrl(String),
}

// =========================================================
// Session
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session token must not be empty")]
    EmptyToken,
    #[error("session could not be written to storage")]
    Persist,
}

// =========================================================
// Auth (RemoteCallFailure)
// =========================================================

/// Failure of a login or signup action
///
/// Whatever the variant, the session is left exactly as it was before the
/// action started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The form was rejected locally; no request was sent
    #[error("{0}")]
    Validation(ValidationErrors),
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// The server answered 2xx but the body was unusable
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl AuthError {
    /// Message suitable for the alert box on the login and signup pages.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Validation(errors) => errors
                .first()
                .map(|e| e.message.to_string())
                .unwrap_or_else(|| "Please check the form".to_string()),
            AuthError::Transport(_) => "Could not reach the server. Try again later.".to_string(),
            AuthError::Rejected { status: 400 | 401 | 403, message } => message
                .clone()
                .unwrap_or_else(|| "Invalid email or password".to_string()),
            AuthError::Rejected { message, .. } => message
                .clone()
                .unwrap_or_else(|| "The server rejected the request".to_string()),
            AuthError::Session(SessionError::Persist) => {
                "Could not save your session in this browser".to_string()
            }
            AuthError::InvalidResponse(_) | AuthError::Session(_) => {
                "Unexpected response from the server".to_string()
            }
        }
    }
}

impl From<ValidationErrors> for AuthError {
    fn from(errors: ValidationErrors) -> Self {
        AuthError::Validation(errors)
    }
}

// =========================================================
// List collections
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("no entity with id {0}")]
    NotFound(EntityId),
    #[error("an entity with id {0} already exists")]
    DuplicateId(EntityId),
}

pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FieldError;

    #[test]
    fn validation_message_uses_first_field_error() {
        let errors = ValidationErrors::from(vec![
            FieldError::new("email", "Email is required"),
            FieldError::new("password", "Password is required"),
        ]);
        let err = AuthError::from(errors);
        assert_eq!(err.user_message(), "Email is required");
    }

    #[test]
    fn credential_rejections_hide_status_codes() {
        let err = AuthError::Rejected {
            status: 401,
            message: None,
        };
        assert_eq!(err.user_message(), "Invalid email or password");
        assert_eq!(err.to_string(), "request rejected with status 401");
    }

    #[test]
    fn server_message_wins_when_present() {
        let err = AuthError::Rejected {
            status: 409,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(err.user_message(), "Email already registered");
    }
}
