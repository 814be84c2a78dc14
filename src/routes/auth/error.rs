use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use tracing::{error, info, warn};

#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    InvalidCredentials,
    EmailTaken,
    UserNotFound,
    Internal(eyre::Report),
}

fn log_auth_failure(err: &AuthError) {
    match err {
        AuthError::MissingToken => warn!("Authentication failed: Missing Authorization token."),
        AuthError::InvalidToken => warn!("Authentication failed: Invalid token provided."),
        AuthError::InvalidCredentials => {
            info!("Authentication failed: Invalid credentials provided.");
        }
        AuthError::EmailTaken => info!("Signup failed: Email already registered."),
        AuthError::UserNotFound => warn!("Authentication failed: User from token not found."),
        AuthError::Internal(e) => error!("Internal server error during authentication: {e:?}"),
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        log_auth_failure(&self);

        let (status, error_message) = match self {
            AuthError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
            AuthError::MissingToken | AuthError::InvalidToken | AuthError::UserNotFound => {
                (StatusCode::UNAUTHORIZED, "Authentication failed")
            }
            AuthError::EmailTaken => (
                StatusCode::CONFLICT,
                "A user with this email already exists",
            ),
            AuthError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred",
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

// Lets `?` convert `DbError` and other sources into `AuthError::Internal`.
impl<E> From<E> for AuthError
where
    E: Into<eyre::Report>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
