//! Login and registration against the user endpoints.

use thiserror::Error;

use shared::api::CreateUserRequest;
use shared::models::User;

use crate::services::api::{ApiError, ApiService};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("user not found")]
    UserNotFound,

    #[error("wrong password")]
    InvalidCredentials,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("registration failed")]
    Registration(#[source] ApiError),

    #[error(transparent)]
    Api(ApiError),
}

/// Look the user up by name and compare credentials.
///
/// The backend returns the stored password in the clear, so this is a
/// plaintext equality check on the client. A known gap in the backend
/// contract, kept for compatibility.
pub async fn login(username: &str, password: &str) -> Result<User, AuthError> {
    let user = ApiService::user_by_username(username)
        .await
        .map_err(|e| match e {
            ApiError::NotFound => AuthError::UserNotFound,
            other => AuthError::Api(other),
        })?;

    if user.password != password {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(user)
}

/// Create a new account. The confirmation check runs locally, before any
/// request is issued.
pub async fn register(username: &str, password: &str, confirm: &str) -> Result<User, AuthError> {
    if password != confirm {
        return Err(AuthError::PasswordMismatch);
    }

    let request = CreateUserRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    ApiService::create_user(&request)
        .await
        .map_err(AuthError::Registration)
}
