use axum::{extract::State, Json};
use secrecy::Secret;
use serde::Deserialize;

use crate::{
    app_state::AppState,
    domain::{
        verify_password_for_unknown_user, AuthAPIError, Email, Password,
    },
};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials!";

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<&'static str, AuthAPIError> {
    let email = Email::new(Secret::new(request.email));
    let password = Password::new(request.password);

    let user = match state.auth_service.find_by_email(&email).await? {
        Some(user) => user,
        None => {
            tracing::debug!("login for unknown email");
            verify_password_for_unknown_user(&password)
                .await
                .map_err(AuthAPIError::UnexpectedError)?;
            return Ok(INVALID_CREDENTIALS_MESSAGE);
        }
    };

    let verified = user
        .password_hash
        .verify(&password)
        .await
        .map_err(AuthAPIError::UnexpectedError)?;

    if verified {
        tracing::info!(user_id = %user.id, "user logged in");
        Ok(LOGIN_SUCCESS_MESSAGE)
    } else {
        tracing::debug!(user_id = %user.id, "login with wrong password");
        Ok(INVALID_CREDENTIALS_MESSAGE)
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Secret<String>,
}
