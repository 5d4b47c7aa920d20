use axum::{extract::State, Json};
use secrecy::Secret;
use serde::Deserialize;

use crate::{
    app_state::AppState,
    domain::{
        AuthAPIError, Email, NewUser, Password, UserPasswordHash,
        UserStoreError,
    },
};

pub const EMAIL_EXISTS_MESSAGE: &str = "Email already exists!";
pub const SIGNUP_SUCCESS_MESSAGE: &str = "User registered successfully!";

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<&'static str, AuthAPIError> {
    let email = Email::new(Secret::new(request.email));
    let password = Password::new(request.password);

    if state.auth_service.find_by_email(&email).await?.is_some() {
        tracing::debug!("email already registered");
        return Ok(EMAIL_EXISTS_MESSAGE);
    }

    let password_hash = UserPasswordHash::from_password(&password)
        .await
        .map_err(AuthAPIError::UnexpectedError)?;

    // The lookup above is only a fast path; a concurrent signup can still
    // win the insert, which the store reports as a conflict.
    match state
        .auth_service
        .save_user(NewUser::new(email, password_hash))
        .await
    {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "user registered");
            Ok(SIGNUP_SUCCESS_MESSAGE)
        }
        Err(UserStoreError::UserAlreadyExists) => {
            tracing::debug!("email registered concurrently");
            Ok(EMAIL_EXISTS_MESSAGE)
        }
        Err(e) => Err(e.into()),
    }
}

/// Unknown fields, `id` included, are ignored.
#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: Secret<String>,
}
