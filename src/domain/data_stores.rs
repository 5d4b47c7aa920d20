use super::{Email, NewUser, User};
use color_eyre::eyre::Report;
use thiserror::Error;

#[async_trait::async_trait]
pub trait UserStore {
    /// Insert a new user, returning the stored record with its generated id.
    async fn save(&mut self, user: NewUser) -> Result<User, UserStoreError>;
    /// Exact, case-sensitive lookup.
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<User>, UserStoreError>;
}

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
