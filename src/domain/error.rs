use color_eyre::eyre::Report;
use thiserror::Error;

use super::UserStoreError;

#[derive(Debug, Error)]
pub enum AuthAPIError {
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl From<UserStoreError> for AuthAPIError {
    fn from(e: UserStoreError) -> Self {
        Self::UnexpectedError(e.into())
    }
}
