use crate::{
    app_state::UserStoreType,
    domain::{Email, NewUser, User, UserStoreError},
};

/// Thin layer between the route handlers and the injected [`UserStore`].
///
/// [`UserStore`]: crate::domain::UserStore
#[derive(Clone)]
pub struct AuthService {
    user_store: UserStoreType,
}

impl AuthService {
    pub fn new(user_store: UserStoreType) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "Saving user", skip_all)]
    pub async fn save_user(
        &self,
        user: NewUser,
    ) -> Result<User, UserStoreError> {
        self.user_store.write().await.save(user).await
    }

    #[tracing::instrument(name = "Finding user by email", skip_all)]
    pub async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<User>, UserStoreError> {
        self.user_store.read().await.find_by_email(email).await
    }
}
