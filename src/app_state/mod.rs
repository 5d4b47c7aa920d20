use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{domain::UserStore, services::AuthService};

pub type UserStoreType = Arc<RwLock<dyn UserStore + Send + Sync>>;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
}

impl AppState {
    pub fn new(user_store: UserStoreType) -> Self {
        Self {
            auth_service: AuthService::new(user_store),
        }
    }
}
