use std::sync::Arc;

use auth_backend::{
    app_state::{AppState, UserStoreType},
    get_postgres_pool, run_migrations,
    services::data_stores::{HashmapUserStore, PostgresUserStore},
    utils::{
        constants::{ALLOWED_ORIGIN, APP_ADDRESS, DATABASE_URL},
        tracing::init_tracing,
    },
    Application,
};
use color_eyre::eyre::{Result, WrapErr};
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let user_store = configure_user_store().await?;
    let app_state = AppState::new(user_store);

    let app = Application::build(app_state, &APP_ADDRESS, &ALLOWED_ORIGIN)
        .await
        .wrap_err("Failed to build app")?;

    app.run().await.wrap_err("Failed to run app")
}

async fn configure_user_store() -> Result<UserStoreType> {
    let user_store: UserStoreType = match DATABASE_URL.as_ref() {
        Some(url) => {
            let pool = get_postgres_pool(url)
                .await
                .wrap_err("Failed to create Postgres connection pool")?;
            run_migrations(&pool).await?;
            tracing::info!("using PostgreSQL user store");
            Arc::new(RwLock::new(PostgresUserStore::new(pool)))
        }
        None => {
            tracing::warn!(
                "DATABASE_URL not set, users are kept in memory only"
            );
            Arc::new(RwLock::new(HashmapUserStore::default()))
        }
    };

    Ok(user_store)
}
