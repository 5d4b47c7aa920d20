use auth_backend::{
    domain::{
        Email, NewUser, Password, UserPasswordHash, UserStore, UserStoreError,
    },
    get_postgres_pool, run_migrations,
    services::data_stores::PostgresUserStore,
    utils::constants::DATABASE_URL,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::{
    postgres::{PgConnectOptions, PgConnection, PgPoolOptions},
    Connection, Executor, PgPool,
};
use std::str::FromStr;
use uuid::Uuid;

use crate::helpers::get_random_email;

// These run against a real server: `DATABASE_URL=postgres://... cargo test -- --ignored`

struct TestDatabase {
    name: String,
    pool: PgPool,
}

impl TestDatabase {
    async fn new() -> Self {
        let name = Uuid::new_v4().to_string();
        let pool = configure_postgresql(&name).await;
        Self { name, pool }
    }

    async fn cleanup(self) {
        self.pool.close().await;
        delete_database(&self.name).await;
    }
}

fn server_url() -> Secret<String> {
    DATABASE_URL
        .to_owned()
        .expect("DATABASE_URL must be set for PostgreSQL tests")
}

async fn configure_postgresql(db_name: &str) -> PgPool {
    let server_url = server_url();

    let connection = PgPoolOptions::new()
        .connect(server_url.expose_secret())
        .await
        .expect("Failed to create Postgres connection pool.");

    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, db_name).as_str())
        .await
        .expect("Failed to create database.");

    let url_with_db =
        Secret::new(format!("{}/{}", server_url.expose_secret(), db_name));

    let pool = get_postgres_pool(&url_with_db)
        .await
        .expect("Failed to create Postgres connection pool!");

    run_migrations(&pool)
        .await
        .expect("Failed to migrate the database");

    pool
}

async fn delete_database(db_name: &str) {
    let connection_options =
        PgConnectOptions::from_str(server_url().expose_secret())
            .expect("Failed to parse PostgreSQL connection string");

    let mut connection = PgConnection::connect_with(&connection_options)
        .await
        .expect("Failed to connect to Postgres");

    connection
        .execute(
            format!(
                r#"
                SELECT pg_terminate_backend(pg_stat_activity.pid)
                FROM pg_stat_activity
                WHERE pg_stat_activity.datname = '{}'
                  AND pid <> pg_backend_pid();
        "#,
                db_name
            )
            .as_str(),
        )
        .await
        .expect("Failed to drop the database.");

    connection
        .execute(format!(r#"DROP DATABASE "{}";"#, db_name).as_str())
        .await
        .expect("Failed to drop the database.");
}

async fn new_user(email: &str, password: &str) -> NewUser {
    let password = Password::new(Secret::new(password.to_owned()));
    let hash = UserPasswordHash::from_password(&password)
        .await
        .expect("Failed to hash password");
    NewUser::new(Email::new(Secret::new(email.to_owned())), hash)
}

#[tokio::test]
#[ignore]
async fn postgres_store_saves_and_finds_users() {
    let db = TestDatabase::new().await;
    let mut store = PostgresUserStore::new(db.pool.clone());
    let email = get_random_email();

    let saved = store
        .save(new_user(&email, "p1").await)
        .await
        .expect("Failed to save user");
    assert_eq!(saved.email.as_ref().expose_secret(), &email);

    let found = store
        .find_by_email(&saved.email)
        .await
        .expect("Failed to query user");
    assert_eq!(found, Some(saved.clone()));

    let candidate = Password::new(Secret::new("p1".to_owned()));
    assert!(saved.password_hash.verify(&candidate).await.unwrap());

    let missing = Email::new(Secret::new(get_random_email()));
    assert_eq!(store.find_by_email(&missing).await, Ok(None));

    db.cleanup().await;
}

#[tokio::test]
#[ignore]
async fn postgres_store_rejects_duplicate_email() {
    let db = TestDatabase::new().await;
    let mut store = PostgresUserStore::new(db.pool.clone());
    let email = get_random_email();

    let original = store.save(new_user(&email, "p1").await).await.unwrap();

    assert_eq!(
        store.save(new_user(&email, "p2").await).await,
        Err(UserStoreError::UserAlreadyExists)
    );
    assert_eq!(
        store.find_by_email(&original.email).await,
        Ok(Some(original))
    );

    db.cleanup().await;
}
