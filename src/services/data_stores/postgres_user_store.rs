use color_eyre::eyre::{eyre, Result};
use secrecy::{ExposeSecret, Secret};
use sqlx::PgPool;

use crate::domain::{
    Email, NewUser, User, UserId, UserPasswordHash, UserStore, UserStoreError,
};

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
}

impl TryFrom<UserRow> for User {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id),
            email: Email::new(Secret::new(row.email)),
            password_hash: UserPasswordHash::parse(Secret::new(
                row.password_hash,
            ))
            .map_err(UserStoreError::UnexpectedError)?,
        })
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Saving user to PostgreSQL", skip_all)]
    async fn save(&mut self, user: NewUser) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password_hash) VALUES ($1, $2)
            RETURNING id, email, password_hash
            "#,
        )
        .bind(user.email.as_ref().expose_secret())
        .bind(user.password_hash.as_ref().expose_secret())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                UserStoreError::UserAlreadyExists
            }
            err => UserStoreError::UnexpectedError(eyre!(err)),
        })?;

        row.try_into()
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<User>, UserStoreError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash
            FROM users
            WHERE email = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(email.as_ref().expose_secret())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(eyre!(e)))?
        .map(User::try_from)
        .transpose()
    }
}
