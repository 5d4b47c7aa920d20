use super::Password;
use argon2::{
    password_hash::{self, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier,
    Version,
};
use color_eyre::eyre::{Result, WrapErr};
use rand::{distributions::Alphanumeric, Rng};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::OnceCell;

// Hash of a random password nobody knows, computed with the same parameters
// as real user hashes.
static DUMMY_PASSWORD_HASH: OnceCell<Secret<String>> = OnceCell::const_new();

/// Argon2id PHC string, as kept in the `password_hash` column.
#[derive(Debug, Clone)]
pub struct UserPasswordHash(Secret<String>);

impl PartialEq for UserPasswordHash {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl UserPasswordHash {
    pub fn parse(s: Secret<String>) -> Result<Self> {
        let _hash = PasswordHash::new(s.expose_secret())
            .wrap_err("Failed to parse password hash")?;
        Ok(Self(s))
    }

    pub async fn from_password(password: &Password) -> Result<Self> {
        let hash = compute_password_hash(password.as_ref().to_owned()).await?;
        Ok(Self(hash))
    }

    /// `Ok(false)` on mismatch; `Err` only if the stored hash is unusable.
    pub async fn verify(&self, candidate: &Password) -> Result<bool> {
        verify_password_hash(self.0.to_owned(), candidate.as_ref().to_owned())
            .await
    }
}

impl AsRef<Secret<String>> for UserPasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Runs a full verification for a login whose email has no user, so the
/// response takes as long as a wrong password would. The result is
/// meaningless and always discarded by callers.
#[tracing::instrument(name = "Verify password for unknown user", skip_all)]
pub async fn verify_password_for_unknown_user(
    candidate: &Password,
) -> Result<bool> {
    let dummy_hash = DUMMY_PASSWORD_HASH
        .get_or_try_init(|| {
            let dummy_password: String = rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(32)
                .map(char::from)
                .collect();
            compute_password_hash(Secret::new(dummy_password))
        })
        .await?;

    verify_password_hash(dummy_hash.to_owned(), candidate.as_ref().to_owned())
        .await
}

#[tracing::instrument(name = "Verify password hash", skip_all)]
pub async fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Secret<String>,
) -> Result<bool> {
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(expected_password_hash.expose_secret())?;

            match Argon2::default().verify_password(
                password_candidate.expose_secret().as_bytes(),
                &expected_password_hash,
            ) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(e) => Err(e).wrap_err("failed to verify password hash"),
            }
        })
    })
    .await?
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
pub async fn compute_password_hash(
    password: Secret<String>,
) -> Result<Secret<String>> {
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let salt: SaltString =
                SaltString::generate(&mut rand::thread_rng());
            let password_hash = Argon2::new(
                Algorithm::Argon2id,
                Version::V0x13,
                Params::new(15000, 2, 1, None)?,
            )
            .hash_password(password.expose_secret().as_bytes(), &salt)?
            .to_string();

            Ok(Secret::new(password_hash))
        })
    })
    .await?
}
