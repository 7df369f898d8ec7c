use crate::store::{self, StoreError};
use crate::telemetry::spawn_blocking_with_tracing;
use crate::time::TimeSource;
use anyhow::Context;
use argon2::password_hash::SaltString;
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier,
    Version,
};
use secrecy::{ExposeSecret, SecretBox};
use sqlx::SqlitePool;

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials(#[source] anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

#[derive(serde::Deserialize)]
pub struct Credentials {
    pub username: String,
    password: SecretBox<String>,
}

/// Hash checked against when the username is unknown, so a miss costs the
/// same as a wrong password.
const FALLBACK_PASSWORD_HASH: &str = "$argon2id$v=19$m=15000,t=2,p=1$\
    gZiV/M1gPc22ElAH/Jh1Hw$\
    CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

#[tracing::instrument(name = "Validate credentials", skip(credentials, pool))]
pub async fn validate_credentials(
    credentials: Credentials,
    pool: &SqlitePool,
) -> Result<payloads::UserId, AuthError> {
    let stored = store::read_user_by_username(pool, &credentials.username)
        .await
        .context("Failed to retrieve stored credentials.")?;

    let (user_id, expected_password_hash) = match stored {
        Some(user) => (Some(user.id), SecretBox::new(Box::new(user.password_hash))),
        None => (
            None,
            SecretBox::new(Box::new(FALLBACK_PASSWORD_HASH.to_string())),
        ),
    };

    spawn_blocking_with_tracing(move || {
        verify_password_hash(expected_password_hash, credentials.password)
    })
    .await
    .context("Failed to spawn blocking task.")??;

    user_id
        .ok_or_else(|| anyhow::anyhow!("Unknown username."))
        .map_err(AuthError::InvalidCredentials)
}

#[tracing::instrument(
    name = "Verify password hash",
    skip(expected_password_hash, password_candidate)
)]
fn verify_password_hash(
    expected_password_hash: SecretBox<String>,
    password_candidate: SecretBox<String>,
) -> Result<(), AuthError> {
    let expected_password_hash =
        PasswordHash::new(expected_password_hash.expose_secret())
            .context("Failed to parse hash in PHC string format.")?;

    Argon2::default()
        .verify_password(
            password_candidate.expose_secret().as_bytes(),
            &expected_password_hash,
        )
        .context("Invalid password.")
        .map_err(AuthError::InvalidCredentials)
}

#[derive(serde::Deserialize)]
pub struct NewUserDetails {
    pub username: String,
    password: SecretBox<String>,
}

#[tracing::instrument(
    name = "Create user",
    skip(new_user_details, pool, time_source),
    fields(username=tracing::field::Empty, user_id=tracing::field::Empty)
)]
pub async fn create_user(
    new_user_details: NewUserDetails,
    pool: &SqlitePool,
    time_source: &TimeSource,
) -> Result<payloads::UserId, StoreError> {
    let NewUserDetails { username, password } = new_user_details;
    tracing::Span::current()
        .record("username", tracing::field::display(&username));

    let password_hash =
        spawn_blocking_with_tracing(move || compute_password_hash(password))
            .await
            .map_err(anyhow::Error::from)?
            .context("Failed to hash password")?;
    let new_user_id = store::create_user(
        pool,
        &username,
        password_hash.expose_secret(),
        time_source,
    )
    .await?
    .id;
    tracing::Span::current()
        .record("user_id", tracing::field::display(&new_user_id));
    Ok(new_user_id)
}

fn compute_password_hash(
    password: SecretBox<String>,
) -> Result<SecretBox<String>, anyhow::Error> {
    let salt = SaltString::generate(&mut rand_core::OsRng);
    let params = Params::new(15000, 2, 1, None)
        .map_err(|e| anyhow::anyhow!("Invalid argon2 params: {e}"))?;
    let password_hash = Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?
        .to_string();
    Ok(SecretBox::new(Box::new(password_hash)))
}
