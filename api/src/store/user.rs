use super::*;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Create a new user as would happen during signup.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
    time_source: &TimeSource,
) -> Result<User, StoreError> {
    let validation = payloads::requests::validate_username(username);
    if let Some(error_message) = validation.error_message() {
        return Err(StoreError::InvalidUsername(error_message.to_string()));
    }
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (
                id,
                username,
                password_hash,
                created_at,
                updated_at
            )
            VALUES (?1, ?2, ?3, ?4, ?4)
            RETURNING *;",
    )
    .bind(UserId(Uuid::new_v4()))
    .bind(username)
    .bind(password_hash)
    .bind(now(time_source))
    .fetch_one(pool)
    .await?;
    Ok(user)
}

pub async fn read_user(
    pool: &SqlitePool,
    id: &UserId,
) -> Result<User, StoreError> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?;")
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(or_not_found(StoreError::UserNotFound))
}

pub async fn read_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, StoreError> {
    Ok(
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?;")
            .bind(username)
            .fetch_optional(pool)
            .await?,
    )
}
