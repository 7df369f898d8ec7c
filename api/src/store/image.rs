use super::*;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Store an image for `owner_id` under a fresh key. The type is sniffed from
/// the bytes; `file_name` is only logged.
#[tracing::instrument(
    skip(image_data, pool, time_source),
    fields(size = image_data.len())
)]
pub async fn create_image(
    owner_id: &UserId,
    file_name: &str,
    image_data: &[u8],
    pool: &SqlitePool,
    time_source: &TimeSource,
) -> Result<UploadedImage, StoreError> {
    if image_data.len() > payloads::MAX_IMAGE_SIZE {
        return Err(StoreError::ImageTooLarge);
    }
    let kind = infer::get(image_data)
        .filter(|kind| kind.matcher_type() == infer::MatcherType::Image)
        .ok_or(StoreError::NotAnImage)?;

    let image_key = format!("{}.{}", Uuid::new_v4().simple(), kind.extension());
    let image = sqlx::query_as::<_, UploadedImage>(
        "INSERT INTO uploaded_images (
            image_key, owner_id, content_type, image_data, created_at
        )
        VALUES (?, ?, ?, ?, ?)
        RETURNING *;",
    )
    .bind(&image_key)
    .bind(owner_id)
    .bind(kind.mime_type())
    .bind(image_data)
    .bind(now(time_source))
    .fetch_one(pool)
    .await?;
    Ok(image)
}

pub async fn get_image(
    image_key: &str,
    pool: &SqlitePool,
) -> Result<UploadedImage, StoreError> {
    sqlx::query_as::<_, UploadedImage>(
        "SELECT * FROM uploaded_images WHERE image_key = ?",
    )
    .bind(image_key)
    .fetch_one(pool)
    .await
    .map_err(or_not_found(StoreError::ImageNotFound))
}

/// Returns whether an image of `owner_id` with that key existed.
pub async fn delete_image(
    owner_id: &UserId,
    image_key: &str,
    pool: &SqlitePool,
) -> Result<bool, StoreError> {
    let result = sqlx::query(
        "DELETE FROM uploaded_images WHERE image_key = ? AND owner_id = ?",
    )
    .bind(image_key)
    .bind(owner_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete the uploads behind `image_urls` that belong to `owner_id` and that
/// no remaining hotel or room still shows. Runs inside the caller's
/// transaction, after the rows referring to the images are gone.
pub(super) async fn delete_unreferenced_images(
    owner_id: &UserId,
    image_urls: &[String],
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
) -> Result<u64, StoreError> {
    let mut deleted = 0;
    for url in image_urls {
        let Some(image_key) = payloads::image_key_from_url(url) else {
            continue;
        };
        let result = sqlx::query(
            "DELETE FROM uploaded_images
            WHERE image_key = ?1 AND owner_id = ?2
                AND NOT EXISTS (SELECT 1 FROM hotels WHERE image = ?3)
                AND NOT EXISTS (SELECT 1 FROM rooms WHERE image = ?3)",
        )
        .bind(image_key)
        .bind(owner_id)
        .bind(url)
        .execute(&mut **tx)
        .await?;
        deleted += result.rows_affected();
    }
    if deleted > 0 {
        tracing::debug!(deleted, "removed images of deleted listings");
    }
    Ok(deleted)
}
