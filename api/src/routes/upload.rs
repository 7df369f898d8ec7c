use actix_identity::Identity;
use actix_web::{HttpResponse, get, http::header, post, web};
use payloads::{
    requests::{DeleteImage, UploadImage},
    responses::{DeleteImageResult, UploadedImage},
};
use sqlx::SqlitePool;

use crate::Config;
use crate::store;
use crate::time::TimeSource;

use super::{APIError, get_user_id};

#[tracing::instrument(
    skip(user, details, pool, time_source, config),
    fields(user_id=tracing::field::Empty, file_name=%details.file_name),
    ret
)]
#[post("/upload")]
pub async fn upload_image(
    user: Identity,
    details: web::Json<UploadImage>,
    pool: web::Data<SqlitePool>,
    time_source: web::Data<TimeSource>,
    config: web::Data<Config>,
) -> Result<HttpResponse, APIError> {
    let user_id = get_user_id(&user)?;
    let image = store::create_image(
        &user_id,
        &details.file_name,
        &details.image_data,
        &pool,
        &time_source,
    )
    .await?;
    Ok(HttpResponse::Ok().json(UploadedImage {
        url: config.upload_url(&image.image_key),
        key: image.image_key,
    }))
}

#[tracing::instrument(skip(pool))]
#[get("/uploads/{image_key}")]
pub async fn get_image(
    image_key: web::Path<String>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, APIError> {
    let image = store::get_image(&image_key, &pool).await?;
    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, image.content_type))
        .insert_header((header::CACHE_CONTROL, "public, max-age=31536000"))
        .body(image.image_data))
}

/// `success` is false when the caller has no image under that key.
#[tracing::instrument(skip(user, pool), fields(user_id=tracing::field::Empty), ret)]
#[post("/upload/delete")]
pub async fn delete_image(
    user: Identity,
    details: web::Json<DeleteImage>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, APIError> {
    let user_id = get_user_id(&user)?;
    let success =
        store::delete_image(&user_id, details.image_key.trim(), &pool).await?;
    Ok(HttpResponse::Ok().json(DeleteImageResult { success }))
}
