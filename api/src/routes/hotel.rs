use actix_identity::Identity;
use actix_web::{HttpResponse, delete, get, patch, post, web};
use payloads::{HotelId, requests::HotelPatch};
use sqlx::SqlitePool;

use crate::store;
use crate::time::TimeSource;

use super::{APIError, get_user_id, json_body, parse_id, require_user};

#[tracing::instrument(
    skip(user, details, pool, time_source),
    fields(user_id=tracing::field::Empty),
    ret
)]
#[post("/create_hotel")]
pub async fn create_hotel(
    user: Identity,
    details: web::Json<payloads::Hotel>,
    pool: web::Data<SqlitePool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let user_id = get_user_id(&user)?;
    let hotel =
        store::create_hotel(&details, &user_id, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(hotel.id))
}

#[tracing::instrument(skip(pool))]
#[get("/hotel/{hotel_id}")]
pub async fn get_hotel(
    hotel_id: web::Path<String>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, APIError> {
    let hotel_id = HotelId(parse_id(&hotel_id, "Hotel ID")?);
    let hotel = store::get_hotel_with_rooms(&hotel_id, &pool).await?;
    Ok(HttpResponse::Ok().json(hotel))
}

#[tracing::instrument(skip(pool))]
#[get("/hotels")]
pub async fn list_hotels(
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, APIError> {
    let hotels = store::list_hotels(&pool).await?;
    Ok(HttpResponse::Ok().json(hotels))
}

#[tracing::instrument(skip(user, pool), fields(user_id=tracing::field::Empty))]
#[get("/my_hotels")]
pub async fn my_hotels(
    user: Identity,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, APIError> {
    let user_id = get_user_id(&user)?;
    let hotels = store::list_owned_hotels(&user_id, &pool).await?;
    Ok(HttpResponse::Ok().json(hotels))
}

/// Merge the allow-listed fields of the body into the hotel.
///
/// Checks run in order: hotel id, session, body, ownership, validation of
/// the merged hotel. Nothing is written unless every check passes.
#[tracing::instrument(
    skip(user, patch, pool, time_source),
    fields(user_id=tracing::field::Empty),
    ret
)]
#[patch("/hotel/{hotel_id}")]
pub async fn update_hotel(
    hotel_id: web::Path<String>,
    user: Option<Identity>,
    patch: Result<web::Json<HotelPatch>, actix_web::Error>,
    pool: web::Data<SqlitePool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let hotel_id = HotelId(parse_id(&hotel_id, "Hotel ID")?);
    let user_id = require_user(user)?;
    let patch = json_body(patch)?;
    let owner = store::get_validated_owner(&user_id, &hotel_id, &pool).await?;
    let hotel =
        store::update_hotel(&patch, &owner, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(payloads::responses::Hotel::from(hotel)))
}

/// `PATCH /api/hotel` without an id.
pub async fn update_hotel_missing_id() -> Result<HttpResponse, APIError> {
    Err(APIError::BadRequest(anyhow::anyhow!("Hotel ID is required")))
}

#[tracing::instrument(skip(user, pool), fields(user_id=tracing::field::Empty))]
#[delete("/hotel/{hotel_id}")]
pub async fn delete_hotel(
    hotel_id: web::Path<String>,
    user: Option<Identity>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, APIError> {
    let hotel_id = HotelId(parse_id(&hotel_id, "Hotel ID")?);
    let user_id = require_user(user)?;
    let owner = store::get_validated_owner(&user_id, &hotel_id, &pool).await?;
    store::delete_hotel(owner, &pool).await?;
    Ok(HttpResponse::Ok().finish())
}
