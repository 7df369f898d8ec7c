use actix_identity::Identity;
use actix_web::{HttpResponse, delete, patch, post, web};
use payloads::{RoomId, requests::RoomPatch};
use sqlx::SqlitePool;

use crate::store;
use crate::time::TimeSource;

use super::{APIError, get_user_id, json_body, parse_id, require_user};

/// The body names the hotel; only its owner may add rooms.
#[tracing::instrument(
    skip(user, details, pool, time_source),
    fields(user_id=tracing::field::Empty),
    ret
)]
#[post("/create_room")]
pub async fn create_room(
    user: Identity,
    details: web::Json<payloads::Room>,
    pool: web::Data<SqlitePool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let user_id = get_user_id(&user)?;
    let owner =
        store::get_validated_owner(&user_id, &details.hotel_id, &pool).await?;
    let room =
        store::create_room(&details, &owner, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(room.id))
}

/// Same checks and order as the hotel update, against the room's hotel.
#[tracing::instrument(
    skip(user, patch, pool, time_source),
    fields(user_id=tracing::field::Empty),
    ret
)]
#[patch("/room/{room_id}")]
pub async fn update_room(
    room_id: web::Path<String>,
    user: Option<Identity>,
    patch: Result<web::Json<RoomPatch>, actix_web::Error>,
    pool: web::Data<SqlitePool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let room_id = RoomId(parse_id(&room_id, "Room ID")?);
    let user_id = require_user(user)?;
    let patch = json_body(patch)?;
    let (room, _owner) = store::get_owned_room(&user_id, &room_id, &pool).await?;
    let room = store::update_room(&patch, &room, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(payloads::responses::Room::from(room)))
}

/// `PATCH /api/room` without an id.
pub async fn update_room_missing_id() -> Result<HttpResponse, APIError> {
    Err(APIError::BadRequest(anyhow::anyhow!("Room ID is required")))
}

#[tracing::instrument(skip(user, pool), fields(user_id=tracing::field::Empty))]
#[delete("/room/{room_id}")]
pub async fn delete_room(
    room_id: web::Path<String>,
    user: Option<Identity>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse, APIError> {
    let room_id = RoomId(parse_id(&room_id, "Room ID")?);
    let user_id = require_user(user)?;
    let (room, owner) = store::get_owned_room(&user_id, &room_id, &pool).await?;
    store::delete_room(room, &owner, &pool).await?;
    Ok(HttpResponse::Ok().finish())
}
