use super::*;
use super::image::delete_unreferenced_images;
use payloads::{requests::RoomPatch, validation::validate_room};
use sqlx::SqlitePool;
use uuid::Uuid;

/// The caller must own `details.hotel_id`.
pub async fn create_room(
    details: &payloads::Room,
    owner: &ValidatedOwner,
    pool: &SqlitePool,
    time_source: &TimeSource,
) -> Result<Room, StoreError> {
    validate_room(details).map_err(StoreError::InvalidRoom)?;

    let a = &details.amenities;
    let room = sqlx::query_as::<_, Room>(
        "INSERT INTO rooms (
            id, hotel_id, title, description, image,
            bed_count, guest_count, bathroom_count, king_bed, queen_bed,
            room_price, room_service, tv, balcony, free_wifi, city_view,
            ocean_view, forest_view, mountain_view, air_condition,
            sound_proof, created_at, updated_at
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13,
            ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?22)
        RETURNING *;",
    )
    .bind(RoomId(Uuid::new_v4()))
    .bind(owner.0.id)
    .bind(details.title.trim())
    .bind(details.description.trim())
    .bind(&details.image)
    .bind(details.bed_count)
    .bind(details.guest_count)
    .bind(details.bathroom_count)
    .bind(details.king_bed)
    .bind(details.queen_bed)
    .bind(details.room_price)
    .bind(a.room_service)
    .bind(a.tv)
    .bind(a.balcony)
    .bind(a.free_wifi)
    .bind(a.city_view)
    .bind(a.ocean_view)
    .bind(a.forest_view)
    .bind(a.mountain_view)
    .bind(a.air_condition)
    .bind(a.sound_proof)
    .bind(now(time_source))
    .fetch_one(pool)
    .await?;
    Ok(room)
}

pub async fn get_room(
    room_id: &RoomId,
    pool: &SqlitePool,
) -> Result<Room, StoreError> {
    sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = ?")
        .bind(room_id)
        .fetch_one(pool)
        .await
        .map_err(or_not_found(StoreError::RoomNotFound))
}

/// Rooms of a hotel, newest first.
pub async fn list_rooms(
    hotel_id: &HotelId,
    pool: &SqlitePool,
) -> Result<Vec<Room>, StoreError> {
    Ok(sqlx::query_as::<_, Room>(
        "SELECT * FROM rooms WHERE hotel_id = ? ORDER BY rowid DESC",
    )
    .bind(hotel_id)
    .fetch_all(pool)
    .await?)
}

/// Fetch a room along with proof that `user_id` owns its hotel.
pub async fn get_owned_room(
    user_id: &UserId,
    room_id: &RoomId,
    pool: &SqlitePool,
) -> Result<(Room, ValidatedOwner), StoreError> {
    let room = get_room(room_id, pool).await?;
    let owner =
        get_validated_owner(user_id, &room.details.hotel_id, pool).await?;
    Ok((room, owner))
}

pub async fn update_room(
    patch: &RoomPatch,
    room: &Room,
    pool: &SqlitePool,
    time_source: &TimeSource,
) -> Result<Room, StoreError> {
    let mut details = room.details.clone();
    patch.apply_to(&mut details);
    validate_room(&details).map_err(StoreError::InvalidRoom)?;

    let a = &details.amenities;
    let room = sqlx::query_as::<_, Room>(
        "UPDATE rooms SET
            title = ?1,
            description = ?2,
            image = ?3,
            bed_count = ?4,
            guest_count = ?5,
            bathroom_count = ?6,
            king_bed = ?7,
            queen_bed = ?8,
            room_price = ?9,
            room_service = ?10,
            tv = ?11,
            balcony = ?12,
            free_wifi = ?13,
            city_view = ?14,
            ocean_view = ?15,
            forest_view = ?16,
            mountain_view = ?17,
            air_condition = ?18,
            sound_proof = ?19,
            updated_at = ?20
        WHERE id = ?21
        RETURNING *;",
    )
    .bind(details.title.trim())
    .bind(details.description.trim())
    .bind(&details.image)
    .bind(details.bed_count)
    .bind(details.guest_count)
    .bind(details.bathroom_count)
    .bind(details.king_bed)
    .bind(details.queen_bed)
    .bind(details.room_price)
    .bind(a.room_service)
    .bind(a.tv)
    .bind(a.balcony)
    .bind(a.free_wifi)
    .bind(a.city_view)
    .bind(a.ocean_view)
    .bind(a.forest_view)
    .bind(a.mountain_view)
    .bind(a.air_condition)
    .bind(a.sound_proof)
    .bind(now(time_source))
    .bind(room.id)
    .fetch_one(pool)
    .await
    .map_err(or_not_found(StoreError::RoomNotFound))?;
    Ok(room)
}

/// Deletes the room, then its image unless another listing still uses it.
pub async fn delete_room(
    room: Room,
    owner: &ValidatedOwner,
    pool: &SqlitePool,
) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query("DELETE FROM rooms WHERE id = ?")
        .bind(room.id)
        .execute(&mut *tx)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::RoomNotFound);
    }
    delete_unreferenced_images(
        &owner.hotel().owner_id,
        &[room.details.image],
        &mut tx,
    )
    .await?;
    tx.commit().await?;
    Ok(())
}
