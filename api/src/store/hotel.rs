use super::*;
use super::image::delete_unreferenced_images;
use payloads::{requests::HotelPatch, responses, validation::validate_hotel};
use sqlx::SqlitePool;
use uuid::Uuid;

pub async fn create_hotel(
    details: &payloads::Hotel,
    owner_id: &UserId,
    pool: &SqlitePool,
    time_source: &TimeSource,
) -> Result<Hotel, StoreError> {
    validate_hotel(details).map_err(StoreError::InvalidHotel)?;

    let a = &details.amenities;
    let hotel = sqlx::query_as::<_, Hotel>(
        "INSERT INTO hotels (
            id, owner_id, title, description, image,
            country, state, city, address, location_description,
            gym, spa, bar, laundry, pool, breakfast, free_wifi,
            created_at, updated_at
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10,
            ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?18)
        RETURNING *;",
    )
    .bind(HotelId(Uuid::new_v4()))
    .bind(owner_id)
    .bind(details.title.trim())
    .bind(details.description.trim())
    .bind(&details.image)
    .bind(&details.country)
    .bind(&details.state)
    .bind(&details.city)
    .bind(details.address.trim())
    .bind(details.location_description.trim())
    .bind(a.gym)
    .bind(a.spa)
    .bind(a.bar)
    .bind(a.laundry)
    .bind(a.pool)
    .bind(a.breakfast)
    .bind(a.free_wifi)
    .bind(now(time_source))
    .fetch_one(pool)
    .await?;
    Ok(hotel)
}

pub async fn get_hotel(
    hotel_id: &HotelId,
    pool: &SqlitePool,
) -> Result<Hotel, StoreError> {
    sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = ?")
        .bind(hotel_id)
        .fetch_one(pool)
        .await
        .map_err(or_not_found(StoreError::HotelNotFound))
}

/// Check that `user_id` owns the hotel. A missing hotel is reported before
/// ownership.
pub async fn get_validated_owner(
    user_id: &UserId,
    hotel_id: &HotelId,
    pool: &SqlitePool,
) -> Result<ValidatedOwner, StoreError> {
    let hotel = get_hotel(hotel_id, pool).await?;
    if hotel.owner_id != *user_id {
        return Err(StoreError::NotHotelOwner);
    }
    Ok(ValidatedOwner(hotel))
}

async fn with_rooms(
    hotel: Hotel,
    pool: &SqlitePool,
) -> Result<responses::HotelWithRooms, StoreError> {
    let rooms = list_rooms(&hotel.id, pool).await?;
    Ok(responses::HotelWithRooms {
        hotel: hotel.into(),
        rooms: rooms.into_iter().map(Into::into).collect(),
    })
}

pub async fn get_hotel_with_rooms(
    hotel_id: &HotelId,
    pool: &SqlitePool,
) -> Result<responses::HotelWithRooms, StoreError> {
    let hotel = get_hotel(hotel_id, pool).await?;
    with_rooms(hotel, pool).await
}

/// Every hotel, newest first.
pub async fn list_hotels(
    pool: &SqlitePool,
) -> Result<Vec<responses::HotelWithRooms>, StoreError> {
    let hotels = sqlx::query_as::<_, Hotel>(
        "SELECT * FROM hotels ORDER BY rowid DESC",
    )
    .fetch_all(pool)
    .await?;

    let mut result = Vec::with_capacity(hotels.len());
    for hotel in hotels {
        result.push(with_rooms(hotel, pool).await?);
    }
    Ok(result)
}

pub async fn list_owned_hotels(
    owner_id: &UserId,
    pool: &SqlitePool,
) -> Result<Vec<responses::HotelWithRooms>, StoreError> {
    let hotels = sqlx::query_as::<_, Hotel>(
        "SELECT * FROM hotels WHERE owner_id = ? ORDER BY rowid DESC",
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    let mut result = Vec::with_capacity(hotels.len());
    for hotel in hotels {
        result.push(with_rooms(hotel, pool).await?);
    }
    Ok(result)
}

/// Merge `patch` into the stored hotel, validate the result and write it in
/// a single statement.
pub async fn update_hotel(
    patch: &HotelPatch,
    owner: &ValidatedOwner,
    pool: &SqlitePool,
    time_source: &TimeSource,
) -> Result<Hotel, StoreError> {
    let mut details = owner.0.details.clone();
    patch.apply_to(&mut details);
    validate_hotel(&details).map_err(StoreError::InvalidHotel)?;

    let a = &details.amenities;
    let hotel = sqlx::query_as::<_, Hotel>(
        "UPDATE hotels SET
            title = ?1,
            description = ?2,
            image = ?3,
            country = ?4,
            state = ?5,
            city = ?6,
            address = ?7,
            location_description = ?8,
            gym = ?9,
            spa = ?10,
            bar = ?11,
            laundry = ?12,
            pool = ?13,
            breakfast = ?14,
            free_wifi = ?15,
            updated_at = ?16
        WHERE id = ?17
        RETURNING *;",
    )
    .bind(details.title.trim())
    .bind(details.description.trim())
    .bind(&details.image)
    .bind(&details.country)
    .bind(&details.state)
    .bind(&details.city)
    .bind(details.address.trim())
    .bind(details.location_description.trim())
    .bind(a.gym)
    .bind(a.spa)
    .bind(a.bar)
    .bind(a.laundry)
    .bind(a.pool)
    .bind(a.breakfast)
    .bind(a.free_wifi)
    .bind(now(time_source))
    .bind(owner.0.id)
    .fetch_one(pool)
    .await
    .map_err(or_not_found(StoreError::HotelNotFound))?;
    Ok(hotel)
}

/// Rooms go with the hotel through the foreign key cascade. Images of the
/// hotel and its rooms are deleted too unless another listing still uses
/// them.
pub async fn delete_hotel(
    owner: ValidatedOwner,
    pool: &SqlitePool,
) -> Result<(), StoreError> {
    let hotel = owner.0;
    let mut tx = pool.begin().await?;

    let mut image_urls = sqlx::query_scalar::<_, String>(
        "SELECT image FROM rooms WHERE hotel_id = ?",
    )
    .bind(hotel.id)
    .fetch_all(&mut *tx)
    .await?;
    image_urls.push(hotel.details.image);

    let result = sqlx::query("DELETE FROM hotels WHERE id = ?")
        .bind(hotel.id)
        .execute(&mut *tx)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::HotelNotFound);
    }
    delete_unreferenced_images(&hotel.owner_id, &image_urls, &mut tx).await?;
    tx.commit().await?;
    Ok(())
}
