use serde::{Deserialize, Serialize};

use crate::{Hotel, Room};

pub use crate::validation::{
    USERNAME_MAX_LEN, USERNAME_MIN_LEN, UsernameValidation, validate_username,
};

#[derive(Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct CreateAccount {
    pub username: String,
    pub password: String,
}

/// Fields of a hotel that an update may change. Absent fields are left as
/// they are; any field not listed here is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HotelPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gym: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spa: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laundry: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_wifi: Option<bool>,
}

fn merge<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

impl HotelPatch {
    pub fn apply_to(&self, hotel: &mut Hotel) {
        merge(&mut hotel.title, &self.title);
        merge(&mut hotel.description, &self.description);
        merge(&mut hotel.image, &self.image);
        merge(&mut hotel.country, &self.country);
        merge(&mut hotel.state, &self.state);
        merge(&mut hotel.city, &self.city);
        merge(&mut hotel.address, &self.address);
        merge(&mut hotel.location_description, &self.location_description);

        let amenities = &mut hotel.amenities;
        merge(&mut amenities.gym, &self.gym);
        merge(&mut amenities.spa, &self.spa);
        merge(&mut amenities.bar, &self.bar);
        merge(&mut amenities.laundry, &self.laundry);
        merge(&mut amenities.pool, &self.pool);
        merge(&mut amenities.breakfast, &self.breakfast);
        merge(&mut amenities.free_wifi, &self.free_wifi);
    }
}

/// A patch that overwrites every field.
impl From<Hotel> for HotelPatch {
    fn from(hotel: Hotel) -> Self {
        let a = hotel.amenities;
        Self {
            title: Some(hotel.title),
            description: Some(hotel.description),
            image: Some(hotel.image),
            country: Some(hotel.country),
            state: Some(hotel.state),
            city: Some(hotel.city),
            address: Some(hotel.address),
            location_description: Some(hotel.location_description),
            gym: Some(a.gym),
            spa: Some(a.spa),
            bar: Some(a.bar),
            laundry: Some(a.laundry),
            pool: Some(a.pool),
            breakfast: Some(a.breakfast),
            free_wifi: Some(a.free_wifi),
        }
    }
}

/// Fields of a room that an update may change. The parent hotel is not one
/// of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bed_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathroom_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub king_bed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queen_bed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_service: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tv: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balcony: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_wifi: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_view: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocean_view: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forest_view: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mountain_view: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_condition: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_proof: Option<bool>,
}

impl RoomPatch {
    pub fn apply_to(&self, room: &mut Room) {
        merge(&mut room.title, &self.title);
        merge(&mut room.description, &self.description);
        merge(&mut room.image, &self.image);
        merge(&mut room.bed_count, &self.bed_count);
        merge(&mut room.guest_count, &self.guest_count);
        merge(&mut room.bathroom_count, &self.bathroom_count);
        merge(&mut room.king_bed, &self.king_bed);
        merge(&mut room.queen_bed, &self.queen_bed);
        merge(&mut room.room_price, &self.room_price);

        let amenities = &mut room.amenities;
        merge(&mut amenities.room_service, &self.room_service);
        merge(&mut amenities.tv, &self.tv);
        merge(&mut amenities.balcony, &self.balcony);
        merge(&mut amenities.free_wifi, &self.free_wifi);
        merge(&mut amenities.city_view, &self.city_view);
        merge(&mut amenities.ocean_view, &self.ocean_view);
        merge(&mut amenities.forest_view, &self.forest_view);
        merge(&mut amenities.mountain_view, &self.mountain_view);
        merge(&mut amenities.air_condition, &self.air_condition);
        merge(&mut amenities.sound_proof, &self.sound_proof);
    }
}

impl From<Room> for RoomPatch {
    fn from(room: Room) -> Self {
        let a = room.amenities;
        Self {
            title: Some(room.title),
            description: Some(room.description),
            image: Some(room.image),
            bed_count: Some(room.bed_count),
            guest_count: Some(room.guest_count),
            bathroom_count: Some(room.bathroom_count),
            king_bed: Some(room.king_bed),
            queen_bed: Some(room.queen_bed),
            room_price: Some(room.room_price),
            room_service: Some(a.room_service),
            tv: Some(a.tv),
            balcony: Some(a.balcony),
            free_wifi: Some(a.free_wifi),
            city_view: Some(a.city_view),
            ocean_view: Some(a.ocean_view),
            forest_view: Some(a.forest_view),
            mountain_view: Some(a.mountain_view),
            air_condition: Some(a.air_condition),
            sound_proof: Some(a.sound_proof),
        }
    }
}

/// Raw image bytes; the server sniffs the actual type.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadImage {
    pub file_name: String,
    pub image_data: Vec<u8>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteImage {
    pub image_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HotelAmenities, HotelId, RoomAmenities};
    use uuid::Uuid;

    fn hotel() -> Hotel {
        Hotel {
            title: "Old Name".into(),
            description: "Twelve rooms above a bakery".into(),
            image: "/api/uploads/a.png".into(),
            country: "FR".into(),
            state: "IDF".into(),
            city: "Paris".into(),
            address: "3 Rue de la Paix".into(),
            location_description: "Near the opera house".into(),
            amenities: HotelAmenities {
                breakfast: true,
                ..Default::default()
            },
        }
    }

    #[test]
    fn title_patch_only_changes_title() {
        let patch: HotelPatch =
            serde_json::from_str(r#"{ "title": "New Name" }"#).unwrap();
        let mut patched = hotel();
        patch.apply_to(&mut patched);

        let mut expected = hotel();
        expected.title = "New Name".into();
        assert_eq!(patched, expected);
    }

    #[test]
    fn applying_twice_is_same_as_once() {
        let patch = HotelPatch {
            city: Some("Versailles".into()),
            pool: Some(true),
            breakfast: Some(false),
            ..Default::default()
        };
        let mut once = hotel();
        patch.apply_to(&mut once);
        let mut twice = once.clone();
        patch.apply_to(&mut twice);
        assert_eq!(once, twice);
        assert!(once.amenities.pool);
        assert!(!once.amenities.breakfast);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(
            serde_json::from_str::<HotelPatch>(
                r#"{ "title": "x", "owner_id": "00000000-0000-0000-0000-000000000000" }"#
            )
            .is_err()
        );
        assert!(
            serde_json::from_str::<RoomPatch>(r#"{ "hotel_id": "abc" }"#)
                .is_err()
        );
    }

    #[test]
    fn full_patch_serializes_flat() {
        let value = serde_json::to_value(HotelPatch::from(hotel())).unwrap();
        assert_eq!(value["title"], "Old Name");
        assert_eq!(value["breakfast"], true);
        assert_eq!(value["gym"], false);

        let empty = serde_json::to_value(HotelPatch::default()).unwrap();
        assert_eq!(empty, serde_json::json!({}));
    }

    #[test]
    fn room_patch_merges_counts_and_flags() {
        let mut room = Room {
            hotel_id: HotelId(Uuid::nil()),
            title: "Single".into(),
            description: "One bed and a window".into(),
            image: "/api/uploads/s.png".into(),
            bed_count: 1,
            guest_count: 1,
            bathroom_count: 1,
            king_bed: 0,
            queen_bed: 0,
            room_price: 50,
            amenities: RoomAmenities::default(),
        };
        let patch = RoomPatch {
            room_price: Some(65),
            ocean_view: Some(true),
            ..Default::default()
        };
        patch.apply_to(&mut room);
        assert_eq!(room.room_price, 65);
        assert!(room.amenities.ocean_view);
        assert_eq!(room.title, "Single");
    }
}
