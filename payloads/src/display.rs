//! What the hotel and room cards show, independent of how they render it.

use crate::{HotelAmenities, Room, location, responses};

/// Characters of description shown on a card.
pub const CARD_DESCRIPTION_LEN: usize = 45;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Bed,
    Users,
    Bath,
    Utensils,
    Tv,
    Wifi,
    AirVent,
    Mountain,
    Trees,
    Ship,
    Building,
    DoorOpen,
    VolumeOff,
    Wine,
    Coffee,
    Dumbbell,
    Shirt,
    Waves,
    Spa,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amenity {
    pub icon: Icon,
    pub label: String,
}

impl Amenity {
    fn new(icon: Icon, label: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
        }
    }
}

fn enabled(flags: &[(bool, Icon, &str)]) -> impl Iterator<Item = Amenity> {
    flags
        .iter()
        .filter(|(on, _, _)| *on)
        .map(|(_, icon, label)| Amenity::new(*icon, *label))
}

pub fn hotel_amenities(amenities: &HotelAmenities) -> Vec<Amenity> {
    let a = amenities;
    enabled(&[
        (a.bar, Icon::Wine, "Bar"),
        (a.breakfast, Icon::Coffee, "Breakfast"),
        (a.free_wifi, Icon::Wifi, "Free Wifi"),
        (a.gym, Icon::Dumbbell, "Gym"),
        (a.laundry, Icon::Shirt, "Laundry"),
        (a.pool, Icon::Waves, "Pool"),
        (a.spa, Icon::Spa, "Spa"),
    ])
    .collect()
}

/// Counts first, then the enabled flags.
pub fn room_features(room: &Room) -> Vec<Amenity> {
    let mut features = vec![
        Amenity::new(Icon::Bed, format!("{} Bed(s)", room.bed_count)),
        Amenity::new(Icon::Users, format!("{} Guest(s)", room.guest_count)),
        Amenity::new(Icon::Bath, format!("{} Bath(s)", room.bathroom_count)),
    ];
    if room.king_bed > 0 {
        features.push(Amenity::new(
            Icon::Bed,
            format!("{} King Bed(s)", room.king_bed),
        ));
    }
    if room.queen_bed > 0 {
        features.push(Amenity::new(
            Icon::Bed,
            format!("{} Queen Bed(s)", room.queen_bed),
        ));
    }

    let a = &room.amenities;
    features.extend(enabled(&[
        (a.room_service, Icon::Utensils, "Room Service"),
        (a.tv, Icon::Tv, "TV"),
        (a.free_wifi, Icon::Wifi, "Free Wifi"),
        (a.air_condition, Icon::AirVent, "Air Condition"),
        (a.mountain_view, Icon::Mountain, "Mountain View"),
        (a.forest_view, Icon::Trees, "Forest View"),
        (a.ocean_view, Icon::Ship, "Ocean View"),
        (a.city_view, Icon::Building, "City View"),
        (a.balcony, Icon::DoorOpen, "Balcony"),
        (a.sound_proof, Icon::VolumeOff, "Sound Proof"),
    ]));
    features
}

/// Cut `text` to at most `max_chars` characters, marking the cut with "...".
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// "City, State, Country" using display names where the codes are known.
pub fn location_label(country: &str, state: &str, city: &str) -> String {
    let country_name = location::country_by_code(country)
        .map(|c| c.name)
        .unwrap_or(country);
    let state_name = location::state_by_code(country, state)
        .map(|s| s.name)
        .unwrap_or(state);

    [city, state_name, country_name]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lowest nightly price among the rooms, if there are any.
pub fn starting_price(rooms: &[responses::Room]) -> Option<i64> {
    rooms.iter().map(|r| r.room_details.room_price).min()
}
