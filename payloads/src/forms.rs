//! Client-side form state for hotels and rooms.
//!
//! The UI keeps one of these per form and calls the transition methods from
//! its input handlers, so the cascading country → state → city behaviour and
//! the image busy flag can be exercised without a browser.

use crate::{
    Hotel, HotelAmenities, HotelId, Room, RoomAmenities, RoomId,
    image_key_from_url,
    location::{self, City, State},
    requests::{HotelPatch, RoomPatch},
    validation::{
        FieldErrors, HotelField, RoomField, validate_hotel, validate_room,
    },
};

/// Country, state and city chosen in a hotel form, plus the options
/// currently offered for the dependent selects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSelection {
    country: String,
    state: String,
    city: String,
    candidate_states: Vec<&'static State>,
    candidate_cities: Vec<&'static City>,
}

impl LocationSelection {
    /// Restore a selection from stored codes, dropping any part that does
    /// not belong to its parent.
    pub fn from_codes(country: &str, state: &str, city: &str) -> Self {
        let mut selection = Self::default();
        selection.select_country(country);
        selection.select_state(state);
        selection.select_city(city);
        selection
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn candidate_states(&self) -> &[&'static State] {
        &self.candidate_states
    }

    pub fn candidate_cities(&self) -> &[&'static City] {
        &self.candidate_cities
    }

    pub fn is_state_disabled(&self) -> bool {
        self.candidate_states.is_empty()
    }

    pub fn is_city_disabled(&self) -> bool {
        self.candidate_cities.is_empty()
    }

    pub fn select_country(&mut self, code: &str) {
        self.country = code.to_string();
        self.candidate_states = location::states_of_country(code);

        if !self.candidate_states.iter().any(|s| s.iso_code == self.state) {
            self.state.clear();
            self.city.clear();
            self.candidate_cities.clear();
            return;
        }
        self.refresh_cities();
    }

    pub fn select_state(&mut self, code: &str) {
        if self.candidate_states.iter().any(|s| s.iso_code == code) {
            self.state = code.to_string();
            self.refresh_cities();
        } else {
            self.state.clear();
            self.city.clear();
            self.candidate_cities.clear();
        }
    }

    pub fn select_city(&mut self, name: &str) {
        if self.candidate_cities.iter().any(|c| c.name == name) {
            self.city = name.to_string();
        } else {
            self.city.clear();
        }
    }

    fn refresh_cities(&mut self) {
        self.candidate_cities =
            location::cities_of_state(&self.country, &self.state);
        if !self.candidate_cities.iter().any(|c| c.name == self.city) {
            self.city.clear();
        }
    }
}

/// The uploaded image of a form, with the flag that serializes uploads and
/// deletes against each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSlot {
    url: String,
    busy: bool,
    /// Local rendering of a file that is still being uploaded.
    preview: Option<String>,
}

impl ImageSlot {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The stored image, or the preview of one being uploaded.
    pub fn shown(&self) -> Option<&str> {
        if self.url.is_empty() {
            self.preview.as_deref()
        } else {
            Some(&self.url)
        }
    }

    /// Only kept while an upload is running.
    pub fn set_preview(&mut self, preview: String) {
        if self.busy && self.url.is_empty() {
            self.preview = Some(preview);
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// A new image may only be attached once the previous one is gone.
    pub fn can_attach(&self) -> bool {
        !self.busy && self.url.is_empty()
    }

    /// Returns `false` if an upload may not start now.
    pub fn begin_upload(&mut self) -> bool {
        if !self.can_attach() {
            return false;
        }
        self.busy = true;
        true
    }

    /// `url` is `None` when the upload failed.
    pub fn finish_upload(&mut self, url: Option<String>) {
        if let Some(url) = url {
            self.url = url;
        }
        self.preview = None;
        self.busy = false;
    }

    /// Marks the slot busy and returns the storage key to delete.
    pub fn begin_delete(&mut self) -> Result<String, DeleteRefused> {
        if self.busy {
            return Err(DeleteRefused::Busy);
        }
        if self.url.is_empty() {
            return Err(DeleteRefused::NoImage);
        }
        let key = image_key_from_url(&self.url)
            .ok_or(DeleteRefused::NoStorageKey)?
            .to_string();
        self.busy = true;
        Ok(key)
    }

    pub fn finish_delete(&mut self, deleted: bool) {
        if deleted {
            self.url.clear();
        }
        self.busy = false;
    }
}

/// Why [`ImageSlot::begin_delete`] did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeleteRefused {
    #[error("Another image operation is still running")]
    Busy,
    #[error("There is no image to remove")]
    NoImage,
    #[error("The image link does not name a stored file")]
    NoStorageKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelSubmission {
    Create(Hotel),
    Update(HotelId, HotelPatch),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelForm {
    pub title: String,
    pub description: String,
    pub address: String,
    pub location_description: String,
    pub location: LocationSelection,
    pub amenities: HotelAmenities,
    pub image: ImageSlot,
}

impl HotelForm {
    pub fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            title: hotel.title.clone(),
            description: hotel.description.clone(),
            address: hotel.address.clone(),
            location_description: hotel.location_description.clone(),
            location: LocationSelection::from_codes(
                &hotel.country,
                &hotel.state,
                &hotel.city,
            ),
            amenities: hotel.amenities,
            image: ImageSlot::new(hotel.image.clone()),
        }
    }

    pub fn to_hotel(&self) -> Hotel {
        Hotel {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.url().to_string(),
            country: self.location.country().to_string(),
            state: self.location.state().to_string(),
            city: self.location.city().to_string(),
            address: self.address.trim().to_string(),
            location_description: self.location_description.trim().to_string(),
            amenities: self.amenities,
        }
    }

    pub fn validate(&self) -> Result<Hotel, FieldErrors<HotelField>> {
        let hotel = self.to_hotel();
        validate_hotel(&hotel)?;
        Ok(hotel)
    }

    /// Create when there is no stored hotel yet, otherwise an update
    /// carrying every field. Nothing is produced while the form is invalid.
    pub fn submission(
        &self,
        existing: Option<HotelId>,
    ) -> Result<HotelSubmission, FieldErrors<HotelField>> {
        let hotel = self.validate()?;
        Ok(match existing {
            None => HotelSubmission::Create(hotel),
            Some(hotel_id) => HotelSubmission::Update(hotel_id, hotel.into()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomSubmission {
    Create(Room),
    Update(RoomId, RoomPatch),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomForm {
    pub title: String,
    pub description: String,
    pub bed_count: i64,
    pub guest_count: i64,
    pub bathroom_count: i64,
    pub king_bed: i64,
    pub queen_bed: i64,
    pub room_price: i64,
    pub amenities: RoomAmenities,
    pub image: ImageSlot,
}

impl RoomForm {
    pub fn from_room(room: &Room) -> Self {
        Self {
            title: room.title.clone(),
            description: room.description.clone(),
            bed_count: room.bed_count,
            guest_count: room.guest_count,
            bathroom_count: room.bathroom_count,
            king_bed: room.king_bed,
            queen_bed: room.queen_bed,
            room_price: room.room_price,
            amenities: room.amenities,
            image: ImageSlot::new(room.image.clone()),
        }
    }

    pub fn to_room(&self, hotel_id: HotelId) -> Room {
        Room {
            hotel_id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.url().to_string(),
            bed_count: self.bed_count,
            guest_count: self.guest_count,
            bathroom_count: self.bathroom_count,
            king_bed: self.king_bed,
            queen_bed: self.queen_bed,
            room_price: self.room_price,
            amenities: self.amenities,
        }
    }

    pub fn submission(
        &self,
        hotel_id: HotelId,
        existing: Option<RoomId>,
    ) -> Result<RoomSubmission, FieldErrors<RoomField>> {
        let room = self.to_room(hotel_id);
        validate_room(&room)?;
        Ok(match existing {
            None => RoomSubmission::Create(room),
            Some(room_id) => RoomSubmission::Update(room_id, room.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn state_and_city_disabled_until_parent_chosen() {
        let mut selection = LocationSelection::default();
        assert!(selection.is_state_disabled());
        assert!(selection.is_city_disabled());

        selection.select_country("US");
        assert!(!selection.is_state_disabled());
        assert!(selection.is_city_disabled());

        selection.select_state("WA");
        assert!(!selection.is_city_disabled());
        assert!(
            selection
                .candidate_cities()
                .iter()
                .all(|c| c.country_code == "US" && c.state_code == "WA")
        );
    }

    #[test]
    fn new_country_clears_foreign_state_and_city() {
        let mut selection = LocationSelection::from_codes("US", "WA", "Seattle");
        assert_eq!(selection.city(), "Seattle");

        selection.select_country("KE");
        assert_eq!(selection.country(), "KE");
        assert_eq!(selection.state(), "");
        assert_eq!(selection.city(), "");
        assert!(selection.is_city_disabled());
        assert!(!selection.is_state_disabled());
        assert!(
            selection
                .candidate_states()
                .iter()
                .all(|s| s.country_code == "KE")
        );
    }

    #[test]
    fn shared_state_code_survives_but_city_does_not() {
        // "WA" exists in both the US and Australia.
        let mut selection = LocationSelection::from_codes("US", "WA", "Seattle");
        selection.select_country("AU");
        assert_eq!(selection.state(), "WA");
        assert_eq!(selection.city(), "");
        assert!(selection.candidate_cities().iter().any(|c| c.name == "Perth"));
    }

    #[test]
    fn unknown_country_disables_state() {
        let mut selection = LocationSelection::from_codes("US", "CA", "");
        selection.select_country("XX");
        assert!(selection.is_state_disabled());
        assert!(selection.is_city_disabled());
        assert_eq!(selection.state(), "");
    }

    #[test]
    fn country_without_states() {
        let mut selection = LocationSelection::default();
        selection.select_country("VA");
        assert!(selection.is_state_disabled());
        selection.select_state("XX");
        assert_eq!(selection.state(), "");
    }

    #[test]
    fn selecting_state_outside_candidates_clears_it() {
        let mut selection = LocationSelection::from_codes("US", "WA", "Seattle");
        selection.select_state("ON");
        assert_eq!(selection.state(), "");
        assert_eq!(selection.city(), "");
        assert!(selection.is_city_disabled());
    }

    #[test]
    fn from_codes_drops_inconsistent_parts() {
        let selection = LocationSelection::from_codes("CA", "WA", "Seattle");
        assert_eq!(selection.country(), "CA");
        assert_eq!(selection.state(), "");
        assert_eq!(selection.city(), "");

        let selection = LocationSelection::from_codes("US", "WA", "Perth");
        assert_eq!(selection.state(), "WA");
        assert_eq!(selection.city(), "");
    }

    fn filled_hotel_form() -> HotelForm {
        HotelForm {
            title: "Lakeside Lodge".into(),
            description: "Quiet lodge next to the lake".into(),
            address: "42 Shore Drive, Whistler".into(),
            location_description: "Ten minutes from the ski lifts".into(),
            location: LocationSelection::from_codes("CA", "BC", "Whistler"),
            amenities: HotelAmenities {
                spa: true,
                ..Default::default()
            },
            image: ImageSlot::new("http://localhost/api/uploads/lodge.png"),
        }
    }

    #[test]
    fn invalid_hotel_form_produces_no_submission() {
        let mut form = filled_hotel_form();
        form.title = "ab".into();
        assert!(form.submission(None).is_err());

        let mut form = filled_hotel_form();
        form.description = "short".into();
        assert!(form.submission(None).is_err());

        let mut form = filled_hotel_form();
        form.image = ImageSlot::default();
        let errors = form.submission(None).unwrap_err();
        assert!(errors.get(HotelField::Image).is_some());
    }

    #[test]
    fn hotel_submission_create_or_update() {
        let form = filled_hotel_form();
        let Ok(HotelSubmission::Create(hotel)) = form.submission(None) else {
            panic!("expected a create submission");
        };
        assert_eq!(hotel.city, "Whistler");
        assert!(hotel.amenities.spa);

        let hotel_id = HotelId(Uuid::new_v4());
        let Ok(HotelSubmission::Update(id, patch)) =
            form.submission(Some(hotel_id))
        else {
            panic!("expected an update submission");
        };
        assert_eq!(id, hotel_id);
        assert_eq!(patch, HotelPatch::from(hotel));
        assert_eq!(patch.title.as_deref(), Some("Lakeside Lodge"));
        assert_eq!(patch.spa, Some(true));
        assert_eq!(patch.gym, Some(false));
    }

    #[test]
    fn hotel_form_round_trips_stored_hotel() {
        let hotel = filled_hotel_form().to_hotel();
        assert_eq!(HotelForm::from_hotel(&hotel).to_hotel(), hotel);
    }

    #[test]
    fn image_delete_derives_key_and_serializes() {
        let mut slot = ImageSlot::new("https://files.example.com/f/abc123.png");
        assert!(!slot.can_attach());
        assert!(!slot.begin_upload());

        assert_eq!(slot.begin_delete().as_deref(), Ok("abc123.png"));
        assert!(slot.is_busy());
        // A second delete while one is in flight is refused.
        assert_eq!(slot.begin_delete(), Err(DeleteRefused::Busy));
        assert!(!slot.can_attach());

        slot.finish_delete(true);
        assert!(!slot.is_busy());
        assert_eq!(slot.url(), "");
        assert!(slot.can_attach());
    }

    #[test]
    fn failed_image_delete_keeps_image() {
        let mut slot = ImageSlot::new("/api/uploads/abc123.png");
        assert!(slot.begin_delete().is_ok());
        slot.finish_delete(false);
        assert!(!slot.is_busy());
        assert_eq!(slot.url(), "/api/uploads/abc123.png");
        assert!(!slot.can_attach());
    }

    #[test]
    fn image_without_storage_key_is_not_deleted() {
        let mut slot = ImageSlot::new("https://files.example.com/uploads/");
        assert_eq!(slot.begin_delete(), Err(DeleteRefused::NoStorageKey));
        assert!(!slot.is_busy());
        assert_eq!(slot.url(), "https://files.example.com/uploads/");
        assert_eq!(
            DeleteRefused::NoStorageKey.to_string(),
            "The image link does not name a stored file"
        );
    }

    #[test]
    fn image_upload_flow() {
        let mut slot = ImageSlot::default();
        assert_eq!(slot.begin_delete(), Err(DeleteRefused::NoImage));
        assert!(slot.begin_upload());
        assert!(!slot.begin_upload());
        slot.finish_upload(None);
        assert!(slot.can_attach());

        assert!(slot.begin_upload());
        slot.finish_upload(Some("/api/uploads/new.png".into()));
        assert_eq!(slot.url(), "/api/uploads/new.png");
        assert!(!slot.can_attach());
    }

    #[test]
    fn failed_upload_drops_preview() {
        let mut slot = ImageSlot::default();
        assert!(slot.begin_upload());
        slot.set_preview("data:image/png;base64,AAAA".into());
        assert_eq!(slot.shown(), Some("data:image/png;base64,AAAA"));

        slot.finish_upload(None);
        assert_eq!(slot.shown(), None);
        assert!(slot.can_attach());

        // A stray preview after the upload settled is ignored.
        slot.set_preview("data:image/png;base64,BBBB".into());
        assert_eq!(slot.shown(), None);
    }

    #[test]
    fn uploaded_url_replaces_preview() {
        let mut slot = ImageSlot::default();
        assert!(slot.begin_upload());
        slot.set_preview("data:image/png;base64,AAAA".into());
        slot.finish_upload(Some("/api/uploads/new.png".into()));
        assert_eq!(slot.shown(), Some("/api/uploads/new.png"));

        assert!(slot.begin_delete().is_ok());
        slot.finish_delete(true);
        assert_eq!(slot.shown(), None);
    }

    #[test]
    fn room_form_rejects_low_counts() {
        let hotel_id = HotelId(Uuid::new_v4());
        let mut form = RoomForm {
            title: "Twin".into(),
            description: "Two single beds and a desk".into(),
            bed_count: 2,
            guest_count: 2,
            bathroom_count: 1,
            king_bed: 0,
            queen_bed: 0,
            room_price: 80,
            amenities: RoomAmenities::default(),
            image: ImageSlot::new("/api/uploads/twin.png"),
        };
        assert!(matches!(
            form.submission(hotel_id, None),
            Ok(RoomSubmission::Create(ref room)) if room.hotel_id == hotel_id
        ));

        let room_id = RoomId(Uuid::new_v4());
        assert!(matches!(
            form.submission(hotel_id, Some(room_id)),
            Ok(RoomSubmission::Update(id, _)) if id == room_id
        ));

        form.bed_count = 0;
        let errors = form.submission(hotel_id, None).unwrap_err();
        assert!(errors.get(RoomField::BedCount).is_some());

        form.bed_count = 1;
        form.queen_bed = -1;
        let errors = form.submission(hotel_id, None).unwrap_err();
        assert!(errors.get(RoomField::QueenBed).is_some());
    }

    #[test]
    fn default_room_form_is_invalid() {
        let errors = RoomForm::default()
            .submission(HotelId(Uuid::nil()), None)
            .unwrap_err();
        assert!(errors.get(RoomField::GuestCount).is_some());
        assert!(errors.get(RoomField::KingBed).is_none());
    }
}
