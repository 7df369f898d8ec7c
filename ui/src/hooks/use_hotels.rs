use payloads::{HotelId, responses::HotelWithRooms};
use yew::prelude::*;
use yewdux::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::{State, get_api_client};

/// Every listed hotel, for the home page.
#[hook]
pub fn use_all_hotels() -> FetchHookReturn<Vec<HotelWithRooms>> {
    use_fetch((), || async move {
        get_api_client()
            .list_hotels()
            .await
            .map_err(|e| e.to_string())
    })
}

/// Hotels of the logged in user. Refetches when the user changes.
#[hook]
pub fn use_my_hotels() -> FetchHookReturn<Vec<HotelWithRooms>> {
    let (state, _) = use_store::<State>();
    let user_id = state.profile().map(|profile| profile.user_id);

    use_fetch(user_id, move || async move {
        if user_id.is_none() {
            return Ok(Vec::new());
        }
        get_api_client()
            .my_hotels()
            .await
            .map_err(|e| e.to_string())
    })
}

#[hook]
pub fn use_hotel(hotel_id: HotelId) -> FetchHookReturn<HotelWithRooms> {
    use_fetch(hotel_id, move || async move {
        get_api_client()
            .get_hotel(&hotel_id)
            .await
            .map_err(|e| e.to_string())
    })
}
