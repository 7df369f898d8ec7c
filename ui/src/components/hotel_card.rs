use payloads::{
    display::{CARD_DESCRIPTION_LEN, hotel_amenities, location_label, starting_price, truncate},
    responses::HotelWithRooms,
};
use yew::prelude::*;
use yew_router::prelude::*;

use super::AmenityList;
use super::form_fields::BUTTON_SECONDARY;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HotelCardProps {
    pub hotel: HotelWithRooms,
    /// Show an Edit link under the card.
    #[prop_or_default]
    pub editable: bool,
}

#[function_component]
pub fn HotelCard(props: &HotelCardProps) -> Html {
    let hotel = &props.hotel;
    let details = &hotel.hotel_details;

    html! {
        <div class="space-y-2">
            <Link<Route> to={Route::hotel(hotel.hotel_id)} classes="block">
                <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md overflow-hidden hover:shadow-lg transition-shadow">
                    <img
                        src={details.image.clone()}
                        alt={details.title.clone()}
                        class="w-full h-48 object-cover bg-neutral-200 dark:bg-neutral-700"
                    />
                    <div class="p-4 space-y-2">
                        <h3 class="text-lg font-semibold">{&details.title}</h3>
                        <p class="text-sm text-neutral-500 dark:text-neutral-400">
                            {location_label(&details.country, &details.state, &details.city)}
                        </p>
                        <p class="text-sm text-neutral-600 dark:text-neutral-300">
                            {truncate(&details.description, CARD_DESCRIPTION_LEN)}
                        </p>
                        <AmenityList amenities={hotel_amenities(&details.amenities)} />
                        {match starting_price(&hotel.rooms) {
                            Some(price) => html! {
                                <p class="font-semibold">{format!("From ${price} / night")}</p>
                            },
                            None => html! {
                                <p class="text-sm text-neutral-500">{"No rooms yet"}</p>
                            },
                        }}
                    </div>
                </div>
            </Link<Route>>
            if props.editable {
                <Link<Route> to={Route::edit_hotel(hotel.hotel_id)} classes={BUTTON_SECONDARY}>
                    {"Edit"}
                </Link<Route>>
            }
        </div>
    }
}
