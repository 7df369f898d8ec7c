use payloads::{
    HotelId,
    display::{hotel_amenities, location_label},
    responses::HotelWithRooms,
};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::form_fields::{BUTTON_PRIMARY, BUTTON_SECONDARY};
use crate::components::{AmenityList, RoomCard, RoomFormView};
use crate::contexts::toast::Toast;
use crate::hooks::use_hotel;
use crate::{Route, State};

#[derive(Properties, PartialEq)]
pub struct HotelDetailsProps {
    pub hotel_id: HotelId,
    pub notify: Callback<Toast>,
}

/// "March 1, 2025" in UTC.
fn listed_on(hotel: &HotelWithRooms) -> String {
    hotel.created_at.strftime("%B %-d, %Y").to_string()
}

#[function_component]
pub fn HotelDetailsPage(props: &HotelDetailsProps) -> Html {
    let hotel = use_hotel(props.hotel_id);
    let (state, _) = use_store::<State>();
    let adding_room = use_state(|| false);

    let on_rooms_changed = {
        let refetch = hotel.refetch.clone();
        let adding_room = adding_room.clone();
        Callback::from(move |_| {
            adding_room.set(false);
            refetch.emit(());
        })
    };
    let toggle_add_room = {
        let adding_room = adding_room.clone();
        Callback::from(move |_: MouseEvent| adding_room.set(!*adding_room))
    };

    hotel.render("hotel", |hotel| {
        let details = &hotel.hotel_details;
        let is_owner = state.owns(hotel);

        html! {
            <div class="space-y-8">
                <img
                    src={details.image.clone()}
                    alt={details.title.clone()}
                    class="w-full h-80 object-cover rounded-lg bg-neutral-200 dark:bg-neutral-700"
                />
                <div class="flex justify-between items-start gap-4">
                    <div class="space-y-1">
                        <h1 class="text-3xl font-bold">{&details.title}</h1>
                        <p class="text-neutral-500 dark:text-neutral-400">
                            {location_label(&details.country, &details.state, &details.city)}
                        </p>
                        <p class="text-sm text-neutral-500">{&details.address}</p>
                        <p class="text-xs text-neutral-400">{format!("Listed {}", listed_on(hotel))}</p>
                    </div>
                    if is_owner {
                        <Link<Route> to={Route::edit_hotel(hotel.hotel_id)} classes={BUTTON_SECONDARY}>
                            {"Edit hotel"}
                        </Link<Route>>
                    }
                </div>
                <p class="text-neutral-700 dark:text-neutral-300">{&details.description}</p>
                <div class="space-y-2">
                    <h2 class="text-xl font-semibold">{"Location"}</h2>
                    <p class="text-neutral-700 dark:text-neutral-300">{&details.location_description}</p>
                </div>
                <div class="space-y-2">
                    <h2 class="text-xl font-semibold">{"Amenities"}</h2>
                    <AmenityList amenities={hotel_amenities(&details.amenities)} />
                </div>
                <div class="space-y-4">
                    <div class="flex justify-between items-center">
                        <h2 class="text-xl font-semibold">{"Rooms"}</h2>
                        if is_owner {
                            <button class={BUTTON_PRIMARY} onclick={toggle_add_room.clone()}>
                                {if *adding_room { "Close" } else { "Add room" }}
                            </button>
                        }
                    </div>
                    if is_owner && *adding_room {
                        <RoomFormView
                            hotel_id={hotel.hotel_id}
                            notify={props.notify.clone()}
                            on_saved={on_rooms_changed.clone()}
                        />
                    }
                    if hotel.rooms.is_empty() {
                        <p class="text-neutral-600 dark:text-neutral-400">{"No rooms listed yet."}</p>
                    }
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {for hotel.rooms.iter().map(|room| html! {
                            <RoomCard
                                key={room.room_id.to_string()}
                                hotel_id={hotel.hotel_id}
                                room={room.clone()}
                                editable={is_owner}
                                notify={props.notify.clone()}
                                on_changed={on_rooms_changed.clone()}
                            />
                        })}
                    </div>
                </div>
            </div>
        }
    })
}
