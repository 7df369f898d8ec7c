use payloads::HotelId;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::HotelFormView;
use crate::contexts::toast::Toast;
use crate::hooks::use_hotel;
use crate::{AuthState, Route, State};

#[derive(Properties, PartialEq)]
pub struct EditHotelProps {
    /// `None` to create a new hotel.
    pub hotel_id: Option<HotelId>,
    pub notify: Callback<Toast>,
}

#[function_component]
pub fn EditHotelPage(props: &EditHotelProps) -> Html {
    let (state, _) = use_store::<State>();

    match &state.auth_state {
        AuthState::Unknown => html! {},
        AuthState::LoggedOut => html! {
            <div class="text-center space-y-4">
                <p>{"Sign in to list a hotel."}</p>
                <Link<Route> to={Route::Login} classes="underline">{"Sign in"}</Link<Route>>
            </div>
        },
        AuthState::LoggedIn(_) => match props.hotel_id {
            None => html! {
                <div class="space-y-6">
                    <h1 class="text-3xl font-bold">{"Add a hotel"}</h1>
                    <HotelFormView notify={props.notify.clone()} />
                </div>
            },
            Some(hotel_id) => html! {
                <EditExistingHotel {hotel_id} notify={props.notify.clone()} />
            },
        },
    }
}

#[derive(Properties, PartialEq)]
struct EditExistingProps {
    hotel_id: HotelId,
    notify: Callback<Toast>,
}

#[function_component]
fn EditExistingHotel(props: &EditExistingProps) -> Html {
    let hotel = use_hotel(props.hotel_id);
    let (state, _) = use_store::<State>();

    hotel.render("hotel", |hotel| {
        if !state.owns(hotel) {
            return html! {
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Only the owner can edit this hotel."}
                </p>
            };
        }
        html! {
            <div class="space-y-6">
                <h1 class="text-3xl font-bold">{format!("Edit {}", hotel.hotel_details.title)}</h1>
                <HotelFormView
                    key={hotel.updated_at.to_string()}
                    hotel={Some(hotel.hotel.clone())}
                    notify={props.notify.clone()}
                />
            </div>
        }
    })
}
