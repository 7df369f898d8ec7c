use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::HotelCard;
use crate::components::form_fields::BUTTON_PRIMARY;
use crate::hooks::use_my_hotels;
use crate::{AuthState, Route, State};

#[function_component]
pub fn MyHotelsPage() -> Html {
    let (state, _) = use_store::<State>();
    let hotels = use_my_hotels();

    match &state.auth_state {
        AuthState::Unknown => return html! {},
        AuthState::LoggedOut => {
            return html! {
                <div class="text-center space-y-4">
                    <p>{"Sign in to see your hotels."}</p>
                    <Link<Route> to={Route::Login} classes="underline">{"Sign in"}</Link<Route>>
                </div>
            };
        }
        AuthState::LoggedIn(_) => {}
    }

    html! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-3xl font-bold">{"My hotels"}</h1>
                <Link<Route> to={Route::NewHotel} classes={BUTTON_PRIMARY}>{"Add hotel"}</Link<Route>>
            </div>
            {hotels.render("your hotels", |hotels| {
                if hotels.is_empty() {
                    return html! {
                        <p class="text-neutral-600 dark:text-neutral-400">{"You have not listed any hotels yet."}</p>
                    };
                }
                html! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        {for hotels.iter().map(|hotel| html! {
                            <HotelCard key={hotel.hotel_id.to_string()} hotel={hotel.clone()} editable=true />
                        })}
                    </div>
                }
            })}
        </div>
    }
}
