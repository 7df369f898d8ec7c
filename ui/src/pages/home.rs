use yew::prelude::*;

use crate::components::HotelCard;
use crate::hooks::use_all_hotels;

#[function_component]
pub fn HomePage() -> Html {
    let hotels = use_all_hotels();

    html! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{"Find your next stay"}</h1>
            {hotels.render("hotels", |hotels| {
                if hotels.is_empty() {
                    return html! {
                        <p class="text-neutral-600 dark:text-neutral-400">{"No hotels listed yet."}</p>
                    };
                }
                html! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        {for hotels.iter().map(|hotel| html! {
                            <HotelCard key={hotel.hotel_id.to_string()} hotel={hotel.clone()} />
                        })}
                    </div>
                }
            })}
        </div>
    }
}
