//! Country → state → city selects over the built-in location data.

use payloads::{forms::LocationSelection, location};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::form_fields::FieldError;

const SELECT_CLASSES: &str = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
     rounded-md bg-white dark:bg-neutral-700 disabled:opacity-50 disabled:cursor-not-allowed";

#[derive(Properties, PartialEq)]
pub struct LocationSelectProps {
    pub selection: LocationSelection,
    pub on_change: Callback<LocationSelection>,
    #[prop_or_default]
    pub country_error: Option<String>,
    #[prop_or_default]
    pub state_error: Option<String>,
    #[prop_or_default]
    pub city_error: Option<String>,
}

fn select_handler(
    selection: &LocationSelection,
    on_change: &Callback<LocationSelection>,
    apply: fn(&mut LocationSelection, &str),
) -> Callback<Event> {
    let selection = selection.clone();
    let on_change = on_change.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = selection.clone();
        apply(&mut next, &select.value());
        on_change.emit(next);
    })
}

fn placeholder(text: &'static str, selected: bool) -> Html {
    html! { <option value="" {selected}>{text}</option> }
}

#[function_component]
pub fn LocationSelect(props: &LocationSelectProps) -> Html {
    let selection = &props.selection;

    let on_country = select_handler(selection, &props.on_change, LocationSelection::select_country);
    let on_state = select_handler(selection, &props.on_change, LocationSelection::select_state);
    let on_city = select_handler(selection, &props.on_change, LocationSelection::select_city);

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <div>
                <label for="country" class="block text-sm font-medium mb-2">{"Country"}</label>
                <select id="country" class={SELECT_CLASSES} onchange={on_country}>
                    {placeholder("Select a country", selection.country().is_empty())}
                    {for location::all_countries().iter().map(|country| html! {
                        <option
                            value={country.iso_code}
                            selected={country.iso_code == selection.country()}
                        >
                            {country.name}
                        </option>
                    })}
                </select>
                <FieldError message={props.country_error.clone()} />
            </div>
            <div>
                <label for="state" class="block text-sm font-medium mb-2">{"State"}</label>
                <select
                    id="state"
                    class={SELECT_CLASSES}
                    disabled={selection.is_state_disabled()}
                    onchange={on_state}
                >
                    {placeholder("Select a state", selection.state().is_empty())}
                    {for selection.candidate_states().iter().map(|state| html! {
                        <option
                            value={state.iso_code}
                            selected={state.iso_code == selection.state()}
                        >
                            {state.name}
                        </option>
                    })}
                </select>
                <FieldError message={props.state_error.clone()} />
            </div>
            <div>
                <label for="city" class="block text-sm font-medium mb-2">{"City"}</label>
                <select
                    id="city"
                    class={SELECT_CLASSES}
                    disabled={selection.is_city_disabled()}
                    onchange={on_city}
                >
                    {placeholder("Select a city", selection.city().is_empty())}
                    {for selection.candidate_cities().iter().map(|city| html! {
                        <option
                            value={city.name}
                            selected={city.name == selection.city()}
                        >
                            {city.name}
                        </option>
                    })}
                </select>
                <FieldError message={props.city_error.clone()} />
            </div>
        </div>
    }
}
