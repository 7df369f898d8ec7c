use payloads::display::{Amenity, Icon};
use yew::prelude::*;

fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Bed => "🛏",
        Icon::Users => "👥",
        Icon::Bath => "🛁",
        Icon::Utensils => "🍽",
        Icon::Tv => "📺",
        Icon::Wifi => "📶",
        Icon::AirVent => "❄",
        Icon::Mountain => "⛰",
        Icon::Trees => "🌲",
        Icon::Ship => "🚢",
        Icon::Building => "🏙",
        Icon::DoorOpen => "🚪",
        Icon::VolumeOff => "🔇",
        Icon::Wine => "🍷",
        Icon::Coffee => "☕",
        Icon::Dumbbell => "🏋",
        Icon::Shirt => "👕",
        Icon::Waves => "🏊",
        Icon::Spa => "💆",
    }
}

#[derive(Properties, PartialEq)]
pub struct AmenityItemProps {
    pub amenity: Amenity,
}

#[function_component]
pub fn AmenityItem(props: &AmenityItemProps) -> Html {
    html! {
        <div class="flex items-center gap-2 text-sm text-neutral-700 dark:text-neutral-300">
            <span aria-hidden="true">{glyph(props.amenity.icon)}</span>
            <span>{&props.amenity.label}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AmenityListProps {
    pub amenities: Vec<Amenity>,
}

#[function_component]
pub fn AmenityList(props: &AmenityListProps) -> Html {
    html! {
        <div class="grid grid-cols-2 gap-2">
            {for props.amenities.iter().map(|amenity| html! {
                <AmenityItem amenity={amenity.clone()} />
            })}
        </div>
    }
}
