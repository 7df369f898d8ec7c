use payloads::{
    HotelId,
    display::{CARD_DESCRIPTION_LEN, room_features, truncate},
    responses,
};
use yew::prelude::*;

use super::form_fields::{BUTTON_DANGER, BUTTON_SECONDARY};
use super::{AmenityList, RoomFormView};
use crate::contexts::toast::Toast;
use crate::get_api_client;
use crate::hooks::use_busy;

#[derive(Properties, PartialEq)]
pub struct RoomCardProps {
    pub hotel_id: HotelId,
    pub room: responses::Room,
    /// Owners get edit and delete controls.
    #[prop_or_default]
    pub editable: bool,
    pub notify: Callback<Toast>,
    /// Called after the room was changed or deleted.
    pub on_changed: Callback<()>,
}

#[function_component]
pub fn RoomCard(props: &RoomCardProps) -> Html {
    let is_editing = use_state(|| false);
    let is_deleting = use_busy();
    let room = &props.room;
    let details = &room.room_details;

    if *is_editing {
        let on_saved = {
            let is_editing = is_editing.clone();
            let on_changed = props.on_changed.clone();
            Callback::from(move |_| {
                is_editing.set(false);
                on_changed.emit(());
            })
        };
        let on_cancel = {
            let is_editing = is_editing.clone();
            Callback::from(move |_| is_editing.set(false))
        };
        return html! {
            <RoomFormView
                hotel_id={props.hotel_id}
                room={Some(room.clone())}
                notify={props.notify.clone()}
                {on_saved}
                {on_cancel}
            />
        };
    }

    let on_edit = {
        let is_editing = is_editing.clone();
        Callback::from(move |_: MouseEvent| is_editing.set(true))
    };

    let on_delete = {
        let is_deleting = is_deleting.clone();
        let notify = props.notify.clone();
        let on_changed = props.on_changed.clone();
        let room_id = room.room_id;

        Callback::from(move |_: MouseEvent| {
            if !is_deleting.begin() {
                return;
            }
            let is_deleting = is_deleting.clone();
            let notify = notify.clone();
            let on_changed = on_changed.clone();

            yew::platform::spawn_local(async move {
                match get_api_client().delete_room(&room_id).await {
                    Ok(()) => {
                        notify.emit(Toast::success("Room deleted"));
                        on_changed.emit(());
                    }
                    Err(e) => {
                        notify.emit(Toast::error(format!("Could not delete room: {e}")));
                    }
                }
                is_deleting.finish();
            });
        })
    };

    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md overflow-hidden">
            <img
                src={details.image.clone()}
                alt={details.title.clone()}
                class="w-full h-40 object-cover bg-neutral-200 dark:bg-neutral-700"
            />
            <div class="p-4 space-y-3">
                <div class="flex justify-between items-baseline">
                    <h4 class="font-semibold">{&details.title}</h4>
                    <span class="font-semibold">{format!("${} / night", details.room_price)}</span>
                </div>
                <p class="text-sm text-neutral-600 dark:text-neutral-300" title={details.description.clone()}>
                    {truncate(&details.description, CARD_DESCRIPTION_LEN)}
                </p>
                <AmenityList amenities={room_features(details)} />
                if props.editable {
                    <div class="flex gap-2 pt-2">
                        <button class={BUTTON_SECONDARY} onclick={on_edit}>{"Edit"}</button>
                        <button class={BUTTON_DANGER} onclick={on_delete} disabled={is_deleting.is_busy()}>
                            {if is_deleting.is_busy() { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                }
            </div>
        </div>
    }
}
