//! Upload and removal of the single image a hotel or room carries.
//!
//! The slot itself lives in the parent form's reducer. This component only
//! sends [`ImageAction`]s, so a finished request always lands on the latest
//! form state rather than on the props it started from.

use base64::{Engine as _, engine::general_purpose};
use payloads::{
    MAX_IMAGE_SIZE,
    forms::{DeleteRefused, ImageSlot},
    requests,
};
use wasm_bindgen::prelude::*;
use web_sys::{Event, FileReader, HtmlInputElement};
use yew::prelude::*;

use super::form_fields::{BUTTON_DANGER, FieldError};
use crate::contexts::toast::Toast;
use crate::get_api_client;

#[derive(Debug, Clone, PartialEq)]
pub enum ImageAction {
    UploadStarted,
    /// The picked file, as a data URL, while it uploads.
    Preview(String),
    /// `None` when the upload failed.
    UploadFinished(Option<String>),
    DeleteStarted,
    DeleteFinished(bool),
}

impl ImageAction {
    pub fn apply(self, slot: &mut ImageSlot) {
        match self {
            Self::UploadStarted => {
                slot.begin_upload();
            }
            Self::Preview(preview) => slot.set_preview(preview),
            Self::UploadFinished(url) => slot.finish_upload(url),
            Self::DeleteStarted => {
                let _ = slot.begin_delete();
            }
            Self::DeleteFinished(cleared) => slot.finish_delete(cleared),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageUploadProps {
    pub image: ImageSlot,
    pub on_action: Callback<ImageAction>,
    pub notify: Callback<Toast>,
    #[prop_or_default]
    pub error: Option<String>,
}

fn upload(
    file_name: String,
    image_data: Vec<u8>,
    on_action: Callback<ImageAction>,
    notify: Callback<Toast>,
) {
    yew::platform::spawn_local(async move {
        let request = requests::UploadImage {
            file_name,
            image_data,
        };
        match get_api_client().upload_image(&request).await {
            Ok(uploaded) => {
                on_action.emit(ImageAction::UploadFinished(Some(uploaded.url)));
                notify.emit(Toast::success("Image uploaded"));
            }
            Err(e) => {
                on_action.emit(ImageAction::UploadFinished(None));
                notify.emit(Toast::error(format!("Image upload failed: {e}")));
            }
        }
    });
}

#[function_component]
pub fn ImageUpload(props: &ImageUploadProps) -> Html {
    let file_input_ref = use_node_ref();

    let on_file_select = {
        let can_attach = props.image.can_attach();
        let on_action = props.on_action.clone();
        let notify = props.notify.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");

            if !can_attach {
                notify.emit(Toast::error("Remove the current image first"));
                return;
            }
            let file_size = file.size() as usize;
            if file_size > MAX_IMAGE_SIZE {
                notify.emit(Toast::error(format!(
                    "File is too large ({:.1}MB). Maximum size is 1MB.",
                    file_size as f64 / 1_048_576.0
                )));
                return;
            }
            let Ok(reader) = FileReader::new() else {
                notify.emit(Toast::error("Could not read the file"));
                return;
            };

            on_action.emit(ImageAction::UploadStarted);

            let file_name = file.name();
            let mime_type = file.type_();
            let onload = {
                let on_action = on_action.clone();
                let notify = notify.clone();
                let reader = reader.clone();
                Closure::once(move |_: Event| {
                    let Ok(result) = reader.result() else {
                        on_action.emit(ImageAction::UploadFinished(None));
                        notify.emit(Toast::error("Could not read the file"));
                        return;
                    };
                    let data = js_sys::Uint8Array::new(&result).to_vec();
                    on_action.emit(ImageAction::Preview(format!(
                        "data:{mime_type};base64,{}",
                        general_purpose::STANDARD.encode(&data)
                    )));
                    upload(file_name, data, on_action, notify);
                })
            };

            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            if reader.read_as_array_buffer(&file).is_err() {
                on_action.emit(ImageAction::UploadFinished(None));
                notify.emit(Toast::error("Could not read the file"));
                return;
            }
            onload.forget();
        })
    };

    let on_delete = {
        let image = props.image.clone();
        let on_action = props.on_action.clone();
        let notify = props.notify.clone();

        Callback::from(move |_: MouseEvent| {
            let image_key = match image.clone().begin_delete() {
                Ok(image_key) => image_key,
                // the button is disabled while busy
                Err(DeleteRefused::Busy) => return,
                Err(refused) => {
                    notify.emit(Toast::error(format!("Could not remove image: {refused}")));
                    return;
                }
            };
            on_action.emit(ImageAction::DeleteStarted);

            let on_action = on_action.clone();
            let notify = notify.clone();
            yew::platform::spawn_local(async move {
                let request = requests::DeleteImage { image_key };
                match get_api_client().delete_image(&request).await {
                    Ok(result) => {
                        // The server no longer holds an image of ours under
                        // this key either way, so the reference can go.
                        on_action.emit(ImageAction::DeleteFinished(true));
                        if result.success {
                            notify.emit(Toast::success("Image removed"));
                        } else {
                            notify.emit(Toast::error(
                                "Image was not found on the server; cleared it from the form",
                            ));
                        }
                    }
                    Err(e) => {
                        on_action.emit(ImageAction::DeleteFinished(false));
                        notify.emit(Toast::error(format!("Could not remove image: {e}")));
                    }
                }
            });
        })
    };

    let on_pick = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let image = &props.image;
    let shown = image.shown().map(str::to_string);

    html! {
        <div class="space-y-2">
            <span class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Image"}</span>
            if let Some(src) = shown {
                <img
                    {src}
                    alt="Uploaded image"
                    class={classes!("w-full", "max-w-md", "h-48", "object-cover", "rounded-md", image.is_busy().then_some("opacity-50"))}
                />
            }
            <input
                ref={file_input_ref}
                type="file"
                accept="image/*"
                class="hidden"
                onchange={on_file_select}
            />
            <div class="flex gap-2">
                if image.url().is_empty() {
                    <button
                        type="button"
                        class="px-4 py-2 rounded-md text-sm border border-dashed border-neutral-400 disabled:opacity-50"
                        disabled={!image.can_attach()}
                        onclick={on_pick}
                    >
                        {if image.is_busy() { "Uploading..." } else { "Upload image" }}
                    </button>
                } else {
                    <button
                        type="button"
                        class={BUTTON_DANGER}
                        disabled={image.is_busy()}
                        onclick={on_delete}
                    >
                        {if image.is_busy() { "Removing..." } else { "Remove image" }}
                    </button>
                }
            </div>
            <FieldError message={props.error.clone()} />
        </div>
    }
}
