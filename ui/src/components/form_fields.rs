//! Labelled inputs shared by the hotel and room forms.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const INPUT_CLASSES: &str = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
     rounded-md shadow-sm bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100 \
     focus:outline-none focus:ring-2 focus:ring-neutral-500 disabled:opacity-50";

const LABEL_CLASSES: &str =
    "block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2";

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    pub message: Option<String>,
}

#[function_component]
pub fn FieldError(props: &FieldErrorProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <p class="mt-1 text-sm text-red-600 dark:text-red-400">{message}</p>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    /// Render a textarea instead of a single line input.
    #[prop_or_default]
    pub multiline: bool,
}

#[function_component]
pub fn TextField(props: &TextFieldProps) -> Html {
    let input = if props.multiline {
        let on_change = props.on_change.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(area.value());
        });
        html! {
            <textarea
                id={props.id.clone()}
                rows="4"
                class={INPUT_CLASSES}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
            />
        }
    } else {
        let on_change = props.on_change.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        });
        html! {
            <input
                id={props.id.clone()}
                type="text"
                class={INPUT_CLASSES}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
            />
        }
    };

    html! {
        <div>
            <label for={props.id.clone()} class={LABEL_CLASSES}>{&props.label}</label>
            {input}
            <FieldError message={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NumberFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: i64,
    pub on_change: Callback<i64>,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Anything that does not parse as a whole number counts as 0.
#[function_component]
pub fn NumberField(props: &NumberFieldProps) -> Html {
    let on_change = props.on_change.clone();
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(input.value().trim().parse().unwrap_or(0));
    });

    html! {
        <div>
            <label for={props.id.clone()} class={LABEL_CLASSES}>{&props.label}</label>
            <input
                id={props.id.clone()}
                type="number"
                min="0"
                class={INPUT_CLASSES}
                value={props.value.to_string()}
                {oninput}
            />
            <FieldError message={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckboxProps {
    pub label: AttrValue,
    pub checked: bool,
    pub on_toggle: Callback<bool>,
}

#[function_component]
pub fn Checkbox(props: &CheckboxProps) -> Html {
    let on_toggle = props.on_toggle.clone();
    let onchange = Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_toggle.emit(input.checked());
    });

    html! {
        <label class="flex items-center gap-2 text-sm text-neutral-700 dark:text-neutral-300">
            <input type="checkbox" checked={props.checked} {onchange} />
            {&props.label}
        </label>
    }
}

pub(crate) const BUTTON_PRIMARY: &str = "px-4 py-2 rounded-md text-sm font-medium text-white \
     bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 \
     dark:hover:bg-neutral-200 disabled:opacity-50 disabled:cursor-not-allowed transition-colors";

pub(crate) const BUTTON_SECONDARY: &str = "px-4 py-2 rounded-md text-sm font-medium \
     border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300 \
     hover:bg-neutral-50 dark:hover:bg-neutral-700 disabled:opacity-50 disabled:cursor-not-allowed";

pub(crate) const BUTTON_DANGER: &str = "px-4 py-2 rounded-md text-sm font-medium text-white \
     bg-red-600 hover:bg-red-700 disabled:opacity-50 disabled:cursor-not-allowed";
