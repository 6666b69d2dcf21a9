//! Submit button with a loading state.

use leptos::prelude::*;

pub const LOADING_LABEL: &str = "Loading...";

/// Text shown on the button; the label is replaced while `loading`.
pub fn button_label(label: &'static str, loading: bool) -> &'static str {
    if loading { LOADING_LABEL } else { label }
}

/// Submit button that disables itself while a request is in flight.
#[component]
pub fn SubmitButton(label: &'static str, #[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <button
            class="button"
            class:button--loading=move || loading.get()
            type="submit"
            disabled=move || loading.get()
        >
            {move || button_label(label, loading.get())}
        </button>
    }
}
