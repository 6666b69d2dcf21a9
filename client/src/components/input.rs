//! Text input with focus, filled and error states.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use barbershop::validation::FieldErrors;
use leptos::prelude::*;

/// Container classes for the current input state. An error outranks focus.
pub fn field_class(focused: bool, filled: bool, errored: bool) -> String {
    let mut class = String::from("input");
    if errored {
        class.push_str(" input--error");
    } else if focused {
        class.push_str(" input--focused");
    }
    if focused || filled {
        class.push_str(" input--filled");
    }
    class
}

/// Input bound to `value`; shows the message `errors` holds for `name`.
#[component]
pub fn TextField(
    name: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let filled = RwSignal::new(false);
    let error = move || errors.with(|e| e.get(name));
    let class = move || field_class(focused.get(), filled.get(), error().is_some());

    view! {
        <div class=class>
            <input
                name=name
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:focus=move |_| focused.set(true)
                on:blur=move |_| {
                    focused.set(false);
                    filled.set(!value.with_untracked(String::is_empty));
                }
            />
            <Show when=move || error().is_some()>
                <span class="input__error" title=move || error().unwrap_or_default()>
                    "!"
                </span>
            </Show>
        </div>
    }
}
