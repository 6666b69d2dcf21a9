//! Account creation page (`/signup`).

use barbershop::validation::{FieldErrors, SignUpForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::SubmitButton;
use crate::components::input::TextField;
use crate::pages::feedback::failure_toast;
use crate::state::auth::use_auth;
use crate::state::toast::{ToastMessage, use_toasts};
use crate::util::task::spawn;

pub const SIGN_UP_DONE: &str = "Account created!";
pub const SIGN_UP_DONE_HINT: &str = "You can now sign in.";
pub const SIGN_UP_FAILED: &str = "Sign up error";
pub const SIGN_UP_FAILED_HINT: &str = "An error has occurred while creating your account. Try again.";

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form =
            SignUpForm { name: name.get_untracked(), email: email.get_untracked(), password: password.get_untracked() };
        let request = match form.validate() {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        let auth = auth.clone();
        let navigate = navigate.clone();
        spawn(async move {
            match auth.sign_up(&request).await {
                Ok(()) => {
                    toasts.push(ToastMessage::success(SIGN_UP_DONE).with_description(SIGN_UP_DONE_HINT));
                    navigate("/", NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("sign-up failed: {err}");
                    toasts.push(failure_toast(SIGN_UP_FAILED, SIGN_UP_FAILED_HINT, &err));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page auth-page--reversed">
            <div class="auth-background"></div>
            <div class="auth-card">
                <span class="logo">"Barbershop"</span>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <h1>"Create an account"</h1>
                    <TextField name="name" placeholder="Name" value=name errors=errors/>
                    <TextField name="email" placeholder="E-mail" value=email errors=errors/>
                    <TextField
                        name="password"
                        placeholder="Password"
                        input_type="password"
                        value=password
                        errors=errors
                    />
                    <SubmitButton label="Sign up" loading=busy/>
                </form>
                <A href="/" attr:class="auth-card__alt">
                    "Back to Log in"
                </A>
            </div>
        </div>
    }
}
