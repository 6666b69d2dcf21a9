//! Sign-in page (`/`).

use barbershop::validation::{FieldErrors, SignInForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::button::SubmitButton;
use crate::components::input::TextField;
use crate::pages::feedback::failure_toast;
use crate::state::auth::use_auth;
use crate::state::toast::use_toasts;
use crate::util::task::spawn;

pub const SIGN_IN_FAILED: &str = "Authentication error";
pub const SIGN_IN_FAILED_HINT: &str = "An error has occurred while signing in. Check your credentials.";

/// Successful sign-in needs no navigation: the guard on this public route
/// redirects to the dashboard once the session exists.
#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignInForm { email: email.get_untracked(), password: password.get_untracked() };
        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        let auth = auth.clone();
        spawn(async move {
            if let Err(err) = auth.sign_in(&credentials).await {
                log::warn!("sign-in failed: {err}");
                toasts.push(failure_toast(SIGN_IN_FAILED, SIGN_IN_FAILED_HINT, &err));
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <span class="logo">"Barbershop"</span>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <h1>"Sign in"</h1>
                    <TextField name="email" placeholder="E-mail" value=email errors=errors/>
                    <TextField
                        name="password"
                        placeholder="Password"
                        input_type="password"
                        value=password
                        errors=errors
                    />
                    <SubmitButton label="Log in" loading=busy/>
                    <A href="/forgot-password">"Forgot password"</A>
                </form>
                <A href="/signup" attr:class="auth-card__alt">
                    "Create account"
                </A>
            </div>
            <div class="auth-background"></div>
        </div>
    }
}
