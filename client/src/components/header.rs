//! Top bar of signed-in pages: logo, avatar with greeting, sign-out.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use barbershop::types::User;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::use_auth;

/// Two-letter initials shown when the user has no avatar.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Avatar image or initials badge for `user`.
#[component]
pub fn Avatar(user: User, #[prop(optional)] size_class: &'static str) -> impl IntoView {
    match user.avatar_url {
        Some(src) => view! { <img class=format!("avatar {size_class}") src=src alt=user.name/> }.into_any(),
        None => view! { <span class=format!("avatar avatar--initials {size_class}")>{initials(&user.name)}</span> }.into_any(),
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let sign_out = {
        let auth = auth.clone();
        move |_| auth.sign_out()
    };

    view! {
        <header class="header">
            <div class="header__content">
                <span class="logo">"Barbershop"</span>
                {move || {
                    auth.user()
                        .map(|user| {
                            let name = user.name.clone();
                            view! {
                                <div class="header__profile">
                                    <Avatar user=user/>
                                    <div>
                                        <span>"Welcome,"</span>
                                        <A href="/profile">
                                            <strong>{name}</strong>
                                        </A>
                                    </div>
                                </div>
                            }
                        })
                }}
                <button type="button" class="header__sign-out" title="Sign out" on:click=sign_out>
                    "⏻"
                </button>
            </div>
        </header>
    }
}
