//! Route wrapper enforcing the public/private split.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route in `app` renders through [`Guarded`]. The decision itself is
//! `barbershop::guard`; this component re-evaluates it whenever the auth
//! user changes, so a sign-out on a private page redirects immediately.

use barbershop::guard::{GuardDecision, Page, route_of};
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::use_auth;

#[component]
pub fn Guarded(page: Page, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let route = route_of(page);

    move || match route.decide(auth.is_signed_in()) {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(to) => {
            log::debug!("guard: {} -> {to}", route.path);
            view! { <Redirect path=to/> }.into_any()
        }
    }
}
