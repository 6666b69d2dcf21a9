//! Root application component with routing and context providers.

use barbershop::guard::Page;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::Guarded;
use crate::components::toast_container::ToastContainer;
use crate::pages::{
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, profile::ProfilePage,
    reset_password::ResetPasswordPage, sign_in::SignInPage, sign_up::SignUpPage,
};
use crate::state::auth::AuthProvider;
use crate::state::toast::provide_toasts;

/// Root application component.
///
/// Provides the auth and toast contexts and sets up client-side routing.
/// Every route renders through [`Guarded`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toasts();

    view! {
        <Title text="Barbershop"/>

        <AuthProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Guarded page=Page::SignIn><SignInPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("signup")
                        view=|| view! { <Guarded page=Page::SignUp><SignUpPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("forgot-password")
                        view=|| view! { <Guarded page=Page::ForgotPassword><ForgotPasswordPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("reset-password")
                        view=|| view! { <Guarded page=Page::ResetPassword><ResetPasswordPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <Guarded page=Page::Dashboard><DashboardPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <Guarded page=Page::Profile><ProfilePage/></Guarded> }
                    />
                </Routes>
            </Router>
            <ToastContainer/>
        </AuthProvider>
    }
}
