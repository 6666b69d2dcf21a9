//! Route guard: which views a signed-in or signed-out visitor may see.
//!
//! ```text
//!    requires auth / signed in
//! 1  true          / true     render
//! 2  true          / false    redirect to sign in
//! 3  false         / true     redirect to dashboard
//! 4  false         / false    render
//! ```

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Where signed-out visitors land.
pub const PUBLIC_ENTRY_PATH: &str = "/";

/// Where signed-in visitors land.
pub const AUTHENTICATED_LANDING_PATH: &str = "/dashboard";

/// Outcome of guarding one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// Decide whether a route that `requires_auth` may render.
#[must_use]
pub fn decide(requires_auth: bool, signed_in: bool) -> GuardDecision {
    if requires_auth == signed_in {
        GuardDecision::Render
    } else if requires_auth {
        GuardDecision::Redirect(PUBLIC_ENTRY_PATH)
    } else {
        GuardDecision::Redirect(AUTHENTICATED_LANDING_PATH)
    }
}

/// Screens of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    SignIn,
    SignUp,
    ForgotPassword,
    ResetPassword,
    Dashboard,
    Profile,
}

/// A declared route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub page: Page,
    pub requires_auth: bool,
}

impl RouteDef {
    const fn public(path: &'static str, page: Page) -> Self {
        Self { path, page, requires_auth: false }
    }

    const fn private(path: &'static str, page: Page) -> Self {
        Self { path, page, requires_auth: true }
    }

    /// Guard this route for the given signed-in state.
    #[must_use]
    pub fn decide(&self, signed_in: bool) -> GuardDecision {
        decide(self.requires_auth, signed_in)
    }
}

pub const ROUTES: [RouteDef; 6] = [
    RouteDef::public(PUBLIC_ENTRY_PATH, Page::SignIn),
    RouteDef::public("/signup", Page::SignUp),
    RouteDef::public("/forgot-password", Page::ForgotPassword),
    RouteDef::public("/reset-password", Page::ResetPassword),
    RouteDef::private(AUTHENTICATED_LANDING_PATH, Page::Dashboard),
    RouteDef::private("/profile", Page::Profile),
];

/// Look up the route declared for `path`.
#[must_use]
pub fn route_for(path: &str) -> Option<RouteDef> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    ROUTES.iter().copied().find(|r| r.path == path)
}

/// Route declared for `page`.
#[must_use]
pub fn route_of(page: Page) -> RouteDef {
    ROUTES.iter().copied().find(|r| r.page == page).unwrap_or(ROUTES[0])
}
