//! Auth-session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the `barbershop` session store in a Leptos context. Route guards and
//! user-aware components read the `user` signal; every store operation
//! re-syncs that signal, including the forced sign-out after a 401.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use barbershop::session::{SessionError, SessionStore};
use barbershop::types::{
    Appointment, AvatarUpload, Credentials, DayQuery, ForgotPasswordRequest, MonthAvailabilityItem, MonthQuery,
    ProfileUpdate, ResetPasswordRequest, SignUpRequest, User,
};
use leptos::prelude::*;

use crate::net::api::BrowserApi;
use crate::util::storage::BrowserStorage;

/// Panic message when [`use_auth`] runs outside [`AuthProvider`].
pub const MISSING_PROVIDER: &str = "use_auth must be used within an AuthProvider";

pub type BrowserSession = SessionStore<BrowserStorage, BrowserApi>;

/// Cloneable handle to the session: the reactive user plus its operations.
#[derive(Clone)]
pub struct AuthContext {
    store: Arc<BrowserSession>,
    user: RwSignal<Option<User>>,
}

impl AuthContext {
    pub fn new(store: BrowserSession) -> Self {
        let user = RwSignal::new(store.user());
        Self { store: Arc::new(store), user }
    }

    /// Signed-in user (tracked).
    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    /// Whether anyone is signed in (tracked).
    pub fn is_signed_in(&self) -> bool {
        self.user.with(Option::is_some)
    }

    /// # Errors
    ///
    /// Propagates the session error for the page to toast.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<User, SessionError> {
        let result = self.store.sign_in(credentials).await;
        self.sync();
        result
    }

    pub fn sign_out(&self) {
        self.store.sign_out();
        self.sync();
    }

    /// # Errors
    ///
    /// Fails without a session or when the user entry cannot be written.
    pub fn update_user(&self, user: User) -> Result<(), SessionError> {
        let result = self.store.update_user(user);
        self.sync();
        result
    }

    /// # Errors
    ///
    /// Propagates the session error; a 401 has already signed out.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, SessionError> {
        let result = self.store.update_profile(update).await;
        self.sync();
        result
    }

    /// # Errors
    ///
    /// Propagates the session error; a 401 has already signed out.
    pub async fn update_avatar(&self, upload: &AvatarUpload) -> Result<User, SessionError> {
        let result = self.store.update_avatar(upload).await;
        self.sync();
        result
    }

    /// # Errors
    ///
    /// Propagates the session error; a 401 has already signed out.
    pub async fn month_availability(&self, query: MonthQuery) -> Result<Vec<MonthAvailabilityItem>, SessionError> {
        let result = self.store.month_availability(query).await;
        self.sync();
        result
    }

    /// # Errors
    ///
    /// Propagates the session error; a 401 has already signed out.
    pub async fn day_appointments(&self, query: DayQuery) -> Result<Vec<Appointment>, SessionError> {
        let result = self.store.day_appointments(query).await;
        self.sync();
        result
    }

    /// # Errors
    ///
    /// Propagates the API error.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<(), SessionError> {
        self.store.sign_up(request).await
    }

    /// # Errors
    ///
    /// Propagates the API error.
    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<(), SessionError> {
        self.store.forgot_password(request).await
    }

    /// # Errors
    ///
    /// Propagates the API error.
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), SessionError> {
        self.store.reset_password(request).await
    }

    fn sync(&self) {
        let current = self.store.user();
        if self.user.with_untracked(|u| *u != current) {
            self.user.set(current);
        }
    }
}

/// Hydrate the session from `localStorage` and provide it to descendants.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api = BrowserApi::new(crate::config::api_base_url());
    provide_context(AuthContext::new(SessionStore::new(BrowserStorage, api)));
    children()
}

/// The session handle of the enclosing [`AuthProvider`].
///
/// # Panics
///
/// Panics with [`MISSING_PROVIDER`] when no provider is mounted above the
/// caller; a silent empty session would hide the wiring bug.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| panic!("{MISSING_PROVIDER}"))
}
