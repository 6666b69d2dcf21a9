//! Auth session store: who is signed in, and with which credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single source of truth for the signed-in user. It keeps three things in
//! step: the in-memory session, the two persistent entries, and the credential
//! attached to authenticated API calls. Route guards and pages only ever see
//! the [`User`]; the token never leaves this module.
//!
//! ORDERING
//! ========
//! Every sign-out and every committed sign-in bumps a generation counter. A
//! response that resolves under a newer generation than the one its request
//! was issued under is dropped: a sign-in does not resurrect the session, a
//! profile or avatar update does not overwrite another session's user, and a
//! 401 does not sign out the newer session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::api::{Api, ApiError, Credential, month_availability_path};
use crate::storage::{KeyValueStore, StorageError, TOKEN_KEY, USER_KEY};
use crate::types::{
    Appointment, AvatarUpload, Credentials, DayQuery, ForgotPasswordRequest, MonthAvailabilityItem, MonthQuery,
    ProfileUpdate, ResetPasswordRequest, SignUpRequest, User,
};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("user encode failed: {0}")]
    Encode(#[from] serde_json::Error),
    /// The operation needs a signed-in session and there is none.
    #[error("not signed in")]
    NotSignedIn,
    /// The server rejected the credential; the session has been cleared.
    #[error("session expired")]
    Expired,
    /// The session changed while this request was in flight.
    #[error("request superseded by a session change")]
    Superseded,
}

impl SessionError {
    /// Short text suitable for a toast description.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(err) => err.user_message(),
            Self::Expired => "Your session has expired. Sign in again.".to_owned(),
            Self::NotSignedIn => "You need to sign in first.".to_owned(),
            Self::Storage(_) | Self::Encode(_) => "Could not save your session on this device.".to_owned(),
            Self::Superseded => "Your session changed. Try again.".to_owned(),
        }
    }
}

/// Token and user, always held together.
#[derive(Clone, Debug)]
struct SignedIn {
    credential: Credential,
    user: User,
}

/// Session store over a persistent store `S` and an API transport `A`.
pub struct SessionStore<S, A> {
    storage: S,
    api: A,
    state: Mutex<Option<SignedIn>>,
    generation: AtomicU64,
}

impl<S, A> SessionStore<S, A>
where
    S: KeyValueStore,
    A: Api,
{
    /// Build the store and hydrate it from `storage`. No network call is made.
    pub fn new(storage: S, api: A) -> Self {
        let state = hydrate(&storage);
        if let Some(signed_in) = &state {
            tracing::debug!(user_id = %signed_in.user.id, "session restored from storage");
        }
        Self { storage, api, state: Mutex::new(state), generation: AtomicU64::new(0) }
    }

    /// Transport used by this store.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Persistent store used by this store.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.lock_state().as_ref().map(|s| s.user.clone())
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.lock_state().is_some()
    }

    /// Exchange `credentials` for a token and make it the active session.
    ///
    /// # Errors
    ///
    /// Propagates transport and non-2xx failures, storage write failures, and
    /// returns [`SessionError::Superseded`] when the session changed meanwhile.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<User, SessionError> {
        let generation = self.generation.load(Ordering::SeqCst);
        let response = self.api.create_session(credentials).await?;

        let mut state = self.lock_state();
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::info!("discarding sign-in response that resolved after the session changed");
            return Err(SessionError::Superseded);
        }

        self.generation.fetch_add(1, Ordering::SeqCst);
        let signed_in = SignedIn { credential: Credential::bearer(response.token), user: response.user };
        if let Err(err) = self.persist(&signed_in) {
            *state = None;
            return Err(err);
        }
        tracing::info!(user_id = %signed_in.user.id, "signed in");

        let user = signed_in.user.clone();
        *state = Some(signed_in);
        Ok(user)
    }

    /// Clear the session and both persistent entries. Always succeeds; a
    /// failing removal is logged.
    pub fn sign_out(&self) {
        let mut state = self.lock_state();
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.clear_persisted();
        if state.take().is_some() {
            tracing::info!("signed out");
        }
    }

    /// Replace the signed-in user, keeping the token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotSignedIn`] without a session, or the
    /// encode/storage error when the user entry cannot be rewritten.
    pub fn update_user(&self, user: User) -> Result<(), SessionError> {
        let mut state = self.lock_state();
        self.write_user(&mut state, user)
    }

    /// `PUT profile`, then adopt the returned user.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::update_user`]; a 401 signs out and returns
    /// [`SessionError::Expired`]. A response that resolves after the session
    /// changed is dropped with [`SessionError::Superseded`].
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, SessionError> {
        let (credential, _, generation) = self.authorize()?;
        let result = self.api.update_profile(&credential, update).await;
        let user = self.settle(result, generation)?;
        self.adopt_user(user.clone(), generation)?;
        Ok(user)
    }

    /// `PATCH /users/avatar`, then adopt the returned user.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::update_profile`].
    pub async fn update_avatar(&self, upload: &AvatarUpload) -> Result<User, SessionError> {
        let (credential, _, generation) = self.authorize()?;
        let result = self.api.update_avatar(&credential, upload).await;
        let user = self.settle(result, generation)?;
        self.adopt_user(user.clone(), generation)?;
        Ok(user)
    }

    /// Availability of the signed-in provider for one month.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotSignedIn`], [`SessionError::Expired`] on 401, or the
    /// API error.
    pub async fn month_availability(&self, query: MonthQuery) -> Result<Vec<MonthAvailabilityItem>, SessionError> {
        let (credential, provider_id, generation) = self.authorize()?;
        tracing::debug!(path = %month_availability_path(&provider_id), year = query.year, month = query.month, "fetching availability");
        let result = self.api.month_availability(&credential, &provider_id, query).await;
        self.settle(result, generation)
    }

    /// Appointments of the signed-in provider on one day.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::month_availability`].
    pub async fn day_appointments(&self, query: DayQuery) -> Result<Vec<Appointment>, SessionError> {
        let (credential, _, generation) = self.authorize()?;
        let result = self.api.day_appointments(&credential, query).await;
        self.settle(result, generation)
    }

    /// `POST /users`. Does not sign in.
    ///
    /// # Errors
    ///
    /// Propagates the API error.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<(), SessionError> {
        self.api.create_user(request).await?;
        tracing::info!("account created");
        Ok(())
    }

    /// `POST /password/forgot`.
    ///
    /// # Errors
    ///
    /// Propagates the API error.
    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<(), SessionError> {
        Ok(self.api.forgot_password(request).await?)
    }

    /// `POST /password/reset`.
    ///
    /// # Errors
    ///
    /// Propagates the API error.
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), SessionError> {
        Ok(self.api.reset_password(request).await?)
    }

    fn lock_state(&self) -> MutexGuard<'_, Option<SignedIn>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the credential, the user id and the current generation.
    fn authorize(&self) -> Result<(Credential, String, u64), SessionError> {
        let state = self.lock_state();
        let signed_in = state.as_ref().ok_or(SessionError::NotSignedIn)?;
        Ok((signed_in.credential.clone(), signed_in.user.id.clone(), self.generation.load(Ordering::SeqCst)))
    }

    /// Map an authenticated call's result, signing out on 401.
    fn settle<T>(&self, result: Result<T, ApiError>, generation: u64) -> Result<T, SessionError> {
        match result {
            Err(ApiError::Unauthorized) => {
                if self.generation.load(Ordering::SeqCst) == generation {
                    tracing::warn!("credential rejected by server, signing out");
                    self.sign_out();
                }
                Err(SessionError::Expired)
            }
            other => Ok(other?),
        }
    }

    /// Adopt `user` only if the session is still the one the request ran under.
    fn adopt_user(&self, user: User, generation: u64) -> Result<(), SessionError> {
        let mut state = self.lock_state();
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::info!(user_id = %user.id, "discarding user update that resolved after the session changed");
            return Err(SessionError::Superseded);
        }
        self.write_user(&mut state, user)
    }

    fn write_user(&self, state: &mut Option<SignedIn>, user: User) -> Result<(), SessionError> {
        let Some(signed_in) = state.as_mut() else {
            return Err(SessionError::NotSignedIn);
        };
        let raw = serde_json::to_string(&user)?;
        self.storage.set_item(USER_KEY, &raw)?;
        signed_in.user = user;
        Ok(())
    }

    /// Write both entries. On partial failure both are removed.
    fn persist(&self, signed_in: &SignedIn) -> Result<(), SessionError> {
        let raw_user = serde_json::to_string(&signed_in.user)?;
        let written = self
            .storage
            .set_item(TOKEN_KEY, signed_in.credential.token())
            .and_then(|()| self.storage.set_item(USER_KEY, &raw_user));
        if let Err(err) = written {
            tracing::warn!(error = %err, "session write failed, clearing stored session");
            self.clear_persisted();
            return Err(err.into());
        }
        Ok(())
    }

    fn clear_persisted(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(err) = self.storage.remove_item(key) {
                tracing::warn!(key, error = %err, "failed to remove stored session entry");
            }
        }
    }
}

/// Rebuild the session from the two persistent entries.
fn hydrate<S: KeyValueStore>(storage: &S) -> Option<SignedIn> {
    let token = storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty())?;
    let raw_user = storage.get_item(USER_KEY).filter(|u| !u.is_empty())?;
    match serde_json::from_str::<User>(&raw_user) {
        Ok(user) => Some(SignedIn { credential: Credential::bearer(token), user }),
        Err(err) => {
            tracing::warn!(error = %err, "stored user is unreadable, starting signed out");
            None
        }
    }
}
