//! Toast notifications shown in the top-right corner.
//!
//! DESIGN
//! ======
//! Pages push messages through [`ToastHandle`]; the container renders them and
//! schedules their removal. Removal is by id so a late timer for an already
//! closed toast is a no-op.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;
use uuid::Uuid;

/// Lifetime of a toast before it dismisses itself.
pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), kind, title: title.into(), description: None }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title)
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title)
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub messages: Vec<ToastMessage>,
}

impl ToastState {
    /// Append `message` and return its id.
    pub fn add(&mut self, message: ToastMessage) -> Uuid {
        let id = message.id;
        self.messages.push(message);
        id
    }

    /// Drop the toast with `id`, if still shown.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        self.messages.len() != before
    }
}

/// Context handle over the shared [`ToastState`].
#[derive(Clone, Copy)]
pub struct ToastHandle {
    state: RwSignal<ToastState>,
}

impl ToastHandle {
    pub fn new() -> Self {
        Self { state: RwSignal::new(ToastState::default()) }
    }

    pub fn push(&self, message: ToastMessage) -> Uuid {
        log::debug!("toast: {:?} {}", message.kind, message.title);
        let mut id = message.id;
        self.state.update(|s| id = s.add(message));
        id
    }

    pub fn remove(&self, id: Uuid) {
        self.state.update(|s| {
            s.remove(id);
        });
    }

    /// Current messages (tracked).
    pub fn messages(&self) -> Vec<ToastMessage> {
        self.state.with(|s| s.messages.clone())
    }
}

impl Default for ToastHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> ToastHandle {
    let handle = ToastHandle::new();
    provide_context(handle);
    handle
}

/// The toast handle provided at the app root.
///
/// # Panics
///
/// Panics when called outside the app root's context.
pub fn use_toasts() -> ToastHandle {
    use_context::<ToastHandle>().unwrap_or_else(|| panic!("use_toasts must be used within the app root"))
}
