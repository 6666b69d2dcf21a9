//! Fire-and-forget async work on the UI thread.

use std::future::Future;

/// Run `future` on the browser's microtask queue.
///
/// Native builds have no event loop to run it on and drop it unpolled.
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(future);
    #[cfg(not(feature = "csr"))]
    drop(future);
}
