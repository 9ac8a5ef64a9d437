//! Application state.
//!
//! `AppState` is the router state; the `FromRef` implementation lets
//! handlers extract the store handle directly instead of taking the whole
//! state, following Axum's recommended pattern.

use axum::extract::FromRef;

use crate::store::Store;

/// State shared by every handler.
///
/// The store handle is the only shared resource; it is cheap to clone and
/// internally thread-safe, so the state carries no locks.
#[derive(Clone)]
pub struct AppState {
    /// Document-store handle
    pub store: Store,
}

impl FromRef<AppState> for Store {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}
