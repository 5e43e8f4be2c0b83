//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Notice;
use crate::routes::Route;

/// How long a notice stays on screen
const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// App-wide UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Currently displayed view
    pub route: Route,
    /// Message shown in the status banner
    pub notice: Option<Notice>,
    /// Incremented per notice so an older dismiss timer leaves a newer notice alone
    pub notice_seq: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a notice and schedule its dismissal
pub fn store_show_notice(store: &AppStore, notice: Notice) {
    *store.notice_seq().write() += 1;
    *store.notice().write() = Some(notice);

    let store = *store;
    let seq = store.notice_seq().get_untracked();
    Timeout::new(NOTICE_TIMEOUT_MS, move || {
        if store.notice_seq().get_untracked() == seq {
            store_dismiss_notice(&store);
        }
    })
    .forget();
}

pub fn store_dismiss_notice(store: &AppStore) {
    *store.notice().write() = None;
}

/// Switch the displayed view
pub fn store_set_route(store: &AppStore, route: Route) {
    *store.route().write() = route;
}
