//! Application Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Notice;
use crate::navigation::Navigator;
use crate::service::TaskService;
use crate::store::{store_show_notice, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Task collection and derived counts
    pub service: TaskService,
    /// View switching with the unsaved-changes guard
    pub navigator: Navigator,
    store: AppStore,
}

impl AppContext {
    pub fn new(service: TaskService, navigator: Navigator, store: AppStore) -> Self {
        Self { service, navigator, store }
    }

    /// Show a message in the status banner
    pub fn notify(&self, notice: Notice) {
        store_show_notice(&self.store, notice);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
