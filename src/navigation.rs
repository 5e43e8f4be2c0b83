//! Navigation
//!
//! Switches between views, consulting the active view's deactivation
//! hook before leaving it.

use std::sync::Arc;

use leptos::prelude::*;
use log::{debug, info, warn};
use task_core::{unsaved_changes_guard, CanDeactivate, Confirm};

use crate::routes::Route;
use crate::storage::BrowserConfirm;
use crate::store::{store_set_route, AppStateStoreFields, AppStore};

/// Deactivation hook registered by the active view
pub type DeactivationHook = Arc<dyn CanDeactivate + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Navigated(Route),
    /// Already on the requested route
    Stayed,
    /// The user chose to stay on the current view
    Blocked,
    UnknownRoute,
}

#[derive(Clone, Copy)]
pub struct Navigator {
    store: AppStore,
    hook: StoredValue<Option<DeactivationHook>>,
}

impl Navigator {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            hook: StoredValue::new(None),
        }
    }

    /// Register the hook consulted before leaving the current view
    pub fn set_deactivation_hook(&self, hook: DeactivationHook) {
        self.hook.set_value(Some(hook));
    }

    pub fn clear_deactivation_hook(&self) {
        self.hook.set_value(None);
    }

    pub fn navigate(&self, path: &str) -> NavigationOutcome {
        self.navigate_with(path, &BrowserConfirm)
    }

    pub fn navigate_with(&self, path: &str, prompt: &dyn Confirm) -> NavigationOutcome {
        let Some(target) = Route::from_path(path) else {
            warn!("no route for '{}'", path);
            return NavigationOutcome::UnknownRoute;
        };
        if self.store.route().get_untracked() == target {
            return NavigationOutcome::Stayed;
        }

        let allowed = self.hook.with_value(|hook| {
            unsaved_changes_guard(hook.as_deref().map(|h| h as &dyn CanDeactivate), prompt)
        });
        if !allowed {
            info!("navigation to {} cancelled", target.path());
            return NavigationOutcome::Blocked;
        }

        debug!("navigating to {}", target.path());
        self.clear_deactivation_hook();
        store_set_route(&self.store, target);
        NavigationOutcome::Navigated(target)
    }
}
