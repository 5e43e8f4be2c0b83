//! Task Board App
//!
//! Root component: wires the task service, navigation and status banner.

use leptos::prelude::*;
use log::error;
use reactive_stores::Store;
use task_core::Hydration;

use crate::components::{HomePage, StatusBanner, TaskListPage};
use crate::context::AppContext;
use crate::models::Notice;
use crate::navigation::Navigator;
use crate::routes::Route;
use crate::service::TaskService;
use crate::store::{store_show_notice, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let (service, hydration) = TaskService::open();
    match hydration {
        Ok(Hydration::Discarded) => {
            store_show_notice(&store, Notice::error("Saved tasks could not be read and were discarded"));
        }
        Ok(_) => {}
        Err(e) => {
            error!("failed to load tasks: {}", e);
            store_show_notice(&store, Notice::error(format!("Could not load saved tasks: {}", e)));
        }
    }
    service.on_save_error(Callback::new(move |message: String| {
        store_show_notice(&store, Notice::error(message));
    }));

    let navigator = Navigator::new(store);
    provide_context(AppContext::new(service, navigator, store));

    view! {
        <div class="app-layout">
            <StatusBanner />
            <main class="main-content">
                {move || match store.route().get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Tasks => view! { <TaskListPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
