//! Status Banner Component
//!
//! Shows the current notice from the app store, if any.

use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_app_store();

    move || {
        store.notice().get().map(|notice| {
            let class = notice.css_class();
            view! {
                <div class=class role="status">
                    <span class="status-message">{notice.message}</span>
                    <button class="dismiss-btn" on:click=move |_| store_dismiss_notice(&store)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
