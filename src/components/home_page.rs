//! Home Page Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="home">
            <h1>"Welcome Home!"</h1>
            <p>"Keep track of what needs doing and save it in this browser."</p>
            <button on:click=move |_| {
                ctx.navigator.navigate(Route::Tasks.path());
            }>
                "Go to Tasks"
            </button>
        </section>
    }
}
