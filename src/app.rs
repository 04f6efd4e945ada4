//! User List Frontend App
//!
//! Root component.

use leptos::prelude::*;

use crate::components::UserBrowser;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Users"</h1>
                <UserBrowser />
            </main>
        </div>
    }
}
