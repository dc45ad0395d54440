//! HN Pager Frontend App
//!
//! Page shell mounting the story feed and the export form side by side.

use leptos::prelude::*;

use crate::components::{FormExporter, NewsFeed};
use crate::config::AppConfig;

#[component]
pub fn App() -> impl IntoView {
    // Provide config to all children
    provide_context(AppConfig::default());

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Hacker News"</h1>
            </header>

            <main class="app-layout">
                <NewsFeed />
                <FormExporter />
            </main>
        </div>
    }
}
