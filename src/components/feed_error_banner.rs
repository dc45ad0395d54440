//! Feed Error Banner Component
//!
//! Shows the last fetch failure with a manual retry.

use leptos::prelude::*;

use crate::context::FeedContext;

#[component]
pub fn FeedErrorBanner() -> impl IntoView {
    let ctx = use_context::<FeedContext>().expect("FeedContext should be provided");

    let error = move || ctx.feed.with(|f| f.error.clone());
    let busy = move || ctx.feed.with(|f| f.loading);

    view! {
        {move || error().map(|message| view! {
            <div class="feed-error" role="alert">
                <span class="feed-error-text">"Could not load stories: " {message}</span>
                <button
                    class="retry-btn"
                    disabled=busy
                    on:click=move |_| ctx.retry()
                >
                    "Retry"
                </button>
            </div>
        })}
    }
}
