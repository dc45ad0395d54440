//! News Feed Component
//!
//! Paginated top-story listing. Loads the identifier list once, then the
//! stories of whichever page is current.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_pager::Pager;

use crate::api::HnClient;
use crate::components::{FeedErrorBanner, StoryRow};
use crate::config::use_config;
use crate::context::FeedContext;
use crate::feed::{load_page, load_story_ids, FeedState};

#[component]
pub fn NewsFeed() -> impl IntoView {
    let config = use_config();

    let feed = RwSignal::new(FeedState::new(config.page_size));
    let (ids_trigger, set_ids_trigger) = signal(0u32);
    let (page_trigger, set_page_trigger) = signal(0u32);
    let ctx = FeedContext::new(feed, (ids_trigger, set_ids_trigger), (page_trigger, set_page_trigger));
    provide_context(ctx);

    // Load identifiers on mount and on retry
    Effect::new(move |_| {
        let attempt = ctx.ids_trigger.get();
        log::debug!("[NewsFeed] Loading story ids, attempt={}", attempt);
        feed.update(|f| f.begin_ids_load());
        spawn_local(async move {
            let client = HnClient::new(config.api_base);
            let result = load_story_ids(&client, config.story_cap).await;
            feed.update(|f| f.finish_ids_load(result));
        });
    });

    let current_page = Memo::new(move |_| feed.with(|f| f.current_page));
    let id_count = Memo::new(move |_| feed.with(|f| f.story_ids.len()));
    let total_pages = Memo::new(move |_| feed.with(|f| f.total_pages()));

    // Load the current page whenever it changes, once ids exist
    Effect::new(move |_| {
        let page = current_page.get();
        let _ = id_count.get();
        let _ = ctx.page_trigger.get();

        let mut request = None;
        feed.update(|f| request = f.begin_page_load());
        let Some(request) = request else { return };

        log::debug!("[NewsFeed] Loading page {} ({} stories), generation={}", page, request.ids.len(), request.generation);
        spawn_local(async move {
            let client = HnClient::new(config.api_base);
            let result = load_page(&client, &request.ids).await;
            feed.update(|f| {
                f.finish_page_load(request.generation, result);
            });
        });
    });

    view! {
        <section class="news-feed">
            <Show when=move || feed.with(|f| f.loading)>
                <p class="loading">"Loading..."</p>
            </Show>

            <FeedErrorBanner />

            <div class="story-list">
                <For
                    each=move || feed.with(|f| f.stories.clone())
                    key=|story| story.id
                    children=move |story| view! { <StoryRow story=story /> }
                />
            </div>

            <Pager
                current_page=Signal::derive(move || current_page.get())
                total_pages=Signal::derive(move || total_pages.get())
                on_change=Callback::new(move |page: usize| ctx.go_to_page(page))
                max_visible=config.max_visible_pages
                siblings=config.page_siblings
            />

            <FeedStatus />
        </section>
    }
}

/// "Page X of Y | Showing a-b of n stories"
#[component]
fn FeedStatus() -> impl IntoView {
    let ctx = use_context::<FeedContext>().expect("FeedContext should be provided");

    let status = move || {
        ctx.feed.with(|f| {
            let (first, last) = f.showing_range();
            format!(
                "Page {} of {} | Showing {}-{} of {} stories",
                f.current_page,
                f.total_pages(),
                first,
                last,
                f.story_ids.len()
            )
        })
    };

    view! {
        <div class="feed-status">
            <small>{status}</small>
        </div>
    }
}
