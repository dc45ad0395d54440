//! Feed Context
//!
//! Shared feed state and reload triggers provided via Leptos Context API.

use leptos::prelude::*;

use crate::feed::FeedState;

/// Feed-wide signals provided via context
#[derive(Clone, Copy)]
pub struct FeedContext {
    /// Listing state shared by the feed widgets
    pub feed: RwSignal<FeedState>,
    /// Trigger to refetch the identifier list - read
    pub ids_trigger: ReadSignal<u32>,
    /// Trigger to refetch the identifier list - write
    set_ids_trigger: WriteSignal<u32>,
    /// Trigger to refetch the current page - read
    pub page_trigger: ReadSignal<u32>,
    /// Trigger to refetch the current page - write
    set_page_trigger: WriteSignal<u32>,
}

impl FeedContext {
    pub fn new(
        feed: RwSignal<FeedState>,
        ids_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        page_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            feed,
            ids_trigger: ids_trigger.0,
            set_ids_trigger: ids_trigger.1,
            page_trigger: page_trigger.0,
            set_page_trigger: page_trigger.1,
        }
    }

    /// Repeat whichever fetch step is missing: the id list, else the current page
    pub fn retry(&self) {
        if self.feed.with_untracked(|f| f.needs_ids()) {
            self.set_ids_trigger.update(|v| *v += 1);
        } else {
            self.set_page_trigger.update(|v| *v += 1);
        }
    }

    /// Switch page; out-of-range pages are ignored
    pub fn go_to_page(&self, page: usize) {
        self.feed.update(|f| {
            f.go_to_page(page);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_context() -> FeedContext {
        FeedContext::new(RwSignal::new(FeedState::new(10)), signal(0u32), signal(0u32))
    }

    #[test]
    fn test_retry_refetches_ids_until_loaded() {
        Owner::new().with(|| {
            let ctx = make_context();

            ctx.retry();
            assert_eq!(ctx.ids_trigger.get_untracked(), 1);
            assert_eq!(ctx.page_trigger.get_untracked(), 0);

            ctx.feed.update(|f| f.finish_ids_load(Ok((1..=30).collect())));
            ctx.retry();
            assert_eq!(ctx.ids_trigger.get_untracked(), 1);
            assert_eq!(ctx.page_trigger.get_untracked(), 1);
        });
    }

    #[test]
    fn test_go_to_page_ignores_out_of_range() {
        Owner::new().with(|| {
            let ctx = make_context();
            ctx.feed.update(|f| f.finish_ids_load(Ok((1..=30).collect())));

            ctx.go_to_page(3);
            assert_eq!(ctx.feed.with_untracked(|f| f.current_page), 3);
            ctx.go_to_page(4);
            ctx.go_to_page(0);
            assert_eq!(ctx.feed.with_untracked(|f| f.current_page), 3);
        });
    }
}
