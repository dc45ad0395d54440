//! Story Feed State
//!
//! Paginated listing over the top-story identifiers. The identifier list is
//! fetched once; only the current page's stories are fetched, and every page
//! load carries a generation so a late response for a page the user already
//! left cannot overwrite the newer one.

use std::ops::Range;

use futures::future::try_join_all;
use leptos_pager::{is_valid_page, page_bounds, total_pages};

use crate::api::StorySource;
use crate::error::FetchError;
use crate::models::Story;

/// Ids to fetch for one page, tagged with the load generation
#[derive(Clone, Debug, PartialEq)]
pub struct PageRequest {
    pub generation: u64,
    pub ids: Vec<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedState {
    /// Ranked identifiers, capped at load time
    pub story_ids: Vec<u64>,
    /// Stories currently on screen
    pub stories: Vec<Story>,
    /// 1-based
    pub current_page: usize,
    pub page_size: usize,
    pub loading: bool,
    /// Message from the last failed fetch, cleared on the next success
    pub error: Option<String>,
    generation: u64,
}

impl FeedState {
    pub fn new(page_size: usize) -> Self {
        Self {
            story_ids: Vec::new(),
            stories: Vec::new(),
            current_page: 1,
            page_size,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.story_ids.len(), self.page_size)
    }

    /// Index range of the current page inside `story_ids`
    pub fn page_window(&self) -> Range<usize> {
        page_bounds(self.current_page, self.page_size, self.story_ids.len())
    }

    /// Whether the identifier list still has to be fetched
    pub fn needs_ids(&self) -> bool {
        self.story_ids.is_empty()
    }

    /// Switch page. Out-of-range requests are rejected; returns whether the page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if !is_valid_page(page, self.total_pages()) {
            log::warn!("[Feed] Rejected page {} (total {})", page, self.total_pages());
            return false;
        }
        if page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn begin_ids_load(&mut self) {
        self.loading = true;
    }

    /// Commit the identifier fetch; `ids` arrive already capped by `load_story_ids`
    pub fn finish_ids_load(&mut self, result: Result<Vec<u64>, FetchError>) {
        self.loading = false;
        match result {
            Ok(ids) => {
                log::info!("[Feed] Loaded {} story ids", ids.len());
                self.story_ids = ids;
                self.error = None;
                let total = self.total_pages();
                self.current_page = if total == 0 { 1 } else { self.current_page.clamp(1, total) };
            }
            Err(e) => {
                log::error!("[Feed] Error fetching story ids: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Start loading the current page. `None` until identifiers are available.
    pub fn begin_page_load(&mut self) -> Option<PageRequest> {
        if self.story_ids.is_empty() {
            return None;
        }
        self.generation += 1;
        self.loading = true;
        Some(PageRequest {
            generation: self.generation,
            ids: self.story_ids[self.page_window()].to_vec(),
        })
    }

    /// Commit a page load. Returns false when the result was superseded and dropped.
    pub fn finish_page_load(&mut self, generation: u64, result: Result<Vec<Story>, FetchError>) -> bool {
        if generation != self.generation {
            log::debug!("[Feed] Dropping stale page load {} (current {})", generation, self.generation);
            return false;
        }
        self.loading = false;
        match result {
            Ok(stories) => {
                log::debug!("[Feed] Page {} loaded with {} stories", self.current_page, stories.len());
                self.stories = stories;
                self.error = None;
            }
            Err(e) => {
                log::error!("[Feed] Error fetching page {}: {}", self.current_page, e);
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// 1-based inclusive bounds of the visible stories, `(0, 0)` when empty
    pub fn showing_range(&self) -> (usize, usize) {
        let window = self.page_window();
        if window.is_empty() {
            return (0, 0);
        }
        (window.start + 1, window.end)
    }
}

/// Fetch the ranked identifiers, keeping at most `cap`
pub async fn load_story_ids<S: StorySource + ?Sized>(source: &S, cap: usize) -> Result<Vec<u64>, FetchError> {
    let mut ids = source.top_story_ids().await?;
    ids.truncate(cap);
    Ok(ids)
}

/// Fetch all stories for one page concurrently; any failure fails the page.
///
/// Stories come back in the order of `ids`. Items the upstream no longer has are skipped.
pub async fn load_page<S: StorySource + ?Sized>(source: &S, ids: &[u64]) -> Result<Vec<Story>, FetchError> {
    let fetched = try_join_all(ids.iter().map(|&id| source.story(id))).await?;
    let missing = fetched.iter().filter(|story| story.is_none()).count();
    if missing > 0 {
        log::warn!("[Feed] {} of {} stories no longer exist", missing, ids.len());
    }
    Ok(fetched.into_iter().flatten().collect())
}
