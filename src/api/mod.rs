//! Listing API
//!
//! Read-only story source, organized by backend.

mod hacker_news;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::Story;

pub use hacker_news::*;

/// Where stories come from.
///
/// Futures are not `Send`: in the browser they run on the single event loop.
#[async_trait(?Send)]
pub trait StorySource {
    /// Ranked identifiers of the current top stories
    async fn top_story_ids(&self) -> Result<Vec<u64>, FetchError>;

    /// Details for one identifier; `None` when the upstream item is gone
    async fn story(&self, id: u64) -> Result<Option<Story>, FetchError>;
}
