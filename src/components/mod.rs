//! UI Components
//!
//! Leptos components for the story feed and the export form.

mod news_feed;
mod story_row;
mod feed_error_banner;
mod form_exporter;

pub use news_feed::NewsFeed;
pub use story_row::StoryRow;
pub use feed_error_banner::FeedErrorBanner;
pub use form_exporter::FormExporter;
