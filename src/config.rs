//! Application Configuration
//!
//! Compiled-in settings, provided to components via Leptos context.

use leptos::prelude::*;
use log::LevelFilter;

const HN_API_BASE: &str = "https://hacker-news.firebaseio.com/v0";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL of the read-only listing API
    pub api_base: &'static str,
    /// Identifier list is truncated to this many entries
    pub story_cap: usize,
    pub page_size: usize,
    /// Show every page number up to this many pages, window beyond
    pub max_visible_pages: usize,
    /// Pages shown on each side of the current one in the window
    pub page_siblings: usize,
    pub export_file_name: &'static str,
    pub export_sheet_name: &'static str,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: HN_API_BASE,
            story_cap: 500,
            page_size: 10,
            max_visible_pages: 10,
            page_siblings: 2,
            export_file_name: "form_data.xlsx",
            export_sheet_name: "Form Data",
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
        }
    }
}

/// Get the app config from context, falling back to defaults
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
