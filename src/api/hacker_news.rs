//! Hacker News Client
//!
//! `StorySource` backed by the public Firebase JSON API.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::StorySource;
use crate::error::FetchError;
use crate::models::Story;

pub fn top_stories_url(base: &str) -> String {
    format!("{}/topstories.json", base.trim_end_matches('/'))
}

pub fn item_url(base: &str, id: u64) -> String {
    format!("{}/item/{}.json", base.trim_end_matches('/'), id)
}

#[derive(Clone, Debug)]
pub struct HnClient {
    http: Client,
    base_url: String,
}

impl HnClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        log::debug!("GET {}", url);
        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(source) => return Err(FetchError::Request { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status: status.as_u16() });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(source) => return Err(FetchError::Request { url, source }),
        };
        serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })
    }
}

#[async_trait(?Send)]
impl StorySource for HnClient {
    async fn top_story_ids(&self) -> Result<Vec<u64>, FetchError> {
        self.get_json(top_stories_url(&self.base_url)).await
    }

    async fn story(&self, id: u64) -> Result<Option<Story>, FetchError> {
        // Deleted items come back as a literal `null`
        self.get_json(item_url(&self.base_url, id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let base = "https://hacker-news.firebaseio.com/v0";
        assert_eq!(top_stories_url(base), "https://hacker-news.firebaseio.com/v0/topstories.json");
        assert_eq!(item_url(base, 8863), "https://hacker-news.firebaseio.com/v0/item/8863.json");
        assert_eq!(item_url("http://localhost:8080/v0/", 1), "http://localhost:8080/v0/item/1.json");
    }

    #[test]
    fn test_null_item_decodes_as_none() {
        let parsed: Option<Story> = serde_json::from_str("null").unwrap();
        assert!(parsed.is_none());
    }
}
