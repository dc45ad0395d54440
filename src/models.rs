//! Frontend Models
//!
//! Upstream story records and the form record.

use chrono::DateTime;
use reactive_stores::Store;
use reqwest::Url;
use serde::Deserialize;

/// Story data structure (matches the upstream item JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Story {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub by: String,
}

const HN_ITEM_PAGE: &str = "https://news.ycombinator.com/item?id=";

impl Story {
    /// Outbound link, or the discussion page for text posts
    pub fn link(&self) -> String {
        match &self.url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!("{}{}", HN_ITEM_PAGE, self.id),
        }
    }

    /// Posting time as `YYYY-MM-DD HH:MM` (UTC)
    pub fn posted_at(&self) -> Option<String> {
        DateTime::from_timestamp(self.time, 0).map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
    }

    /// Host part of the link, without a leading `www.`
    pub fn host(&self) -> Option<String> {
        let url = Url::parse(self.url.as_deref()?).ok()?;
        let host = url.host_str()?;
        Some(host.strip_prefix("www.").unwrap_or(host).to_string())
    }
}

/// Form fields collected by the exporter.
///
/// Only the picked file's display name is kept; its content is never read.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct FormRecord {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub file_name: Option<String>,
}

impl FormRecord {
    /// Whether any of the three text fields holds something
    pub fn has_text(&self) -> bool {
        !(self.first_name.is_empty() && self.last_name.is_empty() && self.address.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_story(url: Option<&str>, time: i64) -> Story {
        Story {
            id: 1,
            title: "Show HN".to_string(),
            url: url.map(str::to_string),
            score: 10,
            time,
            by: "pg".to_string(),
        }
    }

    #[test]
    fn test_story_deserializes_upstream_json() {
        let json = r#"{"by":"dhouston","descendants":71,"id":8863,"kids":[8952],"score":111,"time":1175714200,"title":"My YC app: Dropbox","type":"story","url":"http://www.getdropbox.com/u/2/screencast.html"}"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.id, 8863);
        assert_eq!(story.by, "dhouston");
        assert_eq!(story.score, 111);
        assert_eq!(story.time, 1175714200);
        assert_eq!(story.title, "My YC app: Dropbox");
        assert_eq!(story.url.as_deref(), Some("http://www.getdropbox.com/u/2/screencast.html"));
    }

    #[test]
    fn test_story_tolerates_missing_fields() {
        // Ask HN posts have no url; dead items may lack title and author
        let story: Story = serde_json::from_str(r#"{"id":121003,"time":1203647620}"#).unwrap();
        assert_eq!(story.url, None);
        assert_eq!(story.title, "");
        assert_eq!(story.by, "");
        assert_eq!(story.score, 0);
    }

    #[test]
    fn test_posted_at() {
        assert_eq!(make_story(None, 1175714200).posted_at().as_deref(), Some("2007-04-04 19:16"));
        assert_eq!(make_story(None, i64::MAX).posted_at(), None);
    }

    #[test]
    fn test_host() {
        assert_eq!(make_story(Some("http://www.getdropbox.com/u/2/x.html"), 0).host().as_deref(), Some("getdropbox.com"));
        assert_eq!(make_story(Some("https://example.org:8080?q=1"), 0).host().as_deref(), Some("example.org"));
        assert_eq!(make_story(Some("not a url"), 0).host(), None);
        assert_eq!(make_story(Some("http://[::1]:8080/x"), 0).host().as_deref(), Some("[::1]"));
        assert_eq!(make_story(Some("HTTPS://WWW.Example.COM/a"), 0).host().as_deref(), Some("example.com"));
        assert_eq!(make_story(Some("https://user:pw@news.example.net/"), 0).host().as_deref(), Some("news.example.net"));
        assert_eq!(make_story(None, 0).host(), None);
    }

    #[test]
    fn test_link_falls_back_to_discussion() {
        assert_eq!(make_story(Some("https://example.com/a"), 0).link(), "https://example.com/a");
        assert_eq!(make_story(None, 0).link(), "https://news.ycombinator.com/item?id=1");
        assert_eq!(make_story(Some(""), 0).link(), "https://news.ycombinator.com/item?id=1");
    }

    #[test]
    fn test_has_text_ignores_file() {
        let mut record = FormRecord {
            file_name: Some("cv.pdf".to_string()),
            ..Default::default()
        };
        assert!(!record.has_text());
        record.address = "1 Analytical Way".to_string();
        assert!(record.has_text());
    }
}
