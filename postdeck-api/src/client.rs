//! Blocking HTTP client for the JSONPlaceholder API.
//!
//! Two read-only GET endpoints, JSON arrays both. No retries, no caching,
//! no auth — the service is a public fixture server and a failed request is
//! surfaced to the UI as-is.

use std::time::Duration;

use crate::error::ApiError;
use crate::provider::PostProvider;
use crate::types::{Comment, Post};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

pub struct JsonPlaceholderClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl JsonPlaceholderClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different server. Tests use this.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn comments_url(&self, post_id: u64) -> String {
        format!("{}/posts/{post_id}/comments", self.base_url)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        resp.json().map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Default for JsonPlaceholderClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PostProvider for JsonPlaceholderClient {
    fn fetch_posts(&self, limit: usize) -> Result<Vec<Post>, ApiError> {
        // The API serves the whole collection; truncate client-side to the
        // demo slice rather than depending on query-parameter pagination.
        let mut posts: Vec<Post> = self.get_json(&self.posts_url())?;
        posts.truncate(limit);
        Ok(posts)
    }

    fn fetch_comments(&self, post_id: u64) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&self.comments_url(post_id))
    }
}
