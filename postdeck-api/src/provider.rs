//! Provider trait — the seam between the UI and the remote API.
//!
//! The worker thread owns a boxed provider, so tests can run the whole
//! application over canned data without touching the network.

use crate::error::ApiError;
use crate::types::{Comment, Post};

pub trait PostProvider: Send {
    /// Fetch at most `limit` posts, in API order.
    fn fetch_posts(&self, limit: usize) -> Result<Vec<Post>, ApiError>;

    /// Fetch all comments for one post. An empty vec is a valid answer.
    fn fetch_comments(&self, post_id: u64) -> Result<Vec<Comment>, ApiError>;
}
