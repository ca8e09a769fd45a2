//! Canned posts and comments for tests — stands in for the remote API.

use std::sync::mpsc::{self, Receiver};

use postdeck_api::{ApiError, Comment, Post, PostProvider};

use crate::app::AppState;
use crate::worker::WorkerCommand;

pub fn post(id: u64, title: &str, body: &str) -> Post {
    Post {
        id,
        user_id: 1,
        title: title.to_string(),
        body: body.to_string(),
    }
}

pub fn ten_posts() -> Vec<Post> {
    (1..=10)
        .map(|i| {
            post(
                i,
                &format!("post title {i}"),
                &format!("body of post {i}, long enough to need a preview cut somewhere"),
            )
        })
        .collect()
}

pub fn comments_for(post_id: u64, count: usize) -> Vec<Comment> {
    (1..=count as u64)
        .map(|i| Comment {
            id: post_id * 100 + i,
            post_id,
            name: format!("commenter {i}"),
            email: format!("commenter{i}@example.com"),
            body: format!("comment {i} on post {post_id}"),
        })
        .collect()
}

/// An `AppState` wired to a channel the test can inspect, with the response
/// side left dangling.
pub fn test_app() -> (AppState, Receiver<WorkerCommand>) {
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (_resp_tx, resp_rx) = mpsc::channel();
    (AppState::new(cmd_tx, resp_rx), cmd_rx)
}

/// Provider serving canned data, optionally failing every call.
#[derive(Default)]
pub struct FixtureProvider {
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub fail: bool,
}

impl PostProvider for FixtureProvider {
    fn fetch_posts(&self, limit: usize) -> Result<Vec<Post>, ApiError> {
        if self.fail {
            return Err(ApiError::Transport("connection refused".into()));
        }
        let mut posts = self.posts.clone();
        posts.truncate(limit);
        Ok(posts)
    }

    fn fetch_comments(&self, post_id: u64) -> Result<Vec<Comment>, ApiError> {
        if self.fail {
            return Err(ApiError::Transport("connection refused".into()));
        }
        Ok(self
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }
}
