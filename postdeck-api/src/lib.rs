//! Postdeck API — remote post/comment records and the client that fetches them.
//!
//! JSONPlaceholder (<https://jsonplaceholder.typicode.com>) is a free fake
//! REST API serving blog-style fixtures. This crate covers the two endpoints
//! the reader needs:
//! - `GET /posts` — the full post collection (truncated client-side)
//! - `GET /posts/{id}/comments` — comments scoped to one post
//!
//! The `PostProvider` trait is the seam between the UI and the network, so
//! the full application can be driven over canned data in tests.

pub mod client;
pub mod error;
pub mod provider;
pub mod types;

pub use client::{JsonPlaceholderClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use provider::PostProvider;
pub use types::{Comment, Post};
