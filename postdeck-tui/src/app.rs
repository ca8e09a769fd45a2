//! Application state — single-owner, main-thread only.
//!
//! All UI state lives here. The worker thread communicates via channels;
//! nothing in this module touches the network or the terminal.

use std::sync::mpsc::{Receiver, Sender};

use chrono::NaiveDateTime;

use postdeck_api::{Comment, Post};

use crate::worker::{WorkerCommand, WorkerResponse};

/// How many posts the list shows. The API serves 100; the fixed slice keeps
/// the list scannable without pagination.
pub const POST_LIMIT: usize = 10;

/// Which of the two mutually exclusive screens is showing.
///
/// Derived from the selection rather than stored: a separate flag could
/// only ever mirror `selected.is_some()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Detail,
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Top-level application state.
pub struct AppState {
    /// At most `POST_LIMIT` entries, in API order.
    pub posts: Vec<Post>,
    /// List cursor; an index into `posts` once any have arrived.
    pub cursor: usize,
    /// Index of the selected post. `Some` means the detail view is showing.
    pub selected: Option<usize>,
    /// Comments for the selected post. Stale the moment the selection changes.
    pub comments: Vec<Comment>,
    /// Distinguishes "still fetching" from "fetched, empty".
    pub comments_loaded: bool,
    /// A fetch of either kind is outstanding.
    pub loading: bool,
    /// When `Some`, the error screen replaces the entire view.
    pub error: Option<String>,
    pub running: bool,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    // Status line
    pub status_message: Option<(String, StatusLevel)>,
    pub last_loaded_at: Option<NaiveDateTime>,
}

impl AppState {
    pub fn new(worker_tx: Sender<WorkerCommand>, worker_rx: Receiver<WorkerResponse>) -> Self {
        Self {
            posts: Vec::new(),
            cursor: 0,
            selected: None,
            comments: Vec::new(),
            comments_loaded: false,
            loading: false,
            error: None,
            running: true,
            worker_tx,
            worker_rx,
            status_message: None,
            last_loaded_at: None,
        }
    }

    pub fn view(&self) -> View {
        if self.selected.is_some() {
            View::Detail
        } else {
            View::List
        }
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.selected.and_then(|i| self.posts.get(i))
    }

    /// Kick off the initial posts fetch.
    pub fn start(&mut self) {
        self.loading = true;
        let _ = self
            .worker_tx
            .send(WorkerCommand::FetchPosts { limit: POST_LIMIT });
        self.set_status("Loading posts...");
    }

    /// Select the post under the cursor and fetch its comments.
    pub fn select_under_cursor(&mut self) {
        let Some(post) = self.posts.get(self.cursor) else {
            return;
        };
        let post_id = post.id;
        self.selected = Some(self.cursor);
        self.comments.clear();
        self.comments_loaded = false;
        self.loading = true;
        let _ = self.worker_tx.send(WorkerCommand::FetchComments { post_id });
        self.set_status("Loading comments...");
    }

    /// Back to the list: drop the selection and the dependent data.
    pub fn back_to_list(&mut self) {
        self.selected = None;
        self.comments.clear();
        self.comments_loaded = false;
    }

    /// Full reload — the sole recovery path from the error screen.
    pub fn reload(&mut self) {
        self.posts.clear();
        self.back_to_list();
        self.cursor = 0;
        self.error = None;
        self.start();
    }

    /// Apply a worker response to the state. Last write wins; only one fetch
    /// of each kind can be outstanding under normal interaction.
    pub fn apply(&mut self, resp: WorkerResponse) {
        match resp {
            WorkerResponse::Posts(posts) => {
                self.loading = false;
                self.posts = posts;
                self.cursor = self.cursor.min(self.posts.len().saturating_sub(1));
                self.last_loaded_at = Some(chrono::Local::now().naive_local());
                self.set_status(format!("Loaded {} posts", self.posts.len()));
            }
            WorkerResponse::Comments { post_id, comments } => {
                self.loading = false;
                // Ignore a response for a post the user already backed out of.
                if self.selected_post().map(|p| p.id) != Some(post_id) {
                    self.set_warning(format!("Discarded stale comments for post {post_id}"));
                    return;
                }
                self.comments = comments;
                self.comments_loaded = true;
                self.set_status(format!("Loaded {} comments", self.comments.len()));
            }
            WorkerResponse::FetchFailed { context, message } => {
                self.loading = false;
                self.error = Some(message.clone());
                self.status_message = Some((format!("{context}: {message}"), StatusLevel::Error));
            }
        }
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
