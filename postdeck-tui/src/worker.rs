//! Background worker thread — network fetches run here, off the render loop.
//!
//! Communication with the main thread is via `mpsc` channels. The worker
//! owns the provider, so the whole pipeline can run over canned data in
//! tests.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use postdeck_api::{Comment, Post, PostProvider};

/// Commands sent from the UI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    FetchPosts { limit: usize },
    FetchComments { post_id: u64 },
    Shutdown,
}

/// Responses sent from the worker back to the UI.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    Posts(Vec<Post>),
    Comments {
        post_id: u64,
        comments: Vec<Comment>,
    },
    FetchFailed {
        context: String,
        message: String,
    },
}

/// Spawn the background worker over any provider.
pub fn spawn_worker(
    provider: Box<dyn PostProvider>,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("postdeck-worker".into())
        .spawn(move || {
            worker_loop(provider, rx, tx);
        })
        .expect("failed to spawn worker thread")
}

fn worker_loop(
    provider: Box<dyn PostProvider>,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(cmd) => handle_command(provider.as_ref(), cmd, &tx),
        }
    }
}

fn handle_command(
    provider: &dyn PostProvider,
    cmd: WorkerCommand,
    tx: &Sender<WorkerResponse>,
) {
    match cmd {
        WorkerCommand::FetchPosts { limit } => match provider.fetch_posts(limit) {
            Ok(posts) => {
                let _ = tx.send(WorkerResponse::Posts(posts));
            }
            Err(e) => {
                let _ = tx.send(WorkerResponse::FetchFailed {
                    context: "posts".into(),
                    message: e.to_string(),
                });
            }
        },
        WorkerCommand::FetchComments { post_id } => match provider.fetch_comments(post_id) {
            Ok(comments) => {
                let _ = tx.send(WorkerResponse::Comments { post_id, comments });
            }
            Err(e) => {
                let _ = tx.send(WorkerResponse::FetchFailed {
                    context: format!("comments for post {post_id}"),
                    message: e.to_string(),
                });
            }
        },
        WorkerCommand::Shutdown => {} // handled in loop
    }
}
