use std::sync::Arc;

use crate::board::config::BoardConfig;
use crate::subscribers::{Registry, Subscribe};

use super::board::JobBoard;

/// Builder for constructing a [`JobBoard`] with initial state.
pub struct BoardBuilder {
    cfg: BoardConfig,
    subscribers: Vec<Arc<dyn Subscribe>>,
    postings: Vec<String>,
}

impl BoardBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: BoardConfig) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
            postings: Vec::new(),
        }
    }

    /// Sets the initial subscribers, in registration order.
    ///
    /// Duplicate handles are kept as-is and notified once per occurrence.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Seeds the board with postings that exist before the first update.
    ///
    /// Seeding does not notify anyone: subscribers first hear from the board
    /// on the next `post`/`remove`/`notify` call.
    pub fn with_postings(mut self, postings: Vec<String>) -> Self {
        self.postings = postings;
        self
    }

    /// Builds and returns the board instance.
    pub fn build(self) -> JobBoard {
        JobBoard::new_internal(
            self.cfg,
            self.postings,
            Registry::with_subscribers(self.subscribers),
        )
    }
}
