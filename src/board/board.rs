//! # JobBoard - the publishing subject.
//!
//! [`JobBoard`] owns the authoritative posting list and the subscriber
//! registry. Every mutation is an immediate, fully committed
//! mutate-then-notify sequence: the posting list changes, a snapshot
//! [`Update`] is built, and every registered subscriber processes it before
//! the call returns. There are no modes and no partial states.
//!
//! ## Architecture
//! ```text
//!  caller ──► post("title") ──► postings.push(...)
//!                                │
//!                                ▼
//!                        Update::new(Posted, snapshot)
//!                                │
//!                                ▼
//!                    Registry::deliver (in order, awaited)
//!                                │
//!                     ┌──────────┼──────────┐
//!                     ▼          ▼          ▼
//!                   sub 1      sub 2      sub N
//! ```
//!
//! ## Rules
//! - Postings keep insertion order; duplicates and empty titles are accepted.
//! - `remove` deletes the **first** case-sensitive match; a miss is a no-op,
//!   not an error. By default even a miss refreshes subscribers
//!   (see [`BoardConfig::refresh_on_miss`]).
//! - Subscribers only ever see snapshots; nothing they receive aliases the
//!   board's internal storage.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use jobboard::{BoardConfig, JobBoard, JobSeeker};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let seeker = Arc::new(JobSeeker::new("dev-1"));
//! let mut board = JobBoard::new(BoardConfig::default());
//! board.subscribe(seeker.clone());
//!
//! board.post("Java Developer").await;
//! board.post("Software Engineer").await;
//!
//! assert_eq!(board.postings().len(), 2);
//! assert_eq!(seeker.positions().await, board.postings());
//! # }
//! ```

use std::sync::Arc;

use crate::board::config::BoardConfig;
use crate::events::{Update, UpdateKind};
use crate::subscribers::{Registry, Subscribe};

use super::builder::BoardBuilder;

/// Publisher owning the posting list and the subscriber registry.
///
/// Mutations take `&mut self`, so the type system rules out concurrent
/// publishers; subscribers are shared `Arc` handles the board never owns
/// exclusively.
pub struct JobBoard {
    cfg: BoardConfig,
    postings: Vec<String>,
    registry: Registry,
}

impl JobBoard {
    /// Creates an empty board with the given configuration.
    #[must_use]
    pub fn new(cfg: BoardConfig) -> Self {
        Self::new_internal(cfg, Vec::new(), Registry::new())
    }

    /// Returns a builder for a board with initial subscribers and postings.
    #[must_use]
    pub fn builder(cfg: BoardConfig) -> BoardBuilder {
        BoardBuilder::new(cfg)
    }

    pub(crate) fn new_internal(cfg: BoardConfig, postings: Vec<String>, registry: Registry) -> Self {
        Self {
            cfg,
            postings,
            registry,
        }
    }

    /// Registers a subscriber at the end of the notification order.
    ///
    /// No notification fires on registration; the subscriber first hears
    /// from the board on the next `post`/`remove`/`notify` call. Duplicate
    /// registration is kept as-is (one delivery per occurrence).
    pub fn subscribe(&mut self, sub: Arc<dyn Subscribe>) {
        self.registry.attach(sub);
    }

    /// Unregisters the first occurrence of the given handle.
    ///
    /// Matching is by `Arc` pointer identity. Returns `true` if a handle
    /// was removed; unsubscribing an unknown handle is a no-op.
    pub fn unsubscribe(&mut self, sub: &Arc<dyn Subscribe>) -> bool {
        self.registry.detach(sub)
    }

    /// Appends a posting and notifies all subscribers.
    ///
    /// The title is taken verbatim: empty strings and duplicates are
    /// accepted without validation. Returns once every subscriber has
    /// processed the resulting [`UpdateKind::Posted`] update.
    pub async fn post(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.postings.push(title.clone());
        let update = Update::new(UpdateKind::Posted, &self.postings).with_title(title);
        self.registry.deliver(&update).await;
    }

    /// Removes the first posting equal to `title` (case-sensitive) and
    /// notifies all subscribers.
    ///
    /// A miss removes nothing; whether it still notifies is controlled by
    /// [`BoardConfig::refresh_on_miss`] (on by default). Returns `true` if
    /// a posting was removed.
    pub async fn remove(&mut self, title: &str) -> bool {
        let removed = match self.postings.iter().position(|p| p == title) {
            Some(idx) => {
                self.postings.remove(idx);
                true
            }
            None => false,
        };

        if removed || self.cfg.refresh_on_miss {
            let update = Update::new(UpdateKind::Removed, &self.postings).with_title(title);
            self.registry.deliver(&update).await;
        }
        removed
    }

    /// Re-delivers the current state to every subscriber without mutating it.
    ///
    /// Builds an immutable snapshot and hands it to each registered
    /// subscriber in registration order; returns only after all of them ran.
    pub async fn notify(&self) {
        let update = Update::new(UpdateKind::Refreshed, &self.postings);
        self.registry.deliver(&update).await;
    }

    /// Returns a snapshot of the current postings, in insertion order.
    ///
    /// The returned vector is a copy; mutating it does not affect the board.
    #[must_use]
    pub fn postings(&self) -> Vec<String> {
        self.postings.clone()
    }

    /// Number of registered subscriber handles (duplicates counted).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Keeps every received snapshot so tests can assert on delivery
    /// history, not just the final state.
    #[derive(Default)]
    struct Probe {
        seen: Mutex<Vec<Vec<String>>>,
    }

    impl Probe {
        fn shared() -> Arc<Probe> {
            Arc::new(Probe::default())
        }

        fn snapshots(&self) -> Vec<Vec<String>> {
            self.seen.lock().unwrap().clone()
        }

        fn last(&self) -> Option<Vec<String>> {
            self.seen.lock().unwrap().last().cloned()
        }

        fn update_count(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Subscribe for Probe {
        async fn on_update(&self, update: &Update) {
            self.seen.lock().unwrap().push(update.postings().to_vec());
        }

        fn name(&self) -> &'static str {
            "probe"
        }
    }

    fn titles(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_postings_preserve_order_and_duplicates() {
        let mut board = JobBoard::new(BoardConfig::default());
        board.post("Java Developer").await;
        board.post("Software Engineer").await;
        board.post("Java Developer").await;
        board.post("").await;

        assert_eq!(
            board.postings(),
            titles(&["Java Developer", "Software Engineer", "Java Developer", ""])
        );
    }

    #[tokio::test]
    async fn test_remove_deletes_first_occurrence_only() {
        let mut board = JobBoard::new(BoardConfig::default());
        board.post("Java Developer").await;
        board.post("Web Developer").await;
        board.post("Java Developer").await;

        assert!(board.remove("Java Developer").await);
        assert_eq!(board.postings(), titles(&["Web Developer", "Java Developer"]));
    }

    #[tokio::test]
    async fn test_remove_missing_title_is_total() {
        let mut board = JobBoard::new(BoardConfig::default());
        board.post("Web Developer").await;

        assert!(!board.remove("Java Developer").await);
        assert!(!board.remove("Java Developer").await);
        assert_eq!(board.postings(), titles(&["Web Developer"]));
    }

    #[tokio::test]
    async fn test_remove_is_case_sensitive() {
        let mut board = JobBoard::new(BoardConfig::default());
        board.post("Java Developer").await;

        assert!(!board.remove("java developer").await);
        assert_eq!(board.postings(), titles(&["Java Developer"]));
    }

    #[tokio::test]
    async fn test_every_mutation_delivers_the_current_snapshot() {
        let probe = Probe::shared();
        let mut board = JobBoard::new(BoardConfig::default());
        board.subscribe(probe.clone());

        board.post("Java Developer").await;
        assert_eq!(probe.last().unwrap(), board.postings());

        board.post("Software Engineer").await;
        assert_eq!(probe.last().unwrap(), board.postings());

        board.remove("Java Developer").await;
        assert_eq!(probe.last().unwrap(), board.postings());
    }

    #[tokio::test]
    async fn test_double_subscribe_receives_each_update_twice() {
        let probe = Probe::shared();
        let mut board = JobBoard::new(BoardConfig::default());
        board.subscribe(probe.clone());
        board.subscribe(probe.clone());
        assert_eq!(board.subscriber_count(), 2);

        board.post("Java Developer").await;
        assert_eq!(probe.update_count(), 2);

        board.post("Web Developer").await;
        assert_eq!(probe.update_count(), 4);
    }

    #[tokio::test]
    async fn test_unsubscribe_stops_deliveries() {
        let probe = Probe::shared();
        let mut board = JobBoard::new(BoardConfig::default());
        board.subscribe(probe.clone());

        board.post("Java Developer").await;
        assert_eq!(probe.update_count(), 1);

        let handle: Arc<dyn Subscribe> = probe.clone();
        assert!(board.unsubscribe(&handle));

        board.post("Web Developer").await;
        assert_eq!(probe.update_count(), 1);
    }

    #[tokio::test]
    async fn test_unsubscribe_unknown_handle_is_noop() {
        let registered = Probe::shared();
        let stranger: Arc<dyn Subscribe> = Probe::shared();

        let mut board = JobBoard::new(BoardConfig::default());
        board.subscribe(registered.clone());

        assert!(!board.unsubscribe(&stranger));
        board.post("Java Developer").await;
        assert_eq!(registered.update_count(), 1);
    }

    #[tokio::test]
    async fn test_noop_remove_still_refreshes_by_default() {
        let probe = Probe::shared();
        let mut board = JobBoard::new(BoardConfig::default());
        board.subscribe(probe.clone());

        board.remove("Never Posted").await;

        assert_eq!(probe.update_count(), 1);
        assert_eq!(probe.last().unwrap(), Vec::<String>::new());
    }

    #[tokio::test]
    async fn test_noop_remove_is_silent_when_refresh_on_miss_off() {
        let probe = Probe::shared();
        let cfg = BoardConfig {
            refresh_on_miss: false,
        };
        let mut board = JobBoard::new(cfg);
        board.subscribe(probe.clone());

        board.post("Java Developer").await;
        board.remove("Never Posted").await;
        assert_eq!(probe.update_count(), 1);

        // A hit still notifies.
        board.remove("Java Developer").await;
        assert_eq!(probe.update_count(), 2);
    }

    #[tokio::test]
    async fn test_notify_redelivers_without_mutation() {
        let probe = Probe::shared();
        let mut board = JobBoard::new(BoardConfig::default());
        board.subscribe(probe.clone());
        board.post("Java Developer").await;

        board.notify().await;

        assert_eq!(probe.update_count(), 2);
        assert_eq!(probe.last().unwrap(), titles(&["Java Developer"]));
        assert_eq!(board.postings(), titles(&["Java Developer"]));
    }

    #[tokio::test]
    async fn test_postings_snapshot_is_detached() {
        let mut board = JobBoard::new(BoardConfig::default());
        board.post("Java Developer").await;

        let mut snapshot = board.postings();
        snapshot.push("Injected".to_string());
        snapshot[0] = "Mutated".to_string();

        assert_eq!(board.postings(), titles(&["Java Developer"]));
    }

    #[tokio::test]
    async fn test_builder_seeds_without_notifying() {
        let probe = Probe::shared();
        let board = JobBoard::builder(BoardConfig::default())
            .with_subscribers(vec![probe.clone()])
            .with_postings(titles(&["Java Developer", "Web Developer"]))
            .build();

        assert_eq!(board.postings(), titles(&["Java Developer", "Web Developer"]));
        assert_eq!(board.subscriber_count(), 1);
        assert_eq!(probe.update_count(), 0);
    }

    #[tokio::test]
    async fn test_job_seeker_walkthrough() {
        use crate::subscribers::JobSeeker;

        let seeker = Arc::new(JobSeeker::new("dev-1"));
        let mut board = JobBoard::new(BoardConfig::default());
        board.subscribe(seeker.clone());

        board.post("Java Developer").await;
        assert_eq!(seeker.positions().await, titles(&["Java Developer"]));

        board.post("Software Engineer").await;
        assert_eq!(
            seeker.positions().await,
            titles(&["Java Developer", "Software Engineer"])
        );

        board.remove("Java Developer").await;
        assert_eq!(seeker.positions().await, titles(&["Software Engineer"]));

        board.remove("Java Developer").await;
        assert_eq!(seeker.positions().await, titles(&["Software Engineer"]));
    }
}
