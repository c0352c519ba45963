//! # Board updates delivered to subscribers.
//!
//! [`UpdateKind`] classifies why a notification fired; [`Update`] carries the
//! full posting snapshot plus metadata (sequence number, timestamp, the title
//! that triggered the change).
//!
//! The snapshot is always the **complete current posting list**, never a
//! delta: subscribers replace their local view wholesale on every update.
//! The metadata is advisory and exists for logging and diagnostics only.
//!
//! ## Ordering guarantees
//! Each update has a globally unique sequence number (`seq`) that increases
//! monotonically across all boards in the process. Within one board,
//! subscribers observe updates in delivery order anyway (delivery is
//! sequential); `seq` lets a subscriber that records updates from several
//! boards restore a total order.
//!
//! ## Example
//! ```rust
//! use jobboard::{Update, UpdateKind};
//!
//! let postings = vec!["Java Developer".to_string()];
//! let up = Update::new(UpdateKind::Posted, &postings).with_title("Java Developer");
//!
//! assert_eq!(up.kind, UpdateKind::Posted);
//! assert_eq!(up.title.as_deref(), Some("Java Developer"));
//! assert_eq!(up.postings(), ["Java Developer".to_string()]);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for update ordering.
static UPDATE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of board updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    /// A posting was appended to the board.
    ///
    /// Sets:
    /// - `title`: the posting that was added
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    Posted,

    /// A posting removal was requested.
    ///
    /// Fired after every `remove` call, including removals of titles that
    /// were not on the board (the board re-notifies on no-op removals by
    /// default; see `BoardConfig::refresh_on_miss`).
    ///
    /// Sets:
    /// - `title`: the posting that removal was requested for
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    Removed,

    /// The board was asked to re-deliver its current state with no
    /// preceding mutation (`JobBoard::notify`).
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    Refreshed,
}

/// A full-snapshot notification with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - `title`: the posting that triggered the change, if any
/// - the snapshot itself is shared and structurally immutable
#[derive(Clone, Debug)]
pub struct Update {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Update classification.
    pub kind: UpdateKind,
    /// The posting title that triggered this update, if applicable.
    pub title: Option<Arc<str>>,

    /// Point-in-time copy of the posting list. `Arc<[String]>` cannot be
    /// mutated through a clone, so handing the same update to many
    /// subscribers never leaks a mutable view of board state.
    postings: Arc<[String]>,
}

impl Update {
    /// Creates a new update of the given kind, snapshotting `postings` with
    /// the current timestamp and next sequence number.
    pub fn new(kind: UpdateKind, postings: &[String]) -> Self {
        Self {
            seq: UPDATE_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            title: None,
            postings: postings.into(),
        }
    }

    /// Attaches the posting title that triggered this update.
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<Arc<str>>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The complete posting list at the moment the update was created.
    #[inline]
    pub fn postings(&self) -> &[String] {
        &self.postings
    }

    /// Number of postings in the snapshot.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// True if the snapshot is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
