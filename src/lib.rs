//! # jobboard
//!
//! **jobboard** is a small observer-pattern library: a job posting board
//! (the subject) that hands every registered subscriber a full snapshot of
//! its posting list whenever the list changes.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐      ┌─────────────────────────────────────┐
//!     │ console::run │ ───► │  JobBoard (publishing subject)      │
//!     │ (thin driver)│      │  - postings: Vec<String> (ordered)  │
//!     └──────────────┘      │  - Registry (ordered subscribers)   │
//!                           └───────────────┬─────────────────────┘
//!                                post/remove/notify
//!                                           │
//!                            Update { seq, at, kind, snapshot }
//!                                           │
//!                          Registry::deliver (in order, awaited)
//!                             ┌─────────────┼─────────────┐
//!                             ▼             ▼             ▼
//!                         JobSeeker     LogWriter      custom
//!                      (numbered copy)  (stdout)    Subscribe impl
//! ```
//!
//! ### Lifecycle
//! ```text
//! post(title)   ──► append ──► snapshot ──► deliver to each subscriber ──► return
//! remove(title) ──► drop first match (miss = no-op) ──► snapshot ──► deliver ──► return
//! notify()      ──► snapshot ──► deliver ──► return
//! ```
//! Every call is fully committed before it returns: there are no modes,
//! no partial states, and no background work.
//!
//! ## Features
//! | Area              | Description                                                       | Key types / traits                  |
//! |-------------------|-------------------------------------------------------------------|-------------------------------------|
//! | **Publishing**    | Ordered posting list with snapshot notifications on every change. | [`JobBoard`], [`BoardConfig`]       |
//! | **Subscriber API**| Hook into board updates (tracking, logging, custom reactions).    | [`Subscribe`], [`Registry`]         |
//! | **Updates**       | Full-snapshot payloads with sequence numbers and timestamps.      | [`Update`], [`UpdateKind`]          |
//! | **Console**       | Testable interactive menu loop over any async streams.            | [`console::run`], [`console::Choice`] |
//! | **Errors**        | Typed errors for console I/O and menu parsing.                    | [`ConsoleError`], [`ChoiceError`]   |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use jobboard::{BoardConfig, JobBoard, JobSeeker, Subscribe};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let seeker = Arc::new(JobSeeker::new("dev-1"));
//!
//!     let mut board = JobBoard::builder(BoardConfig::default())
//!         .with_subscribers(vec![Arc::clone(&seeker) as Arc<dyn Subscribe>])
//!         .build();
//!
//!     board.post("Java Developer").await;
//!     board.post("Software Engineer").await;
//!     board.remove("Java Developer").await;
//!
//!     // The seeker's copy always matches the board after each call.
//!     assert_eq!(seeker.positions().await, board.postings());
//!     assert_eq!(
//!         seeker.applicable_jobs().await.get(&1).map(String::as_str),
//!         Some("Software Engineer"),
//!     );
//! }
//! ```

mod board;
mod error;
mod events;
mod subscribers;

pub mod console;

// ---- Public re-exports ----

pub use board::{BoardBuilder, BoardConfig, JobBoard};
pub use error::{ChoiceError, ConsoleError};
pub use events::{Update, UpdateKind};
pub use subscribers::{JobSeeker, Registry, Subscribe};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
