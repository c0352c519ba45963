//! # Subscribers for board notifications.
//!
//! This module provides the [`Subscribe`] trait, the ordered [`Registry`]
//! fan-out used by the board, and built-in subscriber implementations.
//!
//! ## Architecture
//! ```text
//! Update flow:
//!   JobBoard ── deliver(Update) ──► Registry ──► each subscriber, in order
//!                                      │
//!                                 on_update(&Update)
//!                                      │
//!                                 ┌────┴────┬─────────┐
//!                                 ▼         ▼         ▼
//!                              JobSeeker  LogWriter  Custom ...
//! ```
//!
//! ## Subscriber types
//! - **Passive subscribers** - observe and render updates (LogWriter)
//! - **Stateful subscribers** - keep a local copy of the snapshot (JobSeeker)
//!
//! ## Implementing custom subscribers
//! ```rust
//! use jobboard::{Subscribe, Update};
//! use async_trait::async_trait;
//!
//! struct CountingSubscriber;
//!
//! #[async_trait]
//! impl Subscribe for CountingSubscriber {
//!     async fn on_update(&self, update: &Update) {
//!         // inspect update.postings(), update.kind, ...
//!     }
//! }
//! ```

mod registry;
mod seeker;
mod subscriber;

#[cfg(feature = "logging")]
mod log;

pub use registry::Registry;
pub use seeker::JobSeeker;
pub use subscriber::Subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
