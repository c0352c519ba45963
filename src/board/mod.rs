//! # The publishing subject and its construction.
//!
//! ## Contents
//! - [`JobBoard`] the publisher: posting list + subscriber registry,
//!   mutate-then-notify on every change
//! - [`BoardConfig`] notification behavior knobs
//! - [`BoardBuilder`] construction with initial subscribers and postings
//!
//! See `lib.rs` for the system-level wiring diagram.

mod board;
mod builder;
mod config;

pub use board::JobBoard;
pub use builder::BoardBuilder;
pub use config::BoardConfig;
