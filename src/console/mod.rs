//! # Console driver: a thin, testable menu loop over the board.
//!
//! The board itself has no process-exit side effects; this module owns the
//! interaction only up to returning from [`run`], and the binary that calls
//! it owns termination.
//!
//! ## Contents
//! - [`Choice`] parsed menu selection
//! - [`run`] the REPL, generic over `AsyncBufRead`/`AsyncWrite`

mod driver;
mod menu;

pub use driver::run;
pub use menu::Choice;
