//! Notification data model.
//!
//! This module groups the types that flow from the board to its subscribers:
//! [`Update`] (a full posting snapshot plus metadata) and [`UpdateKind`]
//! (why the notification fired).
//!
//! ## Quick reference
//! - **Publisher**: `JobBoard` (`post` / `remove` / `notify`).
//! - **Consumers**: every registered [`Subscribe`](crate::Subscribe)
//!   implementation, via [`Registry`](crate::Registry) fan-out.

mod update;

pub use update::{Update, UpdateKind};
