//! # Board subscriber trait.
//!
//! Provides [`Subscribe`], the extension point for plugging custom reactions
//! into the board's notification cycle.
//!
//! Each subscriber gets:
//! - **The complete posting list** on every call (a snapshot, never a delta)
//! - **In-order delivery** (registration order, one at a time)
//! - **Panic isolation** (panics are caught and reported to stderr; the
//!   remaining subscribers still receive the update)
//!
//! ## Rules
//! - Delivery is fire-and-forget: no return value, no acknowledgment.
//! - The snapshot inside the [`Update`] is shared and structurally
//!   immutable; a subscriber cannot mutate board state through it.
//! - A subscriber registered twice is notified twice per update.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use jobboard::{Subscribe, Update, UpdateKind};
//!
//! struct Alerts;
//!
//! #[async_trait]
//! impl Subscribe for Alerts {
//!     async fn on_update(&self, up: &Update) {
//!         if up.kind == UpdateKind::Posted {
//!             // ping a channel, send a mail, etc.
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "alerts" }  // prefer short, descriptive names
//! }
//! ```

use async_trait::async_trait;

use crate::events::Update;

/// Snapshot receiver for board notifications.
///
/// Implementations hold their own state behind interior mutability
/// (the board shares subscribers as `Arc<dyn Subscribe>` and calls them
/// through `&self`).
///
/// ### Implementation requirements
/// - Treat the snapshot as read-only and complete; replace any local copy
///   wholesale rather than diffing against previous updates.
/// - Handle errors internally; do not panic. Panics are caught and reported,
///   but the update is lost for this subscriber.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Processes one update.
    ///
    /// Called sequentially, in registration order, before the triggering
    /// `post`/`remove`/`notify` call returns to the publisher's caller.
    async fn on_update(&self, update: &Update);

    /// Returns the subscriber name used in diagnostics (panic reports, logs).
    ///
    /// Prefer short, descriptive names (e.g., "seeker", "audit", "console").
    /// The default uses `type_name::<Self>()`, which can be verbose -
    /// override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
