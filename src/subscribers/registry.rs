//! # Registry: ordered, in-process fan-out over multiple subscribers
//!
//! [`Registry`] holds the board's subscriber handles and distributes each
//! [`Update`](crate::events::Update) to them **sequentially, in registration
//! order**, awaiting each one before moving to the next.
//!
//! ## What it guarantees
//! - `deliver(&Update)` returns only after every subscriber has run.
//! - Registration order is delivery order.
//! - Panics inside subscribers are caught and reported (isolation).
//! - Duplicate registration is kept as-is: the handle is notified once per
//!   occurrence.
//!
//! ## What it does **not** guarantee
//! - No deduplication of handles.
//! - No delivery retry: a panicking subscriber loses that update.
//!
//! ## Diagram
//! ```text
//!    deliver(&Update)
//!        │              (await each in turn)
//!        ├─► sub 1 ─► on_update()
//!        ├─► sub 2 ─► on_update()
//!        └─► sub N ─► on_update()
//! ```

use std::sync::Arc;

use futures::FutureExt;

use crate::events::Update;

use super::Subscribe;

/// Ordered collection of subscriber handles with sequential fan-out.
#[derive(Default)]
pub struct Registry {
    subs: Vec<Arc<dyn Subscribe>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { subs: Vec::new() }
    }

    /// Creates a registry pre-populated with the given handles, in order.
    #[must_use]
    pub fn with_subscribers(subs: Vec<Arc<dyn Subscribe>>) -> Self {
        Self { subs }
    }

    /// Appends a subscriber handle.
    ///
    /// Duplicates are not collapsed: attaching the same `Arc` twice means
    /// it receives every update twice.
    pub fn attach(&mut self, sub: Arc<dyn Subscribe>) {
        self.subs.push(sub);
    }

    /// Removes the first occurrence of the given handle, matched by
    /// pointer identity (`Arc` allocation), not by value.
    ///
    /// Returns `true` if a handle was removed; an unknown handle is a
    /// no-op, never an error.
    pub fn detach(&mut self, sub: &Arc<dyn Subscribe>) -> bool {
        match self.subs.iter().position(|s| same_handle(s, sub)) {
            Some(idx) => {
                self.subs.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Delivers one update to every subscriber, in registration order.
    ///
    /// Each subscriber is awaited to completion before the next one runs.
    /// A panic inside a subscriber is caught and reported to stderr; the
    /// remaining subscribers still receive the update.
    pub async fn deliver(&self, update: &Update) {
        for sub in &self.subs {
            let fut = sub.on_update(update);
            if let Err(panic_err) = std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                eprintln!(
                    "[jobboard] subscriber '{}' panicked: {:?}",
                    sub.name(),
                    panic_err
                );
            }
        }
    }

    /// True if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Number of registered handles (duplicates counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.subs.len()
    }
}

/// Pointer identity for trait-object handles (ignores vtable metadata).
fn same_handle(a: &Arc<dyn Subscribe>, b: &Arc<dyn Subscribe>) -> bool {
    Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>()
}
