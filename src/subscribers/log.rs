//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints every update to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [posted] title="Java Developer" total=1
//! [removed] title="Java Developer" total=0
//! [refreshed] total=3
//! ```

use async_trait::async_trait;

use crate::events::{Update, UpdateKind};

use super::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Prints human-readable update
/// descriptions to stdout for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Subscribe`] for
/// structured logging or metrics collection.
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_update(&self, up: &Update) {
        match up.kind {
            UpdateKind::Posted => {
                println!(
                    "[posted] title={:?} total={}",
                    up.title.as_deref().unwrap_or("<unknown>"),
                    up.len()
                );
            }
            UpdateKind::Removed => {
                println!(
                    "[removed] title={:?} total={}",
                    up.title.as_deref().unwrap_or("<unknown>"),
                    up.len()
                );
            }
            UpdateKind::Refreshed => {
                println!("[refreshed] total={}", up.len());
            }
        }
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
