//! # Example: walkthrough
//!
//! Scripted tour of the notification cycle, no typing required.
//!
//! Shows how to:
//! - Wire the built-in [`LogWriter`] next to a stateful [`JobSeeker`].
//! - Observe that a no-op removal still refreshes subscribers by default.
//! - Read the seeker's renumbered copy after each change.
//!
//! ## Run
//! Requires the `logging` feature to export [`LogWriter`].
//! ```bash
//! cargo run --example walkthrough --features logging
//! ```

use std::sync::Arc;

use jobboard::{BoardConfig, JobBoard, JobSeeker, LogWriter, Subscribe};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let seeker = Arc::new(JobSeeker::new("dev-1"));

    let mut board = JobBoard::builder(BoardConfig::default())
        .with_subscribers(vec![
            Arc::new(LogWriter) as Arc<dyn Subscribe>,
            Arc::clone(&seeker) as Arc<dyn Subscribe>,
        ])
        .build();

    board.post("Java Developer").await;
    board.post("Software Engineer").await;
    println!("seeker sees: {:?}", seeker.applicable_jobs().await);

    board.remove("Java Developer").await;
    println!("seeker sees: {:?}", seeker.applicable_jobs().await);

    // Removing it again finds nothing, yet still refreshes everyone.
    let removed = board.remove("Java Developer").await;
    println!("second removal removed something: {removed}");
    println!("seeker sees: {:?}", seeker.applicable_jobs().await);

    // An explicit refresh re-delivers the unchanged state.
    board.notify().await;

    Ok(())
}
