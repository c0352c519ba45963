//! # Example: job_seeker
//!
//! Interactive menu session against a job board.
//!
//! Shows how to:
//! - Build a [`JobBoard`] with seeded postings and subscribers.
//! - Implement a small custom [`Subscribe`] that echoes every update.
//! - Drive the board with [`console::run`] over stdin/stdout.
//!
//! ## Flow
//! ```text
//! main ──► JobBoard::builder().with_subscribers().with_postings().build()
//!     ├─► seed: three postings already on the board (no notification)
//!     ├─► console::run(stdin, stdout)
//!     │     ├─ "1" ─► post ─► Announcer + JobSeeker notified
//!     │     ├─ "2" ─► remove ─► Announcer + JobSeeker notified
//!     │     └─ "3" ─► return
//!     └─► print the seeker's final numbered job list, exit 0
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example job_seeker
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{stdin, stdout, BufReader};

use jobboard::{console, BoardConfig, JobBoard, JobSeeker, Subscribe, Update};

/// Echoes every update to the terminal, the way the seeker would read it.
struct Announcer {
    name: &'static str,
}

#[async_trait]
impl Subscribe for Announcer {
    async fn on_update(&self, up: &Update) {
        println!("{} received updated job list: {:?}", self.name, up.postings());
    }

    fn name(&self) -> &'static str {
        "announcer"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let seeker = Arc::new(JobSeeker::new("JobSeeker1"));
    let announcer = Arc::new(Announcer { name: "JobSeeker1" });

    let mut board = JobBoard::builder(BoardConfig::default())
        .with_subscribers(vec![
            Arc::clone(&seeker) as Arc<dyn Subscribe>,
            announcer,
        ])
        .with_postings(vec![
            "Java Developer".to_string(),
            "Software Engineer".to_string(),
            "Web Developer".to_string(),
        ])
        .build();

    console::run(&mut board, BufReader::new(stdin()), stdout()).await?;

    println!(
        "\n{} leaves with: {:?}",
        seeker.seeker_name(),
        seeker.applicable_jobs().await
    );
    Ok(())
}
