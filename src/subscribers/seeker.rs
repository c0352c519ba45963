//! # Stateful example subscriber: a job seeker tracking open positions.
//!
//! [`JobSeeker`] keeps a local, numbered copy of the most recent snapshot it
//! received. On every update it discards the previous copy and re-keys the
//! incoming postings 1..N in snapshot order, so the numbers reflect receipt
//! order, not any stable posting identity.
//!
//! ## Architecture
//! ```text
//!  JobBoard ── deliver(Update) ──► Registry
//!                                    │
//!                               on_update()
//!                                    │
//!                                    ▼
//!               JobSeeker (BTreeMap<u32, String> behind Mutex)
//!                      clear() then insert 1..N in order
//! ```
//!
//! ## Example
//! ```no_run
//! # use jobboard::JobSeeker;
//! # async fn demo() {
//! let seeker = JobSeeker::new("dev-1");
//!
//! // After the board delivers an update:
//! let jobs = seeker.applicable_jobs().await;
//! println!("{} can apply to: {:?}", seeker.seeker_name(), jobs);
//! # }
//! ```

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::events::Update;

use super::Subscribe;

/// Subscriber that mirrors the latest posting snapshot under 1-based keys.
///
/// Thread-safe: the numbered copy lives behind a `Mutex`, so the handle can
/// be shared between the board and whoever inspects the seeker's state.
pub struct JobSeeker {
    name: String,
    applicable: Mutex<BTreeMap<u32, String>>,
}

impl JobSeeker {
    /// Creates a seeker with the given display name and no recorded jobs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            applicable: Mutex::new(BTreeMap::new()),
        }
    }

    /// The seeker's display name.
    pub fn seeker_name(&self) -> &str {
        &self.name
    }

    /// Returns a copy of the last received snapshot, keyed 1..N by receipt
    /// order. Empty until the first update arrives.
    pub async fn applicable_jobs(&self) -> BTreeMap<u32, String> {
        self.applicable.lock().await.clone()
    }

    /// Returns the last received snapshot as a plain list, in key order.
    pub async fn positions(&self) -> Vec<String> {
        self.applicable.lock().await.values().cloned().collect()
    }
}

#[async_trait]
impl Subscribe for JobSeeker {
    /// Replaces the local record with the incoming snapshot, numbering the
    /// postings from 1 in snapshot order. Keys are never carried over from
    /// a previous update.
    async fn on_update(&self, update: &Update) {
        let mut jobs = self.applicable.lock().await;
        jobs.clear();
        for (n, title) in update.postings().iter().enumerate() {
            jobs.insert(n as u32 + 1, title.clone());
        }
    }

    fn name(&self) -> &'static str {
        "seeker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::UpdateKind;

    #[tokio::test]
    async fn test_starts_with_no_jobs() {
        let seeker = JobSeeker::new("dev-1");
        assert_eq!(seeker.seeker_name(), "dev-1");
        assert!(seeker.applicable_jobs().await.is_empty());
    }

    #[tokio::test]
    async fn test_numbers_snapshot_from_one() {
        let seeker = JobSeeker::new("dev-1");
        let postings = vec!["Java Developer".to_string(), "Web Developer".to_string()];

        seeker
            .on_update(&Update::new(UpdateKind::Posted, &postings))
            .await;

        let jobs = seeker.applicable_jobs().await;
        assert_eq!(jobs.get(&1).map(String::as_str), Some("Java Developer"));
        assert_eq!(jobs.get(&2).map(String::as_str), Some("Web Developer"));
        assert_eq!(jobs.len(), 2);
    }

    #[tokio::test]
    async fn test_renumbers_instead_of_preserving_keys() {
        let seeker = JobSeeker::new("dev-1");
        let two = vec!["First".to_string(), "Second".to_string()];
        let one = vec!["Second".to_string()];

        seeker.on_update(&Update::new(UpdateKind::Posted, &two)).await;
        seeker.on_update(&Update::new(UpdateKind::Removed, &one)).await;

        // "Second" was key 2 before the removal; afterwards it is key 1.
        let jobs = seeker.applicable_jobs().await;
        assert_eq!(jobs.get(&1).map(String::as_str), Some("Second"));
        assert!(!jobs.contains_key(&2));
    }

    #[tokio::test]
    async fn test_empty_snapshot_clears_record() {
        let seeker = JobSeeker::new("dev-1");
        let some = vec!["First".to_string()];

        seeker.on_update(&Update::new(UpdateKind::Posted, &some)).await;
        seeker.on_update(&Update::new(UpdateKind::Removed, &[])).await;

        assert!(seeker.applicable_jobs().await.is_empty());
        assert!(seeker.positions().await.is_empty());
    }
}
