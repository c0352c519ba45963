//! # Board configuration.
//!
//! [`BoardConfig`] defines the board's notification behavior. There is only
//! one knob today: whether removing a title that is not on the board still
//! refreshes subscribers.
//!
//! # Example
//! ```
//! use jobboard::BoardConfig;
//!
//! let mut cfg = BoardConfig::default();
//! cfg.refresh_on_miss = false;
//!
//! assert!(!cfg.refresh_on_miss);
//! ```

/// Configuration for a [`JobBoard`](crate::JobBoard).
#[derive(Clone, Copy, Debug)]
pub struct BoardConfig {
    /// Whether `remove` of an absent title still triggers a full
    /// re-notification.
    ///
    /// `true` keeps the historical behavior of this pattern's well-known
    /// textbook rendition (every removal call refreshes subscribers, hit
    /// or miss); `false` gives the conventional notify-on-change-only
    /// observer.
    pub refresh_on_miss: bool,
}

impl Default for BoardConfig {
    /// Provides a default configuration:
    /// - `refresh_on_miss = true` (every `remove` call notifies)
    fn default() -> Self {
        Self {
            refresh_on_miss: true,
        }
    }
}
