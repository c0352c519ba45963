//! Error types used by the console driver.
//!
//! The board itself has no error taxonomy: every publisher operation is
//! total (removing an absent posting and unsubscribing an unknown handle
//! are silent no-ops). That is deliberate policy, not an oversight - the
//! operations mirror a registry whose misses simply leave state unchanged.
//!
//! This module defines the two enums the console layer needs:
//!
//! - [`ConsoleError`] — I/O failures while reading or writing the terminal.
//! - [`ChoiceError`] — an invalid menu selection (handled with a retry
//!   prompt, surfaced as a type so parsing stays testable).
//!
//! Both types provide helper methods (`as_label`, `as_message`) for
//! logging/diagnostics.

use std::io;
use thiserror::Error;

/// # Errors produced by console I/O.
///
/// These represent failures of the terminal streams themselves, not of the
/// operator's input (bad input is a [`ChoiceError`] and re-prompts).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Reading a line from the input stream failed.
    #[error("failed to read input: {source}")]
    Read {
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing to the output stream failed.
    #[error("failed to write output: {source}")]
    Write {
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl ConsoleError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use std::io;
    /// use jobboard::ConsoleError;
    ///
    /// let err = ConsoleError::Read { source: io::Error::new(io::ErrorKind::Other, "gone") };
    /// assert_eq!(err.as_label(), "console_read");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConsoleError::Read { .. } => "console_read",
            ConsoleError::Write { .. } => "console_write",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ConsoleError::Read { source } => format!("read: {source}"),
            ConsoleError::Write { source } => format!("write: {source}"),
        }
    }
}

/// # Invalid menu selection.
///
/// Produced when the operator's input is not one of the menu options.
/// The driver handles it by printing a hint and re-prompting; the loop
/// never terminates on bad input.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChoiceError {
    /// The input did not match any menu option.
    #[error("invalid choice {input:?}; enter a number from 1-3")]
    Invalid {
        /// The rejected input, as typed (trimmed).
        input: String,
    },
}

impl ChoiceError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            ChoiceError::Invalid { .. } => "invalid_choice",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ChoiceError::Invalid { input } => format!("invalid choice: {input:?}"),
        }
    }
}
