//! # Menu choices for the interactive driver.
//!
//! [`Choice`] is the parsed form of one menu selection. Parsing trims
//! surrounding whitespace and accepts exactly `1`, `2`, or `3`; anything
//! else (including leading zeros or stray text) is a [`ChoiceError`].
//!
//! # Example
//! ```
//! use jobboard::console::Choice;
//!
//! assert_eq!(" 1 ".parse::<Choice>().unwrap(), Choice::Post);
//! assert!("4".parse::<Choice>().is_err());
//! ```

use std::str::FromStr;

use crate::error::ChoiceError;

/// One selection from the driver menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Post a new job (prompts for a title, calls `JobBoard::post`).
    Post,
    /// Remove a job (prompts for a title, calls `JobBoard::remove`).
    Remove,
    /// Leave the loop; the caller owns process termination.
    Exit,
}

impl FromStr for Choice {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Choice::Post),
            "2" => Ok(Choice::Remove),
            "3" => Ok(Choice::Exit),
            other => Err(ChoiceError::Invalid {
                input: other.to_string(),
            }),
        }
    }
}
