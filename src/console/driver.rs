//! # Interactive menu loop.
//!
//! [`run`] drives a [`JobBoard`] from a line-oriented console. It is generic
//! over the streams so tests can feed it byte buffers; the demo binary wires
//! it to stdin/stdout.
//!
//! ## Flow
//! ```text
//! loop {
//!   ├─► print menu, read selection
//!   ├─ "1" ─► prompt for a title ─► board.post(title)
//!   ├─ "2" ─► prompt for a title ─► board.remove(&title)
//!   ├─ "3" ─► print "Exiting", return Ok(())
//!   └─ else ─► print invalid-choice hint, re-prompt
//! }
//! ```
//!
//! ## Rules
//! - The loop never terminates on bad input; only `3` or end-of-input end it.
//! - End-of-input (EOF) is a clean exit, so piped sessions terminate.
//! - Process termination belongs to the caller: `run` only returns.
//! - Menu selections are trimmed; titles keep their whitespace (only the
//!   line terminator is stripped) and may be empty.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::board::JobBoard;
use crate::error::ConsoleError;

use super::menu::Choice;

const MENU: &str = "\nOptions:\n1. Post a new job\n2. Remove a job\n3. Exit\n";

/// Runs the menu loop until the operator exits or the input stream ends.
///
/// Every `post`/`remove` has completed its subscriber notifications before
/// the next prompt is printed.
///
/// # Errors
/// Returns [`ConsoleError`] only for I/O failures on the streams; operator
/// mistakes are handled with a retry prompt.
pub async fn run<R, W>(board: &mut JobBoard, mut input: R, mut output: W) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        say(&mut output, MENU).await?;
        say(&mut output, "Enter your choice (1-3): ").await?;

        let line = match read_line(&mut input).await? {
            Some(line) => line,
            None => return Ok(()),
        };

        match line.parse::<Choice>() {
            Ok(Choice::Post) => {
                say(&mut output, "Enter new job position: ").await?;
                match read_line(&mut input).await? {
                    Some(title) => board.post(title).await,
                    None => return Ok(()),
                }
            }
            Ok(Choice::Remove) => {
                say(&mut output, "Enter position to remove: ").await?;
                match read_line(&mut input).await? {
                    Some(title) => {
                        board.remove(&title).await;
                    }
                    None => return Ok(()),
                }
            }
            Ok(Choice::Exit) => {
                say(&mut output, "Exiting\n").await?;
                return Ok(());
            }
            Err(err) => {
                say(&mut output, &format!("{err}\n")).await?;
            }
        }
    }
}

/// Writes and flushes, so prompts without a trailing newline appear.
async fn say<W>(output: &mut W, text: &str) -> Result<(), ConsoleError>
where
    W: AsyncWrite + Unpin,
{
    output
        .write_all(text.as_bytes())
        .await
        .map_err(|source| ConsoleError::Write { source })?;
    output
        .flush()
        .await
        .map_err(|source| ConsoleError::Write { source })
}

/// Reads one line, stripping only the terminator. `None` means end-of-input.
async fn read_line<R>(input: &mut R) -> Result<Option<String>, ConsoleError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .await
        .map_err(|source| ConsoleError::Read { source })?;
    if n == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
