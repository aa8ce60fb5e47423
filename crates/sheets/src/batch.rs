use std::{thread, time::Duration};

use log::{error, info};

use crate::store::{Row, Worksheet};

/// Chunking and throttling for bulk appends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Rows per append request.
    pub size: usize,
    /// Pause after each successful append; keeps the run under the remote
    /// write quota. Not a correctness requirement.
    pub pause: Duration,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            size: 100,
            pause: Duration::from_secs(1),
        }
    }
}

impl BatchOptions {
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// No pause between chunks; for tests and in-memory targets.
    pub fn unthrottled(size: usize) -> Self {
        Self {
            size,
            pause: Duration::ZERO,
        }
    }
}

/// Append `rows` to `sheet` in chunks of `options.size`.
///
/// A failed chunk is logged and skipped; chunks already appended stay
/// committed. There is no rollback, matching the append-only nature of
/// the store.
pub fn append_in_batches<W: Worksheet>(sheet: &W, rows: &[Row], options: &BatchOptions) {
    let size = options.size.max(1);

    for (index, chunk) in rows.chunks(size).enumerate() {
        let first = index * size + 1;
        let last = first + chunk.len() - 1;

        match sheet.append_rows(chunk) {
            Ok(()) => {
                info!("appended rows {first} to {last}");
                if !options.pause.is_zero() {
                    thread::sleep(options.pause);
                }
            }
            Err(e) => error!("failed to append rows {first} to {last}: {e}"),
        }
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
