//! One-shot audit run: walk the remote folder tree, diff the inventory
//! against the persisted baseline, record changes, rewrite the baseline.
//!
//! The listing service and tabular store are injected; this crate never
//! talks to a real API itself.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::{error, info};

use vigia_drive::{ListingService, walk};
use vigia_runtime::AuditSettings;
use vigia_sheets::{
    BatchOptions, SheetsClient, Spreadsheet, StoreError, Worksheet, append_in_batches,
};
use vigia_snapshot::{ChangeSet, Snapshot, codec, diff};

/// Run parameters, resolved before execution starts.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub root_folder_id: String,
    /// Location value assigned to the root's direct children.
    pub root_label: String,
    pub spreadsheet_id: String,
    pub batch: BatchOptions,
}

impl AuditConfig {
    pub fn from_settings(settings: &AuditSettings) -> Self {
        Self {
            root_folder_id: settings.root_folder_id.clone(),
            root_label: settings.root_label.clone(),
            spreadsheet_id: settings.spreadsheet_id.clone(),
            batch: BatchOptions::with_size(settings.batch_size),
        }
    }
}

/// What one run found and did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOutcome {
    /// Entries the walk inventoried.
    pub inventoried: usize,
    pub added: usize,
    pub removed: usize,
    /// True when this run created the snapshot sheet; there was no
    /// baseline to diff against.
    pub first_run: bool,
}

/// Title of the change-log sheet for a run stamped at `stamp`.
pub fn change_log_title(stamp: DateTime<Local>) -> String {
    format!(
        "{}{}",
        codec::CHANGE_LOG_TITLE_PREFIX,
        stamp.format("%Y-%m-%d_%H-%M-%S")
    )
}

/// Execute one audit run.
///
/// Only two failures abort the run: the spreadsheet cannot be opened, or
/// the snapshot sheet cannot be read or created. Everything else (listing
/// failures, write failures, change-sheet creation failures) degrades and
/// is reported through the log.
pub fn run_audit<L, C>(listing: &L, client: &C, config: &AuditConfig) -> Result<AuditOutcome>
where
    L: ListingService,
    C: SheetsClient,
{
    info!("walking remote folder {}", config.root_folder_id);
    let records = walk(listing, &config.root_folder_id, &config.root_label);
    info!("inventoried {} entries", records.len());

    let book = client
        .open_by_key(&config.spreadsheet_id)
        .with_context(|| format!("Failed to open spreadsheet {}", config.spreadsheet_id))?;

    let snapshot_sheet = match book.worksheet(codec::SNAPSHOT_SHEET_TITLE) {
        Ok(sheet) => sheet,
        Err(StoreError::WorksheetNotFound(_)) => {
            // First run: persist the baseline, nothing to compare yet.
            let sheet = book
                .add_worksheet(codec::SNAPSHOT_SHEET_TITLE)
                .context("Failed to create snapshot sheet")?;
            append_in_batches(&sheet, &codec::encode(&records), &config.batch);
            info!("created snapshot sheet; no baseline to compare on the first run");

            return Ok(AuditOutcome {
                inventoried: records.len(),
                added: 0,
                removed: 0,
                first_run: true,
            });
        }
        Err(e) => return Err(e).context("Failed to fetch snapshot sheet"),
    };

    let previous_rows = snapshot_sheet
        .all_rows()
        .context("Failed to read snapshot sheet")?;
    let previous = codec::decode(&previous_rows);
    let current = Snapshot::from_records(records.iter().cloned());

    let changes = diff(&previous, &current);
    info!(
        "detected {} added and {} removed entries",
        changes.added.len(),
        changes.removed.len()
    );

    if changes.is_empty() {
        info!("no changes detected");
    } else {
        record_changes(&book, &changes, &config.batch);
    }

    // New baseline for the next run. A failed clear keeps the old baseline
    // instead of mixing two inventories in one sheet.
    match snapshot_sheet.clear() {
        Ok(()) => {
            append_in_batches(&snapshot_sheet, &codec::encode(&records), &config.batch);
            info!("snapshot updated with {} records", records.len());
        }
        Err(e) => error!("failed to clear snapshot sheet, keeping previous baseline: {e}"),
    }

    Ok(AuditOutcome {
        inventoried: records.len(),
        added: changes.added.len(),
        removed: changes.removed.len(),
        first_run: false,
    })
}

/// Write the change log to a fresh per-run sheet. Failure to create the
/// sheet loses this run's log but never the baseline update.
fn record_changes<B: Spreadsheet>(book: &B, changes: &ChangeSet, batch: &BatchOptions) {
    let title = change_log_title(Local::now());

    match book.add_worksheet(&title) {
        Ok(sheet) => {
            append_in_batches(&sheet, &codec::encode_changes(changes), batch);
            info!("recorded changes in sheet `{title}`");
        }
        Err(e) => error!("failed to create change sheet `{title}`: {e}"),
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
