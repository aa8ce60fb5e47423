//! Row codec for persisted snapshots and change logs.
//!
//! Column order is the wire contract; snapshots written by earlier
//! deployments must keep decoding, so nothing here may reorder or rename
//! columns. The key derivation lives in [`crate::entry_key`] and is shared
//! with the differ.

use log::warn;

use vigia_drive::{EntryKind, FileRecord};

use crate::{diff::ChangeSet, snapshot::Snapshot};

/// Worksheet holding the baseline between runs.
pub const SNAPSHOT_SHEET_TITLE: &str = "Snapshot";

/// Prefix of per-run change-log worksheet titles.
pub const CHANGE_LOG_TITLE_PREFIX: &str = "Cambios ";

pub const SNAPSHOT_HEADER: [&str; 5] =
    ["Ubicación", "Nombre", "Tipo", "Propietario", "Fecha de Subida"];

pub const CHANGE_LOG_HEADER: [&str; 6] = [
    "Tipo de Cambio",
    "Ubicación",
    "Nombre",
    "Tipo",
    "Propietario",
    "Fecha de Subida",
];

pub const CHANGE_ADDED_LABEL: &str = "Nuevo";
pub const CHANGE_REMOVED_LABEL: &str = "Eliminado";

/// Rebuild a snapshot from persisted rows.
///
/// Row 0 is the header. An empty or header-only table decodes to an empty
/// snapshot, which is the expected first-run shape. Rows with fewer than
/// five columns are skipped with a warning rather than failing the run.
pub fn decode(rows: &[Vec<String>]) -> Snapshot {
    let mut records = Vec::new();

    for row in rows.iter().skip(1) {
        let [location, name, kind, owner, created_at, ..] = row.as_slice() else {
            warn!("skipping malformed snapshot row with {} columns", row.len());
            continue;
        };

        records.push(FileRecord {
            location: location.clone(),
            name: name.clone(),
            kind: EntryKind::from_label(kind),
            owner: owner.clone(),
            created_at: created_at.clone(),
        });
    }

    Snapshot::from_records(records)
}

/// Render records as persisted rows, header first, in input order.
pub fn encode<'a, I>(records: I) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = &'a FileRecord>,
{
    let mut rows = vec![header_row(&SNAPSHOT_HEADER)];
    rows.extend(records.into_iter().map(record_row));
    rows
}

/// Render a change set as change-log rows: header, then additions, then
/// removals.
pub fn encode_changes(changes: &ChangeSet) -> Vec<Vec<String>> {
    let mut rows = vec![header_row(&CHANGE_LOG_HEADER)];

    for record in &changes.added {
        rows.push(change_row(CHANGE_ADDED_LABEL, record));
    }
    for record in &changes.removed {
        rows.push(change_row(CHANGE_REMOVED_LABEL, record));
    }

    rows
}

fn header_row(header: &[&str]) -> Vec<String> {
    header.iter().map(|column| (*column).to_owned()).collect()
}

fn record_row(record: &FileRecord) -> Vec<String> {
    vec![
        record.location.clone(),
        record.name.clone(),
        record.kind.as_label().to_owned(),
        record.owner.clone(),
        record.created_at.clone(),
    ]
}

fn change_row(label: &str, record: &FileRecord) -> Vec<String> {
    let mut row = record_row(record);
    row.insert(0, label.to_owned());
    row
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
