use vigia_drive::FileRecord;

use crate::snapshot::Snapshot;

/// Additions and removals between two snapshots.
///
/// A key present on both sides is unchanged even when its attributes
/// differ; there is no attribute-level comparison. A moved or renamed
/// entry therefore shows up as one removal plus one addition.
#[derive(Debug, Default, Clone)]
pub struct ChangeSet {
    /// Present in the current inventory, absent from the baseline.
    pub added: Vec<FileRecord>,
    /// Present in the baseline, absent from the current inventory.
    pub removed: Vec<FileRecord>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Symmetric key difference between the previous baseline and the
/// current inventory. Pure; no I/O, deterministic for a given input
/// iteration order.
pub fn diff(previous: &Snapshot, current: &Snapshot) -> ChangeSet {
    let added = current
        .iter()
        .filter(|(key, _)| !previous.contains_key(key))
        .map(|(_, record)| record.clone())
        .collect();

    let removed = previous
        .iter()
        .filter(|(key, _)| !current.contains_key(key))
        .map(|(_, record)| record.clone())
        .collect();

    ChangeSet { added, removed }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
