use hashbrown::HashMap;
use log::warn;

use vigia_drive::FileRecord;

/// Dictionary key identifying one inventory entry across runs.
///
/// This rule is shared by the differ and the codec; both sides of a
/// comparison must derive keys identically or the diff is meaningless.
pub fn entry_key(location: &str, name: &str) -> String {
    format!("{location}_{name}")
}

/// Keyed inventory of one run, or of a persisted baseline.
#[derive(Debug, Default, Clone)]
pub struct Snapshot {
    entries: HashMap<String, FileRecord>,
}

impl Snapshot {
    /// Key the given records.
    ///
    /// `(location, name)` is not guaranteed unique remotely (the service
    /// allows same-named siblings). A collision is reported instead of
    /// vanishing silently; the most recent listing wins.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = FileRecord>,
    {
        let mut entries = HashMap::new();

        for record in records {
            let key = entry_key(&record.location, &record.name);
            if let Some(displaced) = entries.insert(key, record) {
                warn!(
                    "duplicate inventory key for `{}` under `{}`; keeping the most recent listing",
                    displaced.name, displaced.location
                );
            }
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&FileRecord> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileRecord)> {
        self.entries.iter().map(|(key, record)| (key.as_str(), record))
    }

    pub fn records(&self) -> impl Iterator<Item = &FileRecord> {
        self.entries.values()
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
