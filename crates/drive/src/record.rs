/// Owner shown when the listing carries no owner information.
pub const OWNER_UNKNOWN: &str = "Unknown";

/// Creation time shown when the listing carries no timestamp at all.
pub const CREATED_UNAVAILABLE: &str = "Not available";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File,
}

impl EntryKind {
    /// Label used in persisted rows. The Spanish labels are the wire
    /// contract for snapshots written by earlier deployments.
    pub fn as_label(self) -> &'static str {
        match self {
            EntryKind::Folder => "Carpeta",
            EntryKind::File => "Archivo",
        }
    }

    /// Inverse of [`as_label`](Self::as_label); anything that is not a
    /// folder label decodes as a file.
    pub fn from_label(label: &str) -> Self {
        if label == EntryKind::Folder.as_label() {
            EntryKind::Folder
        } else {
            EntryKind::File
        }
    }
}

/// One inventory entry, produced by the tree walk or decoded from a
/// persisted snapshot row. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Synthetic path of the containing folder. The root folder's direct
    /// children carry the caller-supplied root label.
    pub location: String,
    /// The entry's own name; not unique across locations.
    pub name: String,
    pub kind: EntryKind,
    /// Email of the first listed owner, or [`OWNER_UNKNOWN`].
    pub owner: String,
    /// Display-formatted creation time. Falls back to the raw source value
    /// when it does not parse, and to [`CREATED_UNAVAILABLE`] when absent.
    pub created_at: String,
}
