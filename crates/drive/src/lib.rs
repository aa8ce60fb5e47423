mod listing;
mod record;
mod walker;

pub use listing::{DriveItem, FOLDER_MIME_TYPE, ListError, ListingService, Owner, Page};
pub use record::{CREATED_UNAVAILABLE, EntryKind, FileRecord, OWNER_UNKNOWN};
pub use walker::walk;
