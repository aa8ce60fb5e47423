pub mod codec;
mod diff;
mod snapshot;

pub use diff::{ChangeSet, diff};
pub use snapshot::{Snapshot, entry_key};
