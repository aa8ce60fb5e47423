mod batch;
mod mem;
mod store;

pub use batch::{BatchOptions, append_in_batches};
pub use mem::{MemoryBook, MemorySheet, MemoryStore};
pub use store::{Row, SheetsClient, Spreadsheet, StoreError, Worksheet};
