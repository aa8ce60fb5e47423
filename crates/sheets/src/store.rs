use thiserror::Error;

/// One spreadsheet row, leftmost column first.
pub type Row = Vec<String>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("spreadsheet `{0}` not found")]
    SpreadsheetNotFound(String),

    /// Typed so callers can treat a missing worksheet as an expected
    /// condition (first run) rather than a failure.
    #[error("worksheet `{0}` not found")]
    WorksheetNotFound(String),

    #[error("worksheet `{0}` already exists")]
    WorksheetExists(String),

    #[error("sheets backend error: {0}")]
    Backend(String),
}

/// Entry point to the tabular store, mirroring the remote client's
/// client → spreadsheet → worksheet object model.
pub trait SheetsClient {
    type Book: Spreadsheet;

    fn open_by_key(&self, key: &str) -> Result<Self::Book, StoreError>;
}

/// One spreadsheet: a set of titled worksheets.
pub trait Spreadsheet {
    type Sheet: Worksheet;

    /// Look up an existing worksheet. Returns
    /// [`StoreError::WorksheetNotFound`] when the title is absent.
    fn worksheet(&self, title: &str) -> Result<Self::Sheet, StoreError>;

    fn add_worksheet(&self, title: &str) -> Result<Self::Sheet, StoreError>;
}

/// One worksheet. Row order is insertion order; appends go below
/// everything previously written.
pub trait Worksheet {
    fn all_rows(&self) -> Result<Vec<Row>, StoreError>;

    fn append_row(&self, row: Row) -> Result<(), StoreError>;

    fn append_rows(&self, rows: &[Row]) -> Result<(), StoreError>;

    fn clear(&self) -> Result<(), StoreError>;
}
