//! In-memory tabular store for tests and dry runs.
//!
//! Single-threaded by design, like the audit job itself; handles share
//! state through `Rc<RefCell<_>>` so a cloned store observes the same
//! spreadsheets.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::store::{Row, SheetsClient, Spreadsheet, StoreError, Worksheet};

#[derive(Debug, Default)]
struct BookData {
    sheets: HashMap<String, Vec<Row>>,
}

#[derive(Debug, Default)]
struct StoreData {
    books: HashMap<String, BookData>,
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    data: Rc<RefCell<StoreData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an empty spreadsheet so `open_by_key` can find it.
    pub fn create_spreadsheet(&self, key: &str) {
        self.data
            .borrow_mut()
            .books
            .entry(key.to_owned())
            .or_default();
    }
}

impl SheetsClient for MemoryStore {
    type Book = MemoryBook;

    fn open_by_key(&self, key: &str) -> Result<MemoryBook, StoreError> {
        if !self.data.borrow().books.contains_key(key) {
            return Err(StoreError::SpreadsheetNotFound(key.to_owned()));
        }

        Ok(MemoryBook {
            key: key.to_owned(),
            data: Rc::clone(&self.data),
        })
    }
}

#[derive(Debug)]
pub struct MemoryBook {
    key: String,
    data: Rc<RefCell<StoreData>>,
}

impl MemoryBook {
    /// Worksheet titles in sorted order; handy in assertions.
    pub fn worksheet_titles(&self) -> Vec<String> {
        let data = self.data.borrow();
        let mut titles: Vec<String> = data
            .books
            .get(&self.key)
            .map(|book| book.sheets.keys().cloned().collect())
            .unwrap_or_default();
        titles.sort();
        titles
    }

    fn sheet_handle(&self, title: &str) -> MemorySheet {
        MemorySheet {
            book_key: self.key.clone(),
            title: title.to_owned(),
            data: Rc::clone(&self.data),
        }
    }
}

impl Spreadsheet for MemoryBook {
    type Sheet = MemorySheet;

    fn worksheet(&self, title: &str) -> Result<MemorySheet, StoreError> {
        let data = self.data.borrow();
        let book = data
            .books
            .get(&self.key)
            .ok_or_else(|| StoreError::SpreadsheetNotFound(self.key.clone()))?;

        if !book.sheets.contains_key(title) {
            return Err(StoreError::WorksheetNotFound(title.to_owned()));
        }

        Ok(self.sheet_handle(title))
    }

    fn add_worksheet(&self, title: &str) -> Result<MemorySheet, StoreError> {
        let mut data = self.data.borrow_mut();
        let book = data
            .books
            .get_mut(&self.key)
            .ok_or_else(|| StoreError::SpreadsheetNotFound(self.key.clone()))?;

        if book.sheets.contains_key(title) {
            return Err(StoreError::WorksheetExists(title.to_owned()));
        }

        book.sheets.insert(title.to_owned(), Vec::new());

        Ok(self.sheet_handle(title))
    }
}

#[derive(Debug)]
pub struct MemorySheet {
    book_key: String,
    title: String,
    data: Rc<RefCell<StoreData>>,
}

impl MemorySheet {
    fn with_rows<T>(&self, f: impl FnOnce(&mut Vec<Row>) -> T) -> Result<T, StoreError> {
        let mut data = self.data.borrow_mut();
        let rows = data
            .books
            .get_mut(&self.book_key)
            .and_then(|book| book.sheets.get_mut(&self.title))
            .ok_or_else(|| StoreError::WorksheetNotFound(self.title.clone()))?;

        Ok(f(rows))
    }
}

impl Worksheet for MemorySheet {
    fn all_rows(&self) -> Result<Vec<Row>, StoreError> {
        self.with_rows(|rows| rows.clone())
    }

    fn append_row(&self, row: Row) -> Result<(), StoreError> {
        self.with_rows(|rows| rows.push(row))
    }

    fn append_rows(&self, new_rows: &[Row]) -> Result<(), StoreError> {
        self.with_rows(|rows| rows.extend_from_slice(new_rows))
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.with_rows(|rows| rows.clear())
    }
}

#[cfg(test)]
#[path = "mem_tests.rs"]
mod tests;
