use super::*;

fn row(columns: &[&str]) -> Row {
    columns.iter().map(|c| (*c).to_owned()).collect()
}

#[test]
fn open_by_key_fails_for_unknown_spreadsheet() {
    let store = MemoryStore::new();

    match store.open_by_key("missing") {
        Err(StoreError::SpreadsheetNotFound(key)) => assert_eq!(key, "missing"),
        other => panic!("expected SpreadsheetNotFound, got {other:?}"),
    }
}

#[test]
fn worksheet_lookup_reports_typed_not_found() {
    let store = MemoryStore::new();
    store.create_spreadsheet("book");
    let book = store.open_by_key("book").unwrap();

    match book.worksheet("Snapshot") {
        Err(StoreError::WorksheetNotFound(title)) => assert_eq!(title, "Snapshot"),
        other => panic!("expected WorksheetNotFound, got {other:?}"),
    }
}

#[test]
fn add_append_and_read_back() {
    let store = MemoryStore::new();
    store.create_spreadsheet("book");
    let book = store.open_by_key("book").unwrap();

    let sheet = book.add_worksheet("Snapshot").unwrap();
    sheet.append_row(row(&["header"])).unwrap();
    sheet
        .append_rows(&[row(&["a", "1"]), row(&["b", "2"])])
        .unwrap();

    assert_eq!(
        sheet.all_rows().unwrap(),
        vec![row(&["header"]), row(&["a", "1"]), row(&["b", "2"])]
    );
}

#[test]
fn clear_empties_but_keeps_the_worksheet() {
    let store = MemoryStore::new();
    store.create_spreadsheet("book");
    let book = store.open_by_key("book").unwrap();

    let sheet = book.add_worksheet("Snapshot").unwrap();
    sheet.append_row(row(&["a"])).unwrap();
    sheet.clear().unwrap();

    assert!(sheet.all_rows().unwrap().is_empty());
    assert!(book.worksheet("Snapshot").is_ok());
}

#[test]
fn duplicate_worksheet_titles_are_rejected() {
    let store = MemoryStore::new();
    store.create_spreadsheet("book");
    let book = store.open_by_key("book").unwrap();

    book.add_worksheet("Snapshot").unwrap();
    assert!(matches!(
        book.add_worksheet("Snapshot"),
        Err(StoreError::WorksheetExists(_))
    ));
}

#[test]
fn cloned_store_shares_state() {
    let store = MemoryStore::new();
    store.create_spreadsheet("book");

    let clone = store.clone();
    let book = clone.open_by_key("book").unwrap();
    book.add_worksheet("Snapshot").unwrap();

    let original_view = store.open_by_key("book").unwrap();
    assert_eq!(original_view.worksheet_titles(), vec!["Snapshot"]);
}

#[test]
fn worksheet_titles_are_sorted() {
    let store = MemoryStore::new();
    store.create_spreadsheet("book");
    let book = store.open_by_key("book").unwrap();

    book.add_worksheet("Snapshot").unwrap();
    book.add_worksheet("Cambios 2024-01-01_00-00-00").unwrap();

    assert_eq!(
        book.worksheet_titles(),
        vec!["Cambios 2024-01-01_00-00-00", "Snapshot"]
    );
}
