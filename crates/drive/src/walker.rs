use std::collections::VecDeque;

use chrono::NaiveDateTime;
use log::{debug, error, warn};

use crate::{
    listing::{DriveItem, ListingService},
    record::{CREATED_UNAVAILABLE, EntryKind, FileRecord, OWNER_UNKNOWN},
};

/// Timestamp format the listing service reports.
const SOURCE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Format used for the `created_at` column.
const DISPLAY_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// One container whose children are still being emitted.
struct Frame {
    location: String,
    items: VecDeque<DriveItem>,
}

/// Flatten the container tree rooted at `root_id` into inventory records.
///
/// Depth-first pre-order matching naive recursion: a folder's own record is
/// appended first, then its whole subtree, then its later siblings. The
/// walk runs on an explicit frame stack, so hierarchy depth is bounded by
/// heap memory rather than the call stack.
///
/// The walk never fails as a whole; a listing failure truncates the
/// affected container only (see [`list_children_all`]).
pub fn walk<L: ListingService>(svc: &L, root_id: &str, root_label: &str) -> Vec<FileRecord> {
    debug!("[walk] starting at container {root_id}");

    let mut records = Vec::new();
    let mut stack = vec![Frame {
        location: root_label.to_owned(),
        items: list_children_all(svc, root_id).into(),
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(item) = frame.items.pop_front() else {
            stack.pop();
            continue;
        };
        let location = frame.location.clone();

        // Fetch the subtree frame before `item.name` moves into the record.
        let child_frame = item.is_folder().then(|| Frame {
            location: format!("{}/{}", location, item.name),
            items: list_children_all(svc, &item.id).into(),
        });

        records.push(FileRecord {
            kind: if item.is_folder() {
                EntryKind::Folder
            } else {
                EntryKind::File
            },
            owner: item
                .owners
                .first()
                .map(|owner| owner.email.clone())
                .unwrap_or_else(|| OWNER_UNKNOWN.to_owned()),
            created_at: format_created(item.created_time.as_deref()),
            location,
            name: item.name,
        });

        if let Some(child) = child_frame {
            stack.push(child);
        }
    }

    records
}

/// Drain every page of `container_id`'s children.
///
/// A failed page request is logged and ends the listing for this container
/// only. Items from pages already fetched are kept, so a mid-listing
/// failure truncates the subtree rather than discarding it, and sibling
/// containers are unaffected.
fn list_children_all<L: ListingService>(svc: &L, container_id: &str) -> Vec<DriveItem> {
    let mut items = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = match svc.list_children(container_id, page_token.as_deref()) {
            Ok(page) => page,
            Err(e) => {
                error!("[walk] list_children({container_id}) failed: {e}");
                break;
            }
        };

        items.extend(page.items);

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    items
}

/// Reformat a creation timestamp for display.
///
/// A value that does not match the source format is kept verbatim rather
/// than dropped; the service occasionally reports timestamps without
/// fractional seconds or in non-UTC shapes.
fn format_created(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return CREATED_UNAVAILABLE.to_owned();
    };

    match NaiveDateTime::parse_from_str(raw, SOURCE_TIME_FORMAT) {
        Ok(parsed) => parsed.format(DISPLAY_TIME_FORMAT).to_string(),
        Err(e) => {
            warn!("[walk] could not format creation time {raw}: {e}");
            raw.to_owned()
        }
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
