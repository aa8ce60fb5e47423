use thiserror::Error;

/// Mime type the remote service uses to mark folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub email: String,
}

/// One child entry as reported by the listing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveItem {
    /// Stable remote identifier, used to list the item's own children.
    pub id: String,
    pub name: String,
    /// Type discriminator; compare against [`FOLDER_MIME_TYPE`].
    pub mime_type: String,
    pub owners: Vec<Owner>,
    /// Creation time in `%Y-%m-%dT%H:%M:%S%.fZ`, when the service
    /// reported one.
    pub created_time: Option<String>,
}

impl DriveItem {
    pub fn is_folder(&self) -> bool {
        self.mime_type == FOLDER_MIME_TYPE
    }
}

/// One page of a container listing.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub items: Vec<DriveItem>,
    /// Opaque continuation token; `None` on the last page.
    pub next_page_token: Option<String>,
}

#[derive(Debug, Error)]
#[error("listing failed: {message}")]
pub struct ListError {
    message: String,
}

impl ListError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Paginated, read-only view of a remote container hierarchy.
///
/// Implementations wrap the actual storage API; the walker only ever
/// issues listing calls and never mutates remote state.
pub trait ListingService {
    /// List one page of direct, non-trashed children of `container_id`.
    /// Pass the previous page's continuation token to fetch the next page.
    fn list_children(
        &self,
        container_id: &str,
        page_token: Option<&str>,
    ) -> Result<Page, ListError>;
}
