//! Notes data source abstraction

use crate::error::Result;

/// Read access to a multi-account note store.
///
/// Handles are opaque to callers. Every accessor can fail on its own so that
/// one unreadable item never hides its siblings.
pub trait NotesSource {
    type Account;
    type Folder;
    type Note;

    /// All accounts, in the store's own order
    fn list_accounts(&self) -> Result<Vec<Self::Account>>;

    fn account_name(&self, account: &Self::Account) -> Result<String>;

    /// Folders directly under an account
    fn list_top_folders(&self, account: &Self::Account) -> Result<Vec<Self::Folder>>;

    /// Folders directly under a folder (empty when it has none)
    fn list_subfolders(&self, folder: &Self::Folder) -> Result<Vec<Self::Folder>>;

    fn list_notes(&self, folder: &Self::Folder) -> Result<Vec<Self::Note>>;

    fn folder_name(&self, folder: &Self::Folder) -> Result<String>;

    fn note_title(&self, note: &Self::Note) -> Result<String>;

    /// Note body, exported as-is
    fn note_body(&self, note: &Self::Note) -> Result<String>;

    /// Identifier that stays the same across runs, if the store has one
    fn stable_id(&self, note: &Self::Note) -> Option<String>;

    /// Check that the store can be read at all. Advisory only.
    fn probe(&self) -> Result<()> {
        Ok(())
    }
}
