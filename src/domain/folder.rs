//! Folder records used while searching and listing

/// A folder handle together with whatever names could be resolved for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRecord<F> {
    pub account_name: Option<String>,
    pub folder: F,
    pub folder_name: Option<String>,
}

impl<F> FolderRecord<F> {
    pub fn new(account_name: Option<String>, folder: F, folder_name: Option<String>) -> Self {
        FolderRecord {
            account_name,
            folder,
            folder_name,
        }
    }

    /// True when either name is missing
    pub fn is_partial(&self) -> bool {
        self.account_name.is_none() || self.folder_name.is_none()
    }
}
