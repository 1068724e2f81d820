//! Error types for notemirror

use thiserror::Error;

/// Main error type for notemirror
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("Folder not found: {folder} (in account {account})")]
    AccountFolderNotFound { account: String, folder: String },

    #[error("Notes source error: {0}")]
    Source(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl MirrorError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MirrorError::FolderNotFound(_) | MirrorError::AccountFolderNotFound { .. } => 2,
            MirrorError::Source(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MirrorError::FolderNotFound(folder) => {
                format!(
                    "Folder not found: '{}'\n\n\
                    Suggestions:\n\
                    • Folder names are case-sensitive and must match exactly\n\
                    • Run 'notemirror list' to see the available top-level folders\n\
                    • Use 'Account:Folder' to search a single account",
                    folder
                )
            }
            MirrorError::AccountFolderNotFound { account, folder } => {
                format!(
                    "Folder '{}' not found in account '{}'\n\n\
                    Suggestions:\n\
                    • Account and folder names are case-sensitive\n\
                    • Run 'notemirror list' to see accounts and their folders\n\
                    • Drop the 'Account:' prefix to search every account",
                    folder, account
                )
            }
            MirrorError::Source(msg) => {
                format!(
                    "Notes source error: {}\n\n\
                    Suggestions:\n\
                    • Allow your terminal to control Notes in System Settings > \
                    Privacy & Security > Automation\n\
                    • Make sure the Notes application can be launched\n\
                    • Use --snapshot <FILE> to export from a snapshot instead",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MirrorError
pub type Result<T> = std::result::Result<T, MirrorError>;
