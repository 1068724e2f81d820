//! Application layer - Use cases and orchestration

pub mod export;
pub mod list_folders;
pub mod locate;
pub mod probe;

pub use export::{folder_dir_name, note_file_name, ExportService, ExportStats};
pub use list_folders::{list_folders, FolderListing};
pub use locate::{find_by_account_and_name, find_by_name, locate, search_bfs};
pub use probe::probe_access;
