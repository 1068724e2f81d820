//! Domain layer - Naming rules and export targets

pub mod folder;
pub mod folder_spec;
pub mod sanitize;
pub mod short_id;

pub use folder::FolderRecord;
pub use folder_spec::{join_records, split_records, FolderSpec};
pub use sanitize::{sanitize_filename, sanitize_path_component, UNTITLED_FOLDER};
pub use short_id::short_id;
