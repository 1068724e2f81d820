//! Infrastructure layer - Note stores, output tree, config and logging

pub mod apple_notes;
pub mod config;
pub mod logging;
pub mod output;
pub mod snapshot;
pub mod source;

pub use apple_notes::{AppleNotesSource, NotesId, Osascript, ScriptRunner};
pub use config::Config;
pub use output::{FileSystemOutput, OutputWriter};
pub use snapshot::{SnapshotAccount, SnapshotFolder, SnapshotNote, SnapshotSource};
pub use source::NotesSource;
