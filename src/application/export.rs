//! Export folder use case
//!
//! Mirrors a folder and everything beneath it into a directory tree. Each
//! folder's notes are written before its subfolders are visited. Any failure
//! below the root directory is logged and skipped so that siblings, cousins
//! and ancestors still complete; nothing is rolled back.

use crate::domain::{sanitize_filename, sanitize_path_component, short_id, UNTITLED_FOLDER};
use crate::error::Result;
use crate::infrastructure::{NotesSource, OutputWriter};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extension of exported note files
pub const NOTE_EXTENSION: &str = "html";

/// Separator between title and short id in note file names
pub const NAME_SEPARATOR: &str = " -- ";

/// Counters collected during one export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub folders_exported: usize,
    pub folders_failed: usize,
    pub notes_exported: usize,
    pub notes_failed: usize,
    /// Note or subfolder listings that could not be read
    pub listings_failed: usize,
    /// Notes written over a file already produced by this export
    pub notes_overwritten: usize,
}

/// File name for a note: `{title} -- {short id}.html`
pub fn note_file_name(title: &str, short_id: &str) -> String {
    format!(
        "{}{}{}.{}",
        sanitize_filename(title),
        NAME_SEPARATOR,
        short_id,
        NOTE_EXTENSION
    )
}

/// Directory name for a folder; never empty, so a folder never merges into its parent
pub fn folder_dir_name(name: &str) -> String {
    let component = sanitize_path_component(name);
    if component.is_empty() {
        warn!(folder = name, fallback = UNTITLED_FOLDER, "folder name is empty once sanitized");
        UNTITLED_FOLDER.to_string()
    } else {
        component
    }
}

struct ExportRun {
    stats: ExportStats,
    written: HashSet<PathBuf>,
}

/// Service for mirroring folders onto the file system
pub struct ExportService<'a, S: NotesSource, W: OutputWriter> {
    source: &'a S,
    writer: &'a W,
}

impl<'a, S: NotesSource, W: OutputWriter> ExportService<'a, S, W> {
    /// Create a new export service
    pub fn new(source: &'a S, writer: &'a W) -> Self {
        ExportService { source, writer }
    }

    /// Export `folder` into `output_root/<sanitized folder_name>`.
    ///
    /// Returns the mirrored root directory and the export counters.
    ///
    /// # Errors
    ///
    /// Returns an error only if the root directory cannot be created.
    pub fn export_folder(
        &self,
        folder: &S::Folder,
        folder_name: &str,
        output_root: &Path,
    ) -> Result<(PathBuf, ExportStats)> {
        let root_dir = output_root.join(folder_dir_name(folder_name));
        let stats = self.export_into(folder, folder_name, &root_dir)?;
        Ok((root_dir, stats))
    }

    /// Export `folder` directly into `output_dir`
    pub fn export_into(
        &self,
        folder: &S::Folder,
        folder_name: &str,
        output_dir: &Path,
    ) -> Result<ExportStats> {
        let mut run = ExportRun {
            stats: ExportStats::default(),
            written: HashSet::new(),
        };

        self.export_recursive(folder, folder_name, output_dir, &mut run)?;
        Ok(run.stats)
    }

    fn export_recursive(
        &self,
        folder: &S::Folder,
        folder_name: &str,
        output_dir: &Path,
        run: &mut ExportRun,
    ) -> Result<()> {
        self.writer.ensure_directory(output_dir)?;
        run.stats.folders_exported += 1;
        debug!(folder = folder_name, dir = %output_dir.display(), "exporting folder");

        self.export_notes(folder, folder_name, output_dir, run);
        self.export_subfolders(folder, folder_name, output_dir, run);
        Ok(())
    }

    fn export_notes(
        &self,
        folder: &S::Folder,
        folder_name: &str,
        output_dir: &Path,
        run: &mut ExportRun,
    ) {
        let notes = match self.source.list_notes(folder) {
            Ok(notes) => notes,
            Err(e) => {
                warn!(folder = folder_name, context = "notes", error = %e, "could not list notes");
                run.stats.listings_failed += 1;
                return;
            }
        };

        for note in &notes {
            let title = match self.source.note_title(note) {
                Ok(title) => title,
                Err(e) => {
                    warn!(folder = folder_name, context = "note", error = %e, "could not read note title");
                    run.stats.notes_failed += 1;
                    continue;
                }
            };

            match self.export_note(note, &title, output_dir) {
                Ok(path) => {
                    run.stats.notes_exported += 1;
                    if !run.written.insert(path.clone()) {
                        run.stats.notes_overwritten += 1;
                        debug!(path = %path.display(), "overwrote note exported earlier in this run");
                    }
                }
                Err(e) => {
                    warn!(
                        folder = folder_name,
                        note = title.as_str(),
                        context = "note",
                        error = %e,
                        "could not export note"
                    );
                    run.stats.notes_failed += 1;
                }
            }
        }
    }

    fn export_note(&self, note: &S::Note, title: &str, output_dir: &Path) -> Result<PathBuf> {
        let body = self.source.note_body(note)?;
        let sid = short_id(self.source.stable_id(note).as_deref());

        let path = output_dir.join(note_file_name(title, &sid));
        self.writer.write_file(&path, body.as_bytes())?;
        Ok(path)
    }

    fn export_subfolders(
        &self,
        folder: &S::Folder,
        folder_name: &str,
        output_dir: &Path,
        run: &mut ExportRun,
    ) {
        let children = match self.source.list_subfolders(folder) {
            Ok(children) => children,
            Err(e) => {
                warn!(
                    folder = folder_name,
                    context = "subfolders",
                    error = %e,
                    "could not list subfolders"
                );
                run.stats.listings_failed += 1;
                return;
            }
        };

        for child in &children {
            if let Err(e) = self.export_child(child, output_dir, run) {
                warn!(
                    parent = folder_name,
                    context = "subfolder",
                    error = %e,
                    "could not export subfolder"
                );
                run.stats.folders_failed += 1;
            }
        }
    }

    fn export_child(&self, child: &S::Folder, parent_dir: &Path, run: &mut ExportRun) -> Result<()> {
        let name = self.source.folder_name(child)?;
        let child_dir = parent_dir.join(folder_dir_name(&name));
        self.writer.ensure_directory(&child_dir)?;
        self.export_recursive(child, &name, &child_dir, run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{FileSystemOutput, SnapshotSource};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_note_file_name() {
        assert_eq!(note_file_name("Entry", "abc"), "Entry -- abc.html");
        assert_eq!(note_file_name("", "1"), "untitled -- 1.html");
        assert_eq!(note_file_name("a/b: c.", "zz"), "a-b- c -- zz.html");
    }

    #[test]
    fn test_folder_dir_name_never_empty() {
        assert_eq!(folder_dir_name("2024"), "2024");
        assert_eq!(folder_dir_name("a/b"), "a-b");
        assert_eq!(folder_dir_name("..."), "untitled folder");
        assert_eq!(folder_dir_name(" . "), "untitled folder");
        assert_eq!(folder_dir_name(""), "untitled folder");
    }

    #[test]
    fn test_export_single_folder() {
        let source = SnapshotSource::from_toml(
            r#"
[[account]]
name = "iCloud"

[[account.folder]]
name = "Inbox"

[[account.folder.note]]
title = "Hello"
id = "abc"
body = "<div>hello</div>"
"#,
        )
        .unwrap();
        let temp = TempDir::new().unwrap();
        let account = source.list_accounts().unwrap()[0];
        let folder = source.list_top_folders(&account).unwrap()[0];

        let service = ExportService::new(&source, &FileSystemOutput);
        let (root, stats) = service.export_folder(&folder, "Inbox", temp.path()).unwrap();

        assert_eq!(root, temp.path().join("Inbox"));
        let file = root.join(format!("Hello -- {}.html", short_id(Some("abc"))));
        assert_eq!(fs::read_to_string(file).unwrap(), "<div>hello</div>");
        assert_eq!(stats.notes_exported, 1);
        assert_eq!(stats.folders_exported, 1);
    }

    #[test]
    fn test_same_title_and_id_overwrites() {
        let source = SnapshotSource::from_toml(
            r#"
[[account]]
name = "iCloud"

[[account.folder]]
name = "Dupes"

[[account.folder.note]]
title = "Same"
id = "one"
body = "first"

[[account.folder.note]]
title = "Same"
id = "one"
body = "second"
"#,
        )
        .unwrap();
        let temp = TempDir::new().unwrap();
        let account = source.list_accounts().unwrap()[0];
        let folder = source.list_top_folders(&account).unwrap()[0];

        let service = ExportService::new(&source, &FileSystemOutput);
        let stats = service.export_into(&folder, "Dupes", temp.path()).unwrap();

        assert_eq!(stats.notes_exported, 2);
        assert_eq!(stats.notes_overwritten, 1);
        let file = temp
            .path()
            .join(format!("Same -- {}.html", short_id(Some("one"))));
        assert_eq!(fs::read_to_string(file).unwrap(), "second");
    }

    #[test]
    fn test_root_directory_failure_is_fatal() {
        let source = SnapshotSource::from_toml(
            "[[account]]\nname = \"a\"\n[[account.folder]]\nname = \"f\"\n",
        )
        .unwrap();
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let account = source.list_accounts().unwrap()[0];
        let folder = source.list_top_folders(&account).unwrap()[0];

        let service = ExportService::new(&source, &FileSystemOutput);
        assert!(service.export_folder(&folder, "f", &blocker).is_err());
    }
}
