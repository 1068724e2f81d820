//! Note store loaded from a TOML snapshot file
//!
//! A snapshot describes accounts, folders and notes as nested tables. Any
//! name, title or body may be omitted, and folders or accounts may be marked
//! locked, to reproduce the partial access failures of a live store.

use crate::error::{MirrorError, Result};
use crate::infrastructure::NotesSource;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct SnapshotFile {
    #[serde(default, rename = "account")]
    accounts: Vec<AccountEntry>,
}

#[derive(Debug, Deserialize)]
struct AccountEntry {
    name: Option<String>,
    #[serde(default)]
    locked: bool,
    #[serde(default, rename = "folder")]
    folders: Vec<FolderEntry>,
}

#[derive(Debug, Deserialize)]
struct FolderEntry {
    name: Option<String>,
    #[serde(default)]
    notes_locked: bool,
    #[serde(default)]
    subfolders_locked: bool,
    #[serde(default, rename = "note")]
    notes: Vec<NoteEntry>,
    #[serde(default, rename = "folder")]
    folders: Vec<FolderEntry>,
}

#[derive(Debug, Deserialize)]
struct NoteEntry {
    title: Option<String>,
    id: Option<String>,
    body: Option<String>,
}

#[derive(Debug)]
struct AccountNode {
    name: Option<String>,
    locked: bool,
    folders: Vec<usize>,
}

#[derive(Debug)]
struct FolderNode {
    name: Option<String>,
    notes_locked: bool,
    subfolders_locked: bool,
    notes: Vec<usize>,
    children: Vec<usize>,
}

#[derive(Debug)]
struct NoteNode {
    title: Option<String>,
    id: Option<String>,
    body: Option<String>,
}

/// Handle to an account in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapshotAccount(usize);

/// Handle to a folder in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapshotFolder(usize);

/// Handle to a note in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapshotNote(usize);

/// In-memory note store built from a snapshot document
#[derive(Debug, Default)]
pub struct SnapshotSource {
    accounts: Vec<AccountNode>,
    folders: Vec<FolderNode>,
    notes: Vec<NoteNode>,
}

impl SnapshotSource {
    /// Load a snapshot from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MirrorError::Config(format!("Snapshot file not found: {}", path.display()))
            } else {
                MirrorError::Io(e)
            }
        })?;
        Self::from_toml(&contents)
    }

    /// Build a snapshot from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: SnapshotFile = toml::from_str(contents)?;

        let mut source = SnapshotSource::default();
        for account in file.accounts {
            let folders = account
                .folders
                .into_iter()
                .map(|folder| source.insert_folder(folder))
                .collect();
            source.accounts.push(AccountNode {
                name: account.name,
                locked: account.locked,
                folders,
            });
        }
        Ok(source)
    }

    fn insert_folder(&mut self, entry: FolderEntry) -> usize {
        let notes = entry
            .notes
            .into_iter()
            .map(|note| {
                self.notes.push(NoteNode {
                    title: note.title,
                    id: note.id,
                    body: note.body,
                });
                self.notes.len() - 1
            })
            .collect();

        let index = self.folders.len();
        self.folders.push(FolderNode {
            name: entry.name,
            notes_locked: entry.notes_locked,
            subfolders_locked: entry.subfolders_locked,
            notes,
            children: Vec::new(),
        });

        let children: Vec<usize> = entry
            .folders
            .into_iter()
            .map(|child| self.insert_folder(child))
            .collect();
        self.folders[index].children = children;

        index
    }

    fn account(&self, account: &SnapshotAccount) -> Result<&AccountNode> {
        self.accounts
            .get(account.0)
            .ok_or_else(|| MirrorError::Source(format!("no account with index {}", account.0)))
    }

    fn folder(&self, folder: &SnapshotFolder) -> Result<&FolderNode> {
        self.folders
            .get(folder.0)
            .ok_or_else(|| MirrorError::Source(format!("no folder with index {}", folder.0)))
    }

    fn note(&self, note: &SnapshotNote) -> Result<&NoteNode> {
        self.notes
            .get(note.0)
            .ok_or_else(|| MirrorError::Source(format!("no note with index {}", note.0)))
    }
}

fn missing(what: &str) -> MirrorError {
    MirrorError::Source(format!("{} is not readable", what))
}

impl NotesSource for SnapshotSource {
    type Account = SnapshotAccount;
    type Folder = SnapshotFolder;
    type Note = SnapshotNote;

    fn list_accounts(&self) -> Result<Vec<SnapshotAccount>> {
        Ok((0..self.accounts.len()).map(SnapshotAccount).collect())
    }

    fn account_name(&self, account: &SnapshotAccount) -> Result<String> {
        self.account(account)?
            .name
            .clone()
            .ok_or_else(|| missing("account name"))
    }

    fn list_top_folders(&self, account: &SnapshotAccount) -> Result<Vec<SnapshotFolder>> {
        let node = self.account(account)?;
        if node.locked {
            return Err(MirrorError::Source("access to account folders denied".to_string()));
        }
        Ok(node.folders.iter().copied().map(SnapshotFolder).collect())
    }

    fn list_subfolders(&self, folder: &SnapshotFolder) -> Result<Vec<SnapshotFolder>> {
        let node = self.folder(folder)?;
        if node.subfolders_locked {
            return Err(MirrorError::Source("access to subfolders denied".to_string()));
        }
        Ok(node.children.iter().copied().map(SnapshotFolder).collect())
    }

    fn list_notes(&self, folder: &SnapshotFolder) -> Result<Vec<SnapshotNote>> {
        let node = self.folder(folder)?;
        if node.notes_locked {
            return Err(MirrorError::Source("access to notes denied".to_string()));
        }
        Ok(node.notes.iter().copied().map(SnapshotNote).collect())
    }

    fn folder_name(&self, folder: &SnapshotFolder) -> Result<String> {
        self.folder(folder)?
            .name
            .clone()
            .ok_or_else(|| missing("folder name"))
    }

    fn note_title(&self, note: &SnapshotNote) -> Result<String> {
        self.note(note)?
            .title
            .clone()
            .ok_or_else(|| missing("note title"))
    }

    fn note_body(&self, note: &SnapshotNote) -> Result<String> {
        self.note(note)?
            .body
            .clone()
            .ok_or_else(|| missing("note body"))
    }

    fn stable_id(&self, note: &SnapshotNote) -> Option<String> {
        self.note(note).ok().and_then(|node| node.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[[account]]
name = "iCloud"

[[account.folder]]
name = "Journal"

[[account.folder.note]]
title = "Entry"
id = "abc"
body = "<p>hi</p>"

[[account.folder.folder]]
name = "2024"

[[account.folder.folder.note]]
title = ""
id = "xyz"
body = "<p>x</p>"

[[account]]
locked = true
"#;

    #[test]
    fn test_loads_nested_folders_and_notes() {
        let source = SnapshotSource::from_toml(SAMPLE).unwrap();

        let accounts = source.list_accounts().unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(source.account_name(&accounts[0]).unwrap(), "iCloud");

        let top = source.list_top_folders(&accounts[0]).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(source.folder_name(&top[0]).unwrap(), "Journal");

        let notes = source.list_notes(&top[0]).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(source.note_title(&notes[0]).unwrap(), "Entry");
        assert_eq!(source.note_body(&notes[0]).unwrap(), "<p>hi</p>");
        assert_eq!(source.stable_id(&notes[0]).as_deref(), Some("abc"));

        let children = source.list_subfolders(&top[0]).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(source.folder_name(&children[0]).unwrap(), "2024");
        assert!(source.list_subfolders(&children[0]).unwrap().is_empty());
    }

    #[test]
    fn test_missing_fields_fail_individually() {
        let source = SnapshotSource::from_toml(SAMPLE).unwrap();
        let accounts = source.list_accounts().unwrap();

        assert!(matches!(
            source.account_name(&accounts[1]),
            Err(MirrorError::Source(_))
        ));
        assert!(matches!(
            source.list_top_folders(&accounts[1]),
            Err(MirrorError::Source(_))
        ));
    }

    #[test]
    fn test_locked_folder_and_missing_note_fields() {
        let source = SnapshotSource::from_toml(
            r#"
[[account]]
name = "Local"

[[account.folder]]
name = "Private"
notes_locked = true
subfolders_locked = true

[[account.folder]]
name = "Open"

[[account.folder.note]]
"#,
        )
        .unwrap();
        let account = source.list_accounts().unwrap()[0];
        let folders = source.list_top_folders(&account).unwrap();

        assert!(source.list_notes(&folders[0]).is_err());
        assert!(source.list_subfolders(&folders[0]).is_err());

        let notes = source.list_notes(&folders[1]).unwrap();
        assert!(source.note_title(&notes[0]).is_err());
        assert!(source.note_body(&notes[0]).is_err());
        assert_eq!(source.stable_id(&notes[0]), None);
    }

    #[test]
    fn test_empty_document() {
        let source = SnapshotSource::from_toml("").unwrap();
        assert!(source.list_accounts().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_toml() {
        let result = SnapshotSource::from_toml("[[account]\nname = ");
        assert!(matches!(result, Err(MirrorError::TomlDeserialize(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = SnapshotSource::load(&temp.path().join("nope.toml"));
        match result {
            Err(MirrorError::Config(msg)) => assert!(msg.contains("Snapshot file not found")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.toml");
        fs::write(&path, SAMPLE).unwrap();

        let source = SnapshotSource::load(&path).unwrap();
        assert_eq!(source.list_accounts().unwrap().len(), 2);
    }
}
