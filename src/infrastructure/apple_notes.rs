//! Apple Notes integration through AppleScript
//!
//! Each accessor runs one short script via `osascript`. Objects are addressed
//! by their Notes id (`x-coredata://...`), which stays valid across runs and
//! doubles as the note's stable identifier. Scripts that return several values
//! put one per line; splitting happens here, not in AppleScript.

use crate::domain::{join_records, split_records};
use crate::error::{MirrorError, Result};
use crate::infrastructure::NotesSource;
use std::process::Command;

const RECORD_DELIMITER: char = '\n';

/// Runs an AppleScript and returns what it printed
pub trait ScriptRunner {
    fn run(&self, script: &str) -> Result<String>;
}

/// Runs scripts with the system `osascript` binary
#[derive(Debug, Clone, Default)]
pub struct Osascript;

impl ScriptRunner for Osascript {
    fn run(&self, script: &str) -> Result<String> {
        let output = Command::new("osascript")
            .arg("-e")
            .arg(script)
            .output()
            .map_err(|e| MirrorError::Source(format!("Failed to launch osascript: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MirrorError::Source(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        // osascript terminates the printed result with a single newline
        Ok(match stdout.strip_suffix('\n') {
            Some(trimmed) => trimmed.to_string(),
            None => stdout,
        })
    }
}

/// Notes handle: the object id assigned by the Notes application
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotesId(pub String);

/// Reads accounts, folders and notes from the Notes application
#[derive(Debug, Clone, Default)]
pub struct AppleNotesSource<R = Osascript> {
    runner: R,
}

impl AppleNotesSource<Osascript> {
    pub fn new() -> Self {
        AppleNotesSource { runner: Osascript }
    }
}

impl<R: ScriptRunner> AppleNotesSource<R> {
    /// Use a custom script runner
    pub fn with_runner(runner: R) -> Self {
        AppleNotesSource { runner }
    }

    fn tell(&self, lines: &[&str]) -> Result<String> {
        let mut script: Vec<&str> = Vec::with_capacity(lines.len() + 2);
        script.push("tell application \"Notes\"");
        script.extend_from_slice(lines);
        script.push("end tell");
        self.runner.run(&join_records(&script, RECORD_DELIMITER))
    }

    fn property(&self, property: &str, class: &str, id: &NotesId) -> Result<String> {
        let line = format!("get {} of {} id {}", property, class, quote(&id.0));
        self.tell(&[line.as_str()])
    }

    /// Collect the ids of `collection`, optionally keeping only objects for
    /// which `condition` (an expression over `obj`) holds
    fn ids(&self, collection: &str, condition: Option<&str>) -> Result<Vec<NotesId>> {
        let repeat = format!("repeat with obj in {}", collection);
        let append = "set out to out & (id of obj) & linefeed";
        let guarded = condition.map(|c| format!("if {} then {}", c, append));

        let body: &str = guarded.as_deref().unwrap_or(append);
        let output = self.tell(&[
            "set out to \"\"",
            repeat.as_str(),
            body,
            "end repeat",
            "return out",
        ])?;
        Ok(parse_ids(&output))
    }
}

/// Quote a string as an AppleScript literal
fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

fn parse_ids(output: &str) -> Vec<NotesId> {
    split_records(output, RECORD_DELIMITER)
        .into_iter()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| NotesId(line.to_string()))
        .collect()
}

impl<R: ScriptRunner> NotesSource for AppleNotesSource<R> {
    type Account = NotesId;
    type Folder = NotesId;
    type Note = NotesId;

    fn list_accounts(&self) -> Result<Vec<NotesId>> {
        self.ids("accounts", None)
    }

    fn account_name(&self, account: &NotesId) -> Result<String> {
        self.property("name", "account", account)
    }

    fn list_top_folders(&self, account: &NotesId) -> Result<Vec<NotesId>> {
        let collection = format!("folders of account id {}", quote(&account.0));
        self.ids(&collection, Some("class of (container of obj) is account"))
    }

    fn list_subfolders(&self, folder: &NotesId) -> Result<Vec<NotesId>> {
        self.ids(&format!("folders of folder id {}", quote(&folder.0)), None)
    }

    fn list_notes(&self, folder: &NotesId) -> Result<Vec<NotesId>> {
        self.ids(&format!("notes of folder id {}", quote(&folder.0)), None)
    }

    fn folder_name(&self, folder: &NotesId) -> Result<String> {
        self.property("name", "folder", folder)
    }

    fn note_title(&self, note: &NotesId) -> Result<String> {
        self.property("name", "note", note)
    }

    fn note_body(&self, note: &NotesId) -> Result<String> {
        self.property("body", "note", note)
    }

    fn stable_id(&self, note: &NotesId) -> Option<String> {
        Some(note.0.clone())
    }

    fn probe(&self) -> Result<()> {
        self.tell(&["count accounts"]).map(|_| ())
    }
}
