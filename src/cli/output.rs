//! Output formatting utilities

use crate::application::FolderListing;

/// Shown when the command is run without arguments
pub const USAGE: &str = "\
notemirror - Mirror a notes folder tree onto the file system

Usage:
  notemirror list                              List top-level folders
  notemirror export <FOLDER> <OUTPUT_DIR>      Export a folder from any account
  notemirror export <ACCOUNT:FOLDER> <OUTPUT_DIR>
                                               Export a folder from one account

Use --help for all options";

const UNKNOWN_ACCOUNT: &str = "[Account Unknown]";
const UNKNOWN_FOLDER: &str = "[Folder Unknown]";

/// Format a folder listing for display, one folder per line
pub fn format_folder_list<F>(listing: &FolderListing<F>) -> String {
    if listing.records.is_empty() && listing.inaccessible == 0 {
        return "No folders found\n".to_string();
    }

    let mut output = String::new();
    for record in &listing.records {
        let line = match (&record.account_name, &record.folder_name) {
            (Some(account), Some(folder)) => format!("{} > {}", account, folder),
            (None, Some(folder)) => format!("{} > {}", UNKNOWN_ACCOUNT, folder),
            (Some(account), None) => format!("{} > {}", account, UNKNOWN_FOLDER),
            (None, None) => "Warning: found a folder whose name and account could not be read"
                .to_string(),
        };
        output.push_str(&line);
        output.push('\n');
    }

    if listing.inaccessible > 0 {
        output.push_str(&format!(
            "\n{} items could not be fully accessed\n",
            listing.inaccessible
        ));
    }
    output
}
