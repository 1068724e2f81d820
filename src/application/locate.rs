//! Locate folder use case
//!
//! Folders are searched level by level across the whole folder forest. The
//! first folder whose name matches exactly wins, so a shallow match always
//! beats a deeper one, and among folders at the same depth the store's own
//! enumeration order decides. An absent folder is `None`, never an error.

use crate::domain::FolderSpec;
use crate::infrastructure::NotesSource;
use tracing::{debug, warn};

/// Find the first folder named `target` in any account
pub fn find_by_name<S: NotesSource>(source: &S, target: &str) -> Option<S::Folder> {
    let accounts = match source.list_accounts() {
        Ok(accounts) => accounts,
        Err(e) => {
            warn!(context = "accounts", error = %e, "could not enumerate accounts");
            return None;
        }
    };

    let mut queue = Vec::new();
    for account in &accounts {
        match source.list_top_folders(account) {
            Ok(folders) => queue.extend(folders),
            Err(e) => {
                let account_name = source.account_name(account).ok();
                warn!(
                    account = account_name.as_deref().unwrap_or("<unknown>"),
                    context = "folders",
                    error = %e,
                    "skipping account whose folders could not be listed"
                );
            }
        }
    }

    search_bfs(source, queue, target)
}

/// Find the first folder named `target` in the first account named `account_name`
pub fn find_by_account_and_name<S: NotesSource>(
    source: &S,
    account_name: &str,
    target: &str,
) -> Option<S::Folder> {
    let accounts = match source.list_accounts() {
        Ok(accounts) => accounts,
        Err(e) => {
            warn!(context = "accounts", error = %e, "could not enumerate accounts");
            return None;
        }
    };

    let account = accounts.iter().find(|account| match source.account_name(account) {
        Ok(name) => name == account_name,
        Err(e) => {
            warn!(context = "account name", error = %e, "skipping unreadable account");
            false
        }
    })?;

    match source.list_top_folders(account) {
        Ok(folders) => search_bfs(source, folders, target),
        Err(e) => {
            warn!(
                account = account_name,
                context = "folders",
                error = %e,
                "could not list folders of account"
            );
            None
        }
    }
}

/// Resolve a parsed folder spec to a folder
pub fn locate<S: NotesSource>(source: &S, spec: &FolderSpec) -> Option<S::Folder> {
    match spec {
        FolderSpec::Any { folder } => find_by_name(source, folder),
        FolderSpec::InAccount { account, folder } => {
            find_by_account_and_name(source, account, folder)
        }
    }
}

/// Breadth-first search for a folder named `target`, starting from `queue`.
///
/// Folders whose name cannot be read never match but their children are
/// still searched. Folders whose children cannot be listed are skipped.
pub fn search_bfs<S: NotesSource>(
    source: &S,
    mut queue: Vec<S::Folder>,
    target: &str,
) -> Option<S::Folder> {
    let mut depth = 0usize;

    while !queue.is_empty() {
        debug!(depth, folders = queue.len(), "searching level");

        // Match against the whole level before descending
        let mut level = Vec::with_capacity(queue.len());
        for folder in queue {
            match source.folder_name(&folder) {
                Ok(name) if name == target => return Some(folder),
                Ok(_) => {}
                Err(e) => {
                    warn!(depth, context = "folder name", error = %e, "unreadable folder name");
                }
            }
            level.push(folder);
        }

        let mut next = Vec::new();
        for folder in &level {
            match source.list_subfolders(folder) {
                Ok(children) => next.extend(children),
                Err(e) => {
                    let name = source.folder_name(folder).ok();
                    warn!(
                        folder = name.as_deref().unwrap_or("<unknown>"),
                        context = "subfolders",
                        error = %e,
                        "skipping folder whose subfolders could not be listed"
                    );
                }
            }
        }

        queue = next;
        depth += 1;
    }

    None
}
