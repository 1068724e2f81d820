//! List folders use case

use crate::domain::FolderRecord;
use crate::error::Result;
use crate::infrastructure::NotesSource;
use tracing::warn;

/// Every top-level folder, with whatever names could be read
#[derive(Debug)]
pub struct FolderListing<F> {
    pub records: Vec<FolderRecord<F>>,
    /// Accounts and folders that could not be fully read
    pub inaccessible: usize,
}

/// Collect the top-level folders of every account.
///
/// # Errors
///
/// Fails only when the account list itself cannot be read.
pub fn list_folders<S: NotesSource>(source: &S) -> Result<FolderListing<S::Folder>> {
    let accounts = source.list_accounts()?;

    let mut records = Vec::new();
    let mut inaccessible = 0;

    for account in &accounts {
        let account_name = match source.account_name(account) {
            Ok(name) => Some(name),
            Err(e) => {
                warn!(context = "account name", error = %e, "could not read account name");
                None
            }
        };

        let folders = match source.list_top_folders(account) {
            Ok(folders) => folders,
            Err(e) => {
                warn!(
                    account = account_name.as_deref().unwrap_or("<unknown>"),
                    context = "folders",
                    error = %e,
                    "could not list folders"
                );
                inaccessible += 1;
                continue;
            }
        };

        for folder in folders {
            let folder_name = source.folder_name(&folder).ok();
            let record = FolderRecord::new(account_name.clone(), folder, folder_name);
            if record.is_partial() {
                inaccessible += 1;
            }
            records.push(record);
        }
    }

    Ok(FolderListing {
        records,
        inaccessible,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::SnapshotSource;

    #[test]
    fn test_lists_folders_in_account_order() {
        let source = SnapshotSource::from_toml(
            r#"
[[account]]
name = "iCloud"

[[account.folder]]
name = "Journal"

[[account.folder]]
name = "Work"

[[account.folder.folder]]
name = "Nested"

[[account]]
name = "Google"

[[account.folder]]
name = "Work"
"#,
        )
        .unwrap();

        let listing = list_folders(&source).unwrap();

        let names: Vec<(Option<&str>, Option<&str>)> = listing
            .records
            .iter()
            .map(|r| (r.account_name.as_deref(), r.folder_name.as_deref()))
            .collect();
        assert_eq!(
            names,
            vec![
                (Some("iCloud"), Some("Journal")),
                (Some("iCloud"), Some("Work")),
                (Some("Google"), Some("Work")),
            ]
        );
        assert_eq!(listing.inaccessible, 0);
    }

    #[test]
    fn test_counts_partially_readable_items() {
        let source = SnapshotSource::from_toml(
            r#"
[[account]]

[[account.folder]]
name = "Orphan"

[[account.folder]]

[[account]]
name = "Locked"
locked = true
"#,
        )
        .unwrap();

        let listing = list_folders(&source).unwrap();

        assert_eq!(listing.records.len(), 2);
        assert_eq!(listing.records[0].account_name, None);
        assert_eq!(listing.records[0].folder_name.as_deref(), Some("Orphan"));
        assert_eq!(listing.records[1].folder_name, None);
        assert_eq!(listing.inaccessible, 3);
    }
}
