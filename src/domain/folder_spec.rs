//! Parsing of `Folder` / `Account:Folder` export targets

/// Separator between account and folder in a folder spec
pub const ACCOUNT_SEPARATOR: char = ':';

/// Which folder an export should start from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderSpec {
    /// Search every account for the folder
    Any { folder: String },
    /// Search only the named account
    InAccount { account: String, folder: String },
}

impl FolderSpec {
    /// Parse a folder spec, splitting on `delimiter`.
    ///
    /// Only an input with exactly two segments selects an account; anything
    /// else, including `a:b:c`, is taken as a literal folder name.
    pub fn parse_with(input: &str, delimiter: char) -> FolderSpec {
        let segments = split_records(input, delimiter);
        match segments.as_slice() {
            [account, folder] => FolderSpec::InAccount {
                account: account.to_string(),
                folder: folder.to_string(),
            },
            _ => FolderSpec::Any {
                folder: input.to_string(),
            },
        }
    }

    /// Parse using the default `:` separator
    pub fn parse(input: &str) -> FolderSpec {
        Self::parse_with(input, ACCOUNT_SEPARATOR)
    }

    /// The folder name being looked for
    pub fn folder(&self) -> &str {
        match self {
            FolderSpec::Any { folder } | FolderSpec::InAccount { folder, .. } => folder,
        }
    }
}

/// Split `input` on `delimiter` without any shared state
pub fn split_records(input: &str, delimiter: char) -> Vec<&str> {
    input.split(delimiter).collect()
}

/// Join `parts` with `delimiter`
pub fn join_records<S: AsRef<str>>(parts: &[S], delimiter: char) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        out.push_str(part.as_ref());
    }
    out
}
