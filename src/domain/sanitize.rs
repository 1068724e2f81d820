//! File-system-safe names for exported folders and notes

/// Characters that are replaced with `-` in path components
const RESERVED_CHARS: [char; 12] = [':', '/', '\\', '*', '?', '"', '<', '>', '|', '\r', '\n', '\t'];

/// Fallback used when a note title sanitizes to nothing
pub const UNTITLED: &str = "untitled";

/// Fallback used when a folder name sanitizes to nothing
pub const UNTITLED_FOLDER: &str = "untitled folder";

/// Make a single path component safe to create on common file systems.
///
/// Reserved characters become `-`, surrounding spaces are trimmed, and any
/// trailing run of dots and spaces is removed. The result may be empty.
pub fn sanitize_path_component(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if RESERVED_CHARS.contains(&c) { '-' } else { c })
        .collect();

    replaced
        .trim_matches(' ')
        .trim_end_matches(['.', ' '])
        .to_string()
}

/// Sanitize a note title for use as a file name, never returning an empty string
pub fn sanitize_filename(name: &str) -> String {
    let sanitized = sanitize_path_component(name);
    if sanitized.is_empty() {
        UNTITLED.to_string()
    } else {
        sanitized
    }
}
