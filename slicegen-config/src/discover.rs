//! Discovery of entity configs in a configuration directory.

use std::path::Path;

/// List the `.json` config stems present in `dir`, sorted.
///
/// Unreadable directories yield an empty list; discovery is a recovery aid,
/// not a required step.
pub fn available_configs(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut stems: Vec<String> = entries
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path.file_stem()?.to_string_lossy().into_owned())
            } else {
                None
            }
        })
        .collect();
    stems.sort();
    stems
}
