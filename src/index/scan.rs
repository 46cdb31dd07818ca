//! Construction-time directory scan.

use std::path::Path;

use super::IndexError;

/// List the base filenames of the non-directory entries of `dir`.
///
/// Non-recursive: subdirectories are skipped and their contents never
/// visited. Symlinks are kept unless the listing reports them as
/// directories (the entry's own file type is consulted, without
/// following the link). Names that are not valid UTF-8 are skipped
/// with a warning, since the index stores filenames as strings.
///
/// Order is whatever the underlying directory listing provides: not
/// guaranteed sorted, not guaranteed stable across platforms.
pub fn scan_flat(dir: &Path) -> Result<Vec<String>, IndexError> {
    let entries = std::fs::read_dir(dir).map_err(|source| IndexError::Unreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| IndexError::Unreadable {
            path: dir.to_path_buf(),
            source,
        })?;

        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Cannot stat {}: {}", entry.path().display(), e);
                continue;
            }
        };
        if file_type.is_dir() {
            log::trace!("Skipping directory: {}", entry.path().display());
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => files.push(name),
            Err(name) => {
                log::warn!("Skipping non-UTF-8 filename: {}", name.to_string_lossy());
            }
        }
    }

    Ok(files)
}
