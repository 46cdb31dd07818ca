//! In-memory index over the regular files of a single directory.
//!
//! # Overview
//!
//! [`FileIndex`] scans its base directory once at construction
//! (non-recursive), records the base filenames of all regular files, and
//! serves reads from that snapshot. Random extension-filtered reads are
//! accelerated by a lazily-populated cache mapping a lowercased extension
//! to the subset of matching filenames. Directory changes after
//! construction are not reflected.
//!
//! # Architecture
//!
//! - [`scan`]: construction-time directory listing
//! - [`sampler`]: uniform random selection, injectable for tests
//!
//! # Example
//!
//! ```no_run
//! use filepick::index::FileIndex;
//!
//! let index = FileIndex::new("./assets")?;
//! let record = index.read_random_with_ext("png")?;
//! println!("{} ({} bytes)", record.path.display(), record.content.len());
//! # Ok::<(), filepick::index::IndexError>(())
//! ```

pub mod sampler;
pub mod scan;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

pub use sampler::{Sampler, SequenceSampler, ThreadRngSampler};

/// A file read from the index, with its full content.
///
/// Built fresh on every read and moved to the caller; content is never
/// cached by the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Base filename, as discovered at construction or as requested.
    pub name: String,
    /// Absolute path the content was read from.
    pub path: PathBuf,
    /// Raw file content.
    pub content: Vec<u8>,
}

/// Errors produced by [`FileIndex`].
#[derive(thiserror::Error, Debug)]
pub enum IndexError {
    /// The base directory could not be listed.
    #[error("Cannot list directory {path}: {source}")]
    Unreadable {
        /// Directory that failed to list
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The base directory path could not be resolved to an absolute path.
    #[error("Cannot resolve path {path}: {source}")]
    PathResolution {
        /// Path that failed to resolve
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The base directory contains no regular files.
    #[error("No files found in {0}")]
    Empty(PathBuf),

    /// No indexed file carries the requested extension.
    #[error("No files found with extension '{0}'")]
    NoFilesWithExtension(String),

    /// Reading a file's content failed.
    #[error("I/O error for {path}: {source}")]
    Read {
        /// Path that failed to read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// In-memory index over the regular files of a single directory.
///
/// The file list and base path are fixed at construction. The extension
/// cache is guarded by a mutex, held across miss-path scans so concurrent
/// misses on the same extension populate exactly one entry; the index is
/// therefore safe to share across threads.
#[derive(Debug)]
pub struct FileIndex {
    /// Absolute base directory all reads are joined against
    base_path: PathBuf,
    /// Base filenames in scan order
    files: Vec<String>,
    /// Lowercased extension -> matching filenames, populated on demand
    ext_cache: Mutex<HashMap<String, Vec<String>>>,
    /// Uniform index source for the random-pick operations
    sampler: Box<dyn Sampler>,
}

impl FileIndex {
    /// Index `base_path` using the thread-local RNG for selection.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Unreadable`] if the directory cannot be
    /// listed, [`IndexError::PathResolution`] if the path cannot be made
    /// absolute, and [`IndexError::Empty`] if no regular files are found.
    pub fn new(base_path: impl AsRef<Path>) -> Result<Self, IndexError> {
        Self::with_sampler(base_path, Box::new(ThreadRngSampler))
    }

    /// Index `base_path` with a caller-supplied [`Sampler`].
    ///
    /// Lets tests substitute a deterministic source such as
    /// [`SequenceSampler`] for reproducible selection.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`FileIndex::new`].
    pub fn with_sampler(
        base_path: impl AsRef<Path>,
        sampler: Box<dyn Sampler>,
    ) -> Result<Self, IndexError> {
        let base_path = base_path.as_ref();

        let files = scan::scan_flat(base_path)?;
        if files.is_empty() {
            return Err(IndexError::Empty(base_path.to_path_buf()));
        }

        let base_path = base_path
            .canonicalize()
            .map_err(|source| IndexError::PathResolution {
                path: base_path.to_path_buf(),
                source,
            })?;

        log::debug!(
            "Indexed {} files under {}",
            files.len(),
            base_path.display()
        );

        Ok(Self {
            base_path,
            files,
            ext_cache: Mutex::new(HashMap::new()),
            sampler,
        })
    }

    /// Absolute base directory of the index.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Filenames discovered at construction, in scan order.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Whether `filename` was discovered at construction.
    ///
    /// Exact, case-sensitive match; linear scan.
    #[must_use]
    pub fn contains(&self, filename: &str) -> bool {
        self.files.iter().any(|f| f == filename)
    }

    /// Read a file relative to the base directory.
    ///
    /// Membership in the index is deliberately not checked: any joinable
    /// name is attempted, so callers may probe names the scan never
    /// produced.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Read`] wrapping the underlying I/O error.
    pub fn read(&self, filename: &str) -> Result<FileRecord, IndexError> {
        let path = self.base_path.join(filename);
        let content = std::fs::read(&path).map_err(|source| IndexError::Read {
            path: path.clone(),
            source,
        })?;
        Ok(FileRecord {
            name: filename.to_string(),
            path,
            content,
        })
    }

    /// Read a uniformly random file from the index.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Read`] if the underlying read fails, e.g.
    /// the file was deleted after construction.
    pub fn read_random(&self) -> Result<FileRecord, IndexError> {
        let index = self.sampler.pick(self.files.len());
        self.read(&self.files[index])
    }

    /// Read a uniformly random file with the given extension.
    ///
    /// `ext` is matched case-insensitively; a leading `.` is accepted and
    /// stripped, so `"txt"` and `".txt"` are equivalent. The first query
    /// for an extension scans the file list and caches the matches; later
    /// queries pick from the cached subset directly. A query with zero
    /// matches does not create a cache entry.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::NoFilesWithExtension`] when nothing matches,
    /// or [`IndexError::Read`] if the chosen file cannot be read.
    pub fn read_random_with_ext(&self, ext: &str) -> Result<FileRecord, IndexError> {
        let ext = normalize_ext(ext);

        let mut cache = self
            .ext_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(matches) = cache.get(&ext) {
            let name = matches[self.sampler.pick(matches.len())].clone();
            drop(cache);
            return self.read(&name);
        }

        let matches: Vec<String> = self
            .files
            .iter()
            .filter(|name| file_ext(name).as_deref() == Some(ext.as_str()))
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(IndexError::NoFilesWithExtension(ext));
        }

        log::trace!("Caching {} files with extension '{}'", matches.len(), ext);
        let name = matches[self.sampler.pick(matches.len())].clone();
        cache.insert(ext, matches);
        drop(cache);

        self.read(&name)
    }
}

/// Lowercased extension of `name`, if it has one.
///
/// Platform-standard semantics via [`Path::extension`]: the part after
/// the last `.`, with dotfiles like `.gitignore` having no extension.
fn file_ext(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
}

fn normalize_ext(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}
