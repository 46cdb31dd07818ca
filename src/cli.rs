//! Command-line interface definitions for filepick.
//!
//! The CLI is glue over [`crate::index`]: it builds a [`FileIndex`]
//! (see [`crate::index::FileIndex`]) for one directory and performs a
//! single operation against it.
//!
//! # Example
//!
//! ```bash
//! # Print a random file from a directory
//! filepick ./assets
//!
//! # Only consider .png files
//! filepick ./assets --ext png
//!
//! # Show what got indexed
//! filepick ./assets --list
//!
//! # Verbose mode for debugging
//! filepick -v ./assets
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Pick a random file from a flat directory and print its content.
///
/// The directory is indexed once, non-recursively; subdirectories are
/// ignored. Picks are uniform over the indexed files, optionally
/// restricted to a file extension.
#[derive(Debug, Parser)]
#[command(name = "filepick")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to index (non-recursive)
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Restrict the pick to files with this extension (case-insensitive)
    #[arg(short, long, value_name = "EXT", conflicts_with_all = ["list", "name"])]
    pub ext: Option<String>,

    /// Print the indexed filenames instead of picking one
    #[arg(short, long)]
    pub list: bool,

    /// Read this specific file instead of picking at random
    #[arg(short, long, value_name = "FILE", conflicts_with = "list")]
    pub name: Option<String>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
