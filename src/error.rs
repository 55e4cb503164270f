use std::{io, path::PathBuf, result};

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

/// Errors that abort the whole run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Could not read source directory '{}': {source}", .path.display())]
    SourceDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("No .{extension} files found in '{}'", .path.display())]
    NoSources { path: PathBuf, extension: String },
    #[error("Duplicate identifier '{identifier}' (from '{file_name}')")]
    DuplicateIdentifier {
        identifier: String,
        file_name: String,
    },
    #[error("Failed to write '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to encode PNG '{}': {source}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },
}

/// Errors scoped to a single source image. These are logged and skipped.
#[derive(Error, Debug)]
pub enum ItemError {
    #[error("could not open file: {0}")]
    Open(#[from] io::Error),
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}

