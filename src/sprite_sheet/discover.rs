use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use log::warn;
use tracy_full::zone;

use super::UNKNOWN_IDENTIFIER;
use crate::error::{Error, Result};

/// One logo on disk. The identifier is the file name without its extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub identifier: String,
    pub file_name: String,
    pub path: PathBuf,
}

/// Lists every `*.{extension}` file in `directory`, sorted by file name.
///
/// Fails if the directory can't be read, holds no matching files, or two files
/// share an identifier. `unknown` is reserved for slot 0 and counts as taken.
pub fn discover_sources(directory: &Path, extension: &str) -> Result<Vec<SourceFile>> {
    zone!("discover_sources");
    let entries = fs::read_dir(directory).map_err(|source| Error::SourceDirectory {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::SourceDirectory {
            path: directory.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str().map(str::to_owned) else {
            warn!(
                "Ignoring '{}': file name is not valid UTF-8",
                path.display()
            );
            continue;
        };
        let Some(identifier) = strip_extension(&file_name, extension) else {
            continue;
        };
        sources.push(SourceFile {
            identifier: identifier.to_owned(),
            file_name,
            path,
        });
    }

    if sources.is_empty() {
        return Err(Error::NoSources {
            path: directory.to_path_buf(),
            extension: extension.to_owned(),
        });
    }

    sources.sort_unstable_by(|a, b| a.file_name.cmp(&b.file_name));

    let mut seen = HashSet::from([UNKNOWN_IDENTIFIER]);
    for source in &sources {
        if !seen.insert(source.identifier.as_str()) {
            return Err(Error::DuplicateIdentifier {
                identifier: source.identifier.clone(),
                file_name: source.file_name.clone(),
            });
        }
    }

    Ok(sources)
}

/// `Some("audi")` for `("audi.png", "png")`. A bare `.png` has no identifier.
fn strip_extension<'a>(file_name: &'a str, extension: &str) -> Option<&'a str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || !ext.eq_ignore_ascii_case(extension) {
        return None;
    }
    Some(stem)
}
