use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::DirEntry;
use walkdir::WalkDir;

/// Name of the files that get a generated companion.
pub const QUERY_FILE_NAME: &str = "queries.graphql";

/// Recursively finds every file named [`QUERY_FILE_NAME`] at or below `root`.
///
/// Directories whose name appears in `ignored_dir_names` are not descended
/// into. The returned paths are sorted.
pub fn find_query_files(
    root: impl AsRef<Path>,
    ignored_dir_names: &[String],
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let root = root.as_ref();
    tracing::debug!("Scanning {root:?} for `{QUERY_FILE_NAME}` files...");

    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_ignored_dir(entry, ignored_dir_names));

    let mut file_paths = vec![];
    for entry in walker {
        let entry = entry.map_err(|err| DiscoveryError {
            root: root.to_path_buf(),
            err,
        })?;

        let path = entry.path();
        if entry.file_type().is_file() && entry.file_name() == QUERY_FILE_NAME {
            tracing::trace!("Found query file at {path:?}.");
            file_paths.push(path.to_path_buf());
        } else {
            tracing::trace!("Skipping {path:?}.");
        }
    }

    file_paths.sort();
    tracing::debug!("Found {} `{QUERY_FILE_NAME}` files.", file_paths.len());
    Ok(file_paths)
}

fn is_ignored_dir(entry: &DirEntry, ignored_dir_names: &[String]) -> bool {
    // Never prune the root itself, even if it happens to share a name with
    // an ignored directory.
    entry.depth() > 0
        && entry.file_type().is_dir()
        && ignored_dir_names.iter().any(|name| entry.file_name() == name.as_str())
}

#[derive(Debug, Error)]
#[error("Failed to scan {root:?} for query files: {err}")]
pub struct DiscoveryError {
    pub root: PathBuf,
    pub err: walkdir::Error,
}
