use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, WriteContentError>;

/// Replaces the contents of `file_path` with `content`, creating the file if
/// it does not exist yet.
///
/// The new contents go to a hidden temporary file next to `file_path` which
/// is then renamed over it, so readers never observe a half-written file.
/// The temporary is deleted on every failure path.
///
/// Runs synchronously, so a task calling it is never cancelled between
/// creating the temporary and persisting it.
pub(crate) fn write_content<P: AsRef<Path>>(
    file_path: P,
    content: &str,
) -> Result<()> {
    let file_path = file_path.as_ref();
    let file_name = file_path.file_name().ok_or_else(
        || WriteContentError::PathHasNoFileName(file_path.to_path_buf())
    )?;
    let dir = match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let to_write_error = |err: std::io::Error| WriteContentError::FileWriteError {
        file_path: file_path.to_path_buf(),
        err,
    };

    let mut tmp_prefix = OsString::from(".");
    tmp_prefix.push(file_name);
    tmp_prefix.push(".");
    let mut tmp_file = tempfile::Builder::new()
        .prefix(&tmp_prefix)
        .suffix(TMP_SUFFIX)
        .tempfile_in(dir)
        .map_err(to_write_error)?;

    tmp_file.write_all(content.as_bytes()).map_err(to_write_error)?;
    tmp_file.persist(file_path).map_err(|err| {
        tracing::debug!("Failed to move {:?} over {file_path:?}.", err.file.path());
        to_write_error(err.error)
    })?;

    Ok(())
}

/// Suffix of the temporary files [`write_content`] creates.
pub(crate) const TMP_SUFFIX: &str = ".tmp";

#[derive(Debug, Error)]
pub enum WriteContentError {
    #[error("Failed to write {file_path:?}: {err}")]
    FileWriteError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("{0:?} does not name a file")]
    PathHasNoFileName(PathBuf),
}
impl WriteContentError {
    pub fn file_path(&self) -> &Path {
        match self {
            Self::FileWriteError { file_path, .. }
            | Self::PathHasNoFileName(file_path) => file_path.as_path(),
        }
    }
}
