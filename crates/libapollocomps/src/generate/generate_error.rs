use crate::ast;
use crate::generate::DiscoveryError;
use crate::operation::ClassifyError;
use crate::render::RendererConfigError;
use crate::ReadContentError;
use crate::WriteContentError;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// The first failure encountered while generating.
///
/// Every variant is fatal to the invocation. A file without any operations
/// is not an error; see [`FileOutcome::Empty`](crate::generate::FileOutcome::Empty).
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid classification in {file_path:?}: {err}")]
    Classify {
        file_path: PathBuf,
        err: ClassifyError,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] RendererConfigError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("Don't know where to write the output for {0:?}")]
    NoOutputPath(PathBuf),

    #[error("Failed to parse {file_path:?}: {err}")]
    Parse {
        file_path: PathBuf,
        err: Arc<ast::ParseError>,
    },

    #[error(transparent)]
    Read(#[from] ReadContentError),

    #[error("A file generation task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Write(#[from] WriteContentError),
}
