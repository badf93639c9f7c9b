use crate::ast;
use crate::file_reader;
use crate::file_writer;
use crate::generate::find_query_files;
use crate::generate::output_path;
use crate::generate::FileOutcome;
use crate::generate::GenerateError;
use crate::generate::GenerateOptions;
use crate::generate::GenerateSummary;
use crate::operation::OperationSet;
use crate::render::assemble;
use crate::render::Renderer;
use crate::ReadContentError;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;

type Result<T> = std::result::Result<T, GenerateError>;

/// Drives generation for every `queries.graphql` file below a root
/// directory.
#[derive(Clone, Debug)]
pub struct Generator {
    options: GenerateOptions,
    renderer: Renderer,
}
impl Generator {
    /// Validates `options`. Configuration errors surface here, before any
    /// file is read.
    pub fn new(options: GenerateOptions) -> Result<Self> {
        let renderer = Renderer::new(options.target, options.style)?;
        Ok(Self {
            options,
            renderer,
        })
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn renderer(&self) -> Renderer {
        self.renderer
    }

    /// Discovers every query file and generates output for each of them.
    pub async fn run(&self) -> Result<GenerateSummary> {
        let root = self.options.root.clone();
        let ignored_dirs = self.options.ignored_dirs.clone();
        let file_paths = tokio::task::spawn_blocking(
            move || find_query_files(root, &ignored_dirs)
        ).await??;
        self.run_files(file_paths).await
    }

    /// Generates output for each of `file_paths` concurrently.
    ///
    /// Returns on the first file that fails. Tasks still in flight at that
    /// point are aborted, and their results ignored, before this returns.
    pub async fn run_files(&self, file_paths: Vec<PathBuf>) -> Result<GenerateSummary> {
        let mut tasks = JoinSet::new();
        for file_path in file_paths {
            tasks.spawn(generate_file(self.renderer, file_path, self.options.check));
        }

        let mut summary = GenerateSummary::default();
        while let Some(joined) = tasks.join_next().await {
            match joined.map_err(GenerateError::from).and_then(|outcome| outcome) {
                Ok(outcome) => summary.record(outcome),
                Err(err) => {
                    // No sibling may still be running once the error is
                    // returned.
                    tasks.shutdown().await;
                    return Err(err);
                },
            }
        }
        summary.sort();
        Ok(summary)
    }
}

/// Runs a single query file through read, parse, classify, render and
/// write.
///
/// A file without operations is logged as a warning and reported as
/// [`FileOutcome::Empty`]; no output is written for it.
pub async fn generate_file(
    renderer: Renderer,
    source_path: PathBuf,
    check: bool,
) -> Result<FileOutcome> {
    let output_path = output_path(&source_path, renderer.target())
        .ok_or_else(|| GenerateError::NoOutputPath(source_path.clone()))?;

    let content = file_reader::read_content(&source_path).await?;
    let doc = ast::parse(&content).map_err(|err| GenerateError::Parse {
        file_path: source_path.clone(),
        err: Arc::new(err),
    })?;
    let operations = OperationSet::from_ast(&doc).map_err(|err| GenerateError::Classify {
        file_path: source_path.clone(),
        err,
    })?;

    if operations.is_empty() {
        tracing::warn!("No queries or mutations found in {}", source_path.display());
        return Ok(FileOutcome::Empty(source_path));
    }

    let text = assemble(renderer, &operations);

    if check {
        return match tokio::fs::read(&output_path).await {
            Ok(existing) if existing == text.as_bytes() => {
                tracing::debug!("{output_path:?} is up to date.");
                Ok(FileOutcome::UpToDate(output_path))
            },
            Ok(_) => Ok(FileOutcome::Stale(output_path)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound =>
                Ok(FileOutcome::Stale(output_path)),
            Err(err) => Err(ReadContentError::FileReadError {
                file_path: output_path,
                err,
            }.into()),
        };
    }

    file_writer::write_content(&output_path, &text)?;
    tracing::debug!(
        "Wrote {} operations from {source_path:?} to {output_path:?}.",
        operations.len(),
    );
    Ok(FileOutcome::Written(output_path))
}
