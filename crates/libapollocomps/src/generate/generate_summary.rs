use std::path::PathBuf;

/// What happened to a single `queries.graphql` file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FileOutcome {
    /// The source file has no operations; nothing was generated.
    Empty(PathBuf),

    /// Check mode: the existing output differs from what would be generated
    /// (or does not exist).
    Stale(PathBuf),

    /// Check mode: the existing output already matches.
    UpToDate(PathBuf),

    /// The generated file was written to this path.
    Written(PathBuf),
}

/// Per-outcome tallies of a successful invocation. Paths are sorted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GenerateSummary {
    pub skipped_empty: Vec<PathBuf>,
    pub stale: Vec<PathBuf>,
    pub up_to_date: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
}
impl GenerateSummary {
    pub(super) fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Empty(path) => self.skipped_empty.push(path),
            FileOutcome::Stale(path) => self.stale.push(path),
            FileOutcome::UpToDate(path) => self.up_to_date.push(path),
            FileOutcome::Written(path) => self.written.push(path),
        }
    }

    pub(super) fn sort(&mut self) {
        self.skipped_empty.sort();
        self.stale.sort();
        self.up_to_date.sort();
        self.written.sort();
    }

    pub fn files_processed(&self) -> usize {
        self.skipped_empty.len()
            + self.stale.len()
            + self.up_to_date.len()
            + self.written.len()
    }
}
