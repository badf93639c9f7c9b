use crate::render::DeclarationStyle;
use crate::render::RenderTarget;
use std::path::PathBuf;

/// Directory names that are never scanned unless overridden.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &["node_modules"];

/// Everything one invocation of the generator needs to know.
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    /// Only render and compare against existing output; never write.
    pub check: bool,
    pub ignored_dirs: Vec<String>,
    pub root: PathBuf,
    pub style: Option<DeclarationStyle>,
    pub target: RenderTarget,
}
impl GenerateOptions {
    pub fn new(root: impl Into<PathBuf>, target: RenderTarget) -> Self {
        Self {
            check: false,
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter()
                .map(|dir| dir.to_string())
                .collect(),
            root: root.into(),
            style: None,
            target,
        }
    }

    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    pub fn with_ignored_dirs(mut self, ignored_dirs: Vec<String>) -> Self {
        self.ignored_dirs = ignored_dirs;
        self
    }

    pub fn with_style(mut self, style: Option<DeclarationStyle>) -> Self {
        self.style = style;
        self
    }
}
