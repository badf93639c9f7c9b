use thiserror::Error;

/// The language the generated wrappers are written in.
///
/// Chosen once per invocation and applied to every generated file.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RenderTarget {
    Flow,
    TypeScript,
}
impl RenderTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flow => "flow",
            Self::TypeScript => "typescript",
        }
    }

    pub fn output_extension(&self) -> &'static str {
        match self {
            Self::Flow => "js",
            Self::TypeScript => "tsx",
        }
    }

    /// The file name suffix that replaces `queries.graphql` in a source path.
    pub fn output_file_suffix(&self) -> String {
        format!("ApolloComps.{}", self.output_extension())
    }
}
impl std::fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl std::str::FromStr for RenderTarget {
    type Err = UnknownRenderTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flow" => Ok(Self::Flow),
            "typescript" | "ts" => Ok(Self::TypeScript),
            _ => Err(UnknownRenderTargetError(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("Unknown render target `{0}` (expected `flow` or `typescript`)")]
pub struct UnknownRenderTargetError(pub String);
