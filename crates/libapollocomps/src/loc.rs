use crate::ast;

/// A 1-based line/column position within a GraphQL source document.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}
impl SourcePosition {
    pub(crate) fn from_ast(pos: &ast::AstPos) -> Self {
        Self {
            line: pos.line,
            column: pos.column,
        }
    }
}
impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
