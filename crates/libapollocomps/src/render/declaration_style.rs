use thiserror::Error;

/// How each operation's wrapper is declared in the generated file.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DeclarationStyle {
    /// A typed subclass of the `react-apollo` component plus a thin
    /// component that injects the GraphQL document into it.
    Class,

    /// A typed function component plus a typed `use<Name><Kind>` hook.
    Function,
}
impl DeclarationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Function => "function",
        }
    }
}
impl std::fmt::Display for DeclarationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl std::str::FromStr for DeclarationStyle {
    type Err = UnknownDeclarationStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "class" => Ok(Self::Class),
            "function" | "hooks" => Ok(Self::Function),
            _ => Err(UnknownDeclarationStyleError(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("Unknown declaration style `{0}` (expected `class` or `function`)")]
pub struct UnknownDeclarationStyleError(pub String);
