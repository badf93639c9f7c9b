use crate::operation::OperationKind;
use crate::operation::OperationSet;
use crate::render::DeclarationStyle;
use crate::render::Renderer;

/// Every symbol a generated file imports, grouped by source module.
///
/// Each list is free of duplicates and ordered deterministically: framework
/// symbols by operation kind, type and document symbols by operation order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Imports {
    /// Symbols imported from `react-apollo`.
    pub framework: Vec<String>,

    /// Generated result/variables types.
    pub types: Vec<TypeImport>,

    /// Compiled GraphQL documents imported from `./queries.graphql`.
    pub documents: Vec<String>,
}

/// A single named import, optionally renamed with `as`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeImport {
    pub symbol: String,
    pub alias: Option<String>,
}
impl TypeImport {
    fn aliased(symbol: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            alias: Some(alias.into()),
        }
    }

    fn plain(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            alias: None,
        }
    }
}
impl std::fmt::Display for TypeImport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} as {alias}", self.symbol),
            None => f.write_str(&self.symbol),
        }
    }
}

/// Derives the imports needed by the file `renderer` generates for
/// `operations`.
pub fn aggregate_imports(renderer: Renderer, operations: &OperationSet) -> Imports {
    let framework = operations.kinds_present()
        .into_iter()
        .flat_map(|kind| framework_symbols(renderer, kind))
        .collect();

    let types = operations.iter()
        .flat_map(|op| {
            let result_type = TypeImport::aliased(op.name(), op.result_type_alias());
            let variables_type = op.variables_type_name().map(TypeImport::plain);
            std::iter::once(result_type).chain(variables_type)
        })
        .collect();

    let documents = operations.iter()
        .map(|op| op.name().to_string())
        .collect();

    Imports {
        framework,
        types,
        documents,
    }
}

fn framework_symbols(renderer: Renderer, kind: OperationKind) -> Vec<String> {
    let kind = kind.as_str();
    match renderer.declaration_style() {
        DeclarationStyle::Class => vec![kind.to_string()],
        DeclarationStyle::Function => vec![
            kind.to_string(),
            format!("use{kind}"),
            format!("{kind}ComponentOptions"),
            format!("{kind}HookOptions"),
        ],
    }
}
