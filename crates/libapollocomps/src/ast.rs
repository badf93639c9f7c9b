//! Aliases over the `graphql-parser` query AST.
//!
//! Nothing outside of this module names `graphql_parser` types directly.

pub use graphql_parser::Pos as AstPos;
pub use graphql_parser::query::ParseError;

pub type Definition = graphql_parser::query::Definition<'static, String>;
pub type Document = graphql_parser::query::Document<'static, String>;
pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
pub type VariableDefinition = graphql_parser::query::VariableDefinition<'static, String>;

/// Parses an executable GraphQL document into an owned AST.
pub fn parse(content: &str) -> Result<Document, ParseError> {
    graphql_parser::query::parse_query::<String>(content)
        .map(|doc| doc.into_static())
}
