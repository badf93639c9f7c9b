use crate::ast;
use crate::loc::SourcePosition;
use crate::operation::ClassifyError;
use crate::operation::OperationDescriptor;
use crate::operation::OperationKind;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, ClassifyError>;

/// The ordered operations of a single GraphQL document.
///
/// Operations are kept in document order and keyed by name; building a set
/// that would contain two operations with the same name fails.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OperationSet {
    operations: IndexMap<String, OperationDescriptor>,
}
impl OperationSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from descriptors that were produced elsewhere, keeping
    /// their order.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = OperationDescriptor>,
    ) -> Result<Self> {
        let mut set = Self::empty();
        for descriptor in descriptors {
            set.insert(descriptor)?;
        }
        Ok(set)
    }

    /// Classifies every top-level definition of `doc`.
    ///
    /// Fragment definitions produce no descriptor.
    pub fn from_ast(doc: &ast::Document) -> Result<Self> {
        let mut set = Self::empty();
        for def in &doc.definitions {
            use ast::Definition as Def;
            use ast::OperationDefinition as OpDef;
            let descriptor = match def {
                Def::Fragment(frag_def) => {
                    tracing::trace!(
                        "Skipping fragment `{}` at {}.",
                        frag_def.name,
                        SourcePosition::from_ast(&frag_def.position),
                    );
                    continue
                },

                Def::Operation(OpDef::Query(query)) => classify(
                    OperationKind::Query,
                    query.name.as_ref(),
                    &query.variable_definitions,
                    &query.position,
                )?,

                Def::Operation(OpDef::Mutation(mutation)) => classify(
                    OperationKind::Mutation,
                    mutation.name.as_ref(),
                    &mutation.variable_definitions,
                    &mutation.position,
                )?,

                Def::Operation(OpDef::Subscription(subscription)) => classify(
                    OperationKind::Subscription,
                    subscription.name.as_ref(),
                    &subscription.variable_definitions,
                    &subscription.position,
                )?,

                // `{ ... }` is shorthand for an anonymous query.
                Def::Operation(OpDef::SelectionSet(selection_set)) => {
                    return Err(ClassifyError::AnonymousOperation {
                        kind: OperationKind::Query,
                        position: SourcePosition::from_ast(&selection_set.span.0),
                    });
                },
            };
            set.insert(descriptor)?;
        }
        Ok(set)
    }

    /// Parses `content` and classifies the resulting document.
    pub fn from_str(
        content: impl AsRef<str>,
    ) -> std::result::Result<Self, OperationSetBuildError> {
        let doc = ast::parse(content.as_ref())?;
        Ok(Self::from_ast(&doc)?)
    }

    pub fn get(&self, name: &str) -> Option<&OperationDescriptor> {
        self.operations.get(name)
    }

    /// Whether at least one operation of `kind` is present.
    pub fn has_kind(&self, kind: OperationKind) -> bool {
        self.iter().any(|op| op.kind() == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.operations.values()
    }

    /// The distinct kinds present, in `Query < Mutation < Subscription`
    /// order.
    pub fn kinds_present(&self) -> Vec<OperationKind> {
        OperationKind::ALL
            .into_iter()
            .filter(|kind| self.has_kind(*kind))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    fn insert(&mut self, descriptor: OperationDescriptor) -> Result<()> {
        match self.operations.entry(descriptor.name.clone()) {
            Entry::Occupied(existing) => Err(ClassifyError::DuplicateOperationName {
                name: descriptor.name,
                first: existing.get().position,
                second: descriptor.position,
            }),

            Entry::Vacant(slot) => {
                slot.insert(descriptor);
                Ok(())
            },
        }
    }
}
impl<'a> IntoIterator for &'a OperationSet {
    type Item = &'a OperationDescriptor;
    type IntoIter = indexmap::map::Values<'a, String, OperationDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.values()
    }
}

fn classify(
    kind: OperationKind,
    name: Option<&String>,
    variable_definitions: &[ast::VariableDefinition],
    pos: &ast::AstPos,
) -> Result<OperationDescriptor> {
    let position = SourcePosition::from_ast(pos);
    let name = name.ok_or(ClassifyError::AnonymousOperation { kind, position })?;
    Ok(OperationDescriptor::new(
        name.as_str(),
        kind,
        !variable_definitions.is_empty(),
        position,
    ))
}

#[derive(Clone, Debug, Error)]
pub enum OperationSetBuildError {
    #[error("Error classifying operations: {0}")]
    ClassifyError(#[from] ClassifyError),

    #[error("Error parsing GraphQL document: {0}")]
    ParseError(Arc<ast::ParseError>),
}
impl std::convert::From<ast::ParseError> for OperationSetBuildError {
    fn from(value: ast::ParseError) -> Self {
        Self::ParseError(Arc::new(value))
    }
}
