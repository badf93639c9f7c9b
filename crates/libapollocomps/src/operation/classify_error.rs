use crate::loc::SourcePosition;
use crate::operation::OperationKind;
use thiserror::Error;

/// Reasons a parsed document cannot be turned into an
/// [`OperationSet`](crate::operation::OperationSet).
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ClassifyError {
    #[error(
        "Anonymous {kind} operation at {position}: every operation needs a \
        name to derive its generated wrapper names from",
    )]
    AnonymousOperation {
        kind: OperationKind,
        position: SourcePosition,
    },

    #[error(
        "Operation name `{name}` is defined more than once (at {first} and \
        at {second}), which would produce colliding declarations",
    )]
    DuplicateOperationName {
        name: String,
        first: SourcePosition,
        second: SourcePosition,
    },
}
