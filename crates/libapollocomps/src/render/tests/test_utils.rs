use crate::loc::SourcePosition;
use crate::operation::OperationDescriptor;
use crate::operation::OperationKind;
use crate::operation::OperationSet;

pub(super) fn op(name: &str, kind: OperationKind, has_variables: bool) -> OperationDescriptor {
    OperationDescriptor::new(
        name,
        kind,
        has_variables,
        SourcePosition { line: 1, column: 1 },
    )
}

pub(super) fn op_set(ops: Vec<OperationDescriptor>) -> OperationSet {
    OperationSet::from_descriptors(ops).unwrap()
}

/// The operations of a `queries.graphql` file that lists a paginated query
/// and a delete mutation.
pub(super) const LIST_AND_DELETE_DOC: &str = r#"
query GetList(
  $first: Int!
  $after: String
) {
  list(
    first: $first
    after: $after
  ) {
    pageInfo {
      totalCount
    }
  }
}

mutation DeleteItem($input: DeleteItemInput!) {
  deleteItem(input: $input) {
    success
  }
}
"#;
