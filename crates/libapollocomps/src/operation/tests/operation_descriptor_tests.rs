use crate::loc::SourcePosition;
use crate::operation::OperationDescriptor;
use crate::operation::OperationKind;

fn pos() -> SourcePosition {
    SourcePosition { line: 1, column: 1 }
}

#[test]
fn derived_names_for_query() {
    let op = OperationDescriptor::new("GetViewer", OperationKind::Query, false, pos());

    assert_eq!(op.component_name(), "GetViewerQuery");
    assert_eq!(op.hook_name(), "useGetViewerQuery");
    assert_eq!(op.result_type_alias(), "GetViewerType");
    assert_eq!(op.variables_type_name(), None);
}

#[test]
fn derived_names_for_subscription_with_variables() {
    let op = OperationDescriptor::new(
        "OnMessage",
        OperationKind::Subscription,
        true,
        pos(),
    );

    assert_eq!(op.component_name(), "OnMessageSubscription");
    assert_eq!(op.hook_name(), "useOnMessageSubscription");
    assert_eq!(op.variables_type_name().as_deref(), Some("OnMessageVariables"));
}

#[test]
fn primitive_prop_is_lowercased_kind() {
    assert_eq!(OperationKind::Query.primitive_prop(), "query");
    assert_eq!(OperationKind::Mutation.primitive_prop(), "mutation");
    assert_eq!(OperationKind::Subscription.primitive_prop(), "subscription");
}
