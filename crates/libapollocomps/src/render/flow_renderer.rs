//! Declarations for the Flow target.
//!
//! Flow wraps each operation in a typed subclass of the `react-apollo`
//! component and exports a component that injects the operation's document
//! into that subclass.

use crate::operation::OperationDescriptor;

/// `class <Name><Kind>Class extends <Kind><<Name>Type, <Name>Variables | {}> {};`
pub(super) fn class_declaration(op: &OperationDescriptor) -> String {
    let variables_type = op.variables_type_name()
        .unwrap_or_else(|| "{}".to_string());
    format!(
        "class {class} extends {kind}<{result}, {variables_type}> {{}};",
        class = class_name(op),
        kind = op.kind(),
        result = op.result_type_alias(),
    )
}

/// The exported component. Its props are those of the class minus the
/// document prop, which the component supplies itself.
pub(super) fn component_declaration(op: &OperationDescriptor) -> String {
    let class = class_name(op);
    let prop = op.kind().primitive_prop();
    format!(
        "export const {component} = \
        (props: $Diff<React.ElementConfig<typeof {class}>, {{ {prop}: any }}>) => \
        <{class} {prop}={{{name}}} {{...props}} />;",
        component = op.component_name(),
        name = op.name(),
    )
}

pub(super) fn class_name(op: &OperationDescriptor) -> String {
    format!("{}Class", op.component_name())
}
