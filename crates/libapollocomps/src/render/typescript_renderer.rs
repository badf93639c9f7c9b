//! Declarations for the TypeScript target.
//!
//! The function style emits a typed component and a typed hook per
//! operation. The class style mirrors the Flow output and relies on the
//! [`CLASS_STYLE_PREAMBLE`] helper aliases.

use crate::operation::OperationDescriptor;

/// Helper aliases emitted once at the top of every class-style TypeScript
/// file.
pub(super) const CLASS_STYLE_PREAMBLE: [&str; 2] = [
    "type Omit<T, K extends keyof T> = Pick<T, Exclude<keyof T, K>>;",
    "type PropsOf<C> = C extends React.Component<infer P> ? P : never;",
];

/// `<Name>Type` or `<Name>Type, <Name>Variables`.
fn generics(op: &OperationDescriptor) -> String {
    match op.variables_type_name() {
        Some(variables_type) => format!("{}, {variables_type}", op.result_type_alias()),
        None => op.result_type_alias(),
    }
}

pub(super) fn component_declaration(op: &OperationDescriptor) -> String {
    let kind = op.kind();
    let prop = kind.primitive_prop();
    let generics = generics(op);
    format!(
        "export const {component} = (props: Omit<{kind}ComponentOptions<{generics}>, \"{prop}\">) => {{\n  \
        return <{kind}<{generics}> {prop}={{{name}}} {{...props}} />;\n\
        }}",
        component = op.component_name(),
        name = op.name(),
    )
}

pub(super) fn hook_declaration(op: &OperationDescriptor) -> String {
    let kind = op.kind();
    let generics = generics(op);
    format!(
        "export const {hook} = (options?: {kind}HookOptions<{generics}>) => {{\n  \
        return use{kind}<{generics}>({name}, options);\n\
        }}",
        hook = op.hook_name(),
        name = op.name(),
    )
}

pub(super) fn class_declaration(op: &OperationDescriptor) -> String {
    format!(
        "class {class} extends {kind}<{generics}> {{}}",
        class = class_name(op),
        kind = op.kind(),
        generics = generics(op),
    )
}

pub(super) fn class_component_declaration(op: &OperationDescriptor) -> String {
    let class = class_name(op);
    let prop = op.kind().primitive_prop();
    format!(
        "export const {component} = (props: Omit<PropsOf<{class}>, \"{prop}\">) => \
        <{class} {prop}={{{name}}} {{...props}} />;",
        component = op.component_name(),
        name = op.name(),
    )
}

fn class_name(op: &OperationDescriptor) -> String {
    format!("{}Class", op.component_name())
}
