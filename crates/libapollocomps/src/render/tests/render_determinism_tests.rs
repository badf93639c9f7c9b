use crate::operation::OperationKind;
use crate::operation::OperationSet;
use crate::render::aggregate_imports;
use crate::render::assemble;
use crate::render::tests::test_utils::op;
use crate::render::Renderer;
use proptest::prelude::*;
use std::collections::HashSet;

fn kind_strategy() -> impl Strategy<Value = OperationKind> {
    prop_oneof![
        Just(OperationKind::Query),
        Just(OperationKind::Mutation),
        Just(OperationKind::Subscription),
    ]
}

fn renderer_strategy() -> impl Strategy<Value = Renderer> {
    prop_oneof![
        Just(Renderer::FlowClass),
        Just(Renderer::TypeScriptClass),
        Just(Renderer::TypeScriptFunction),
    ]
}

/// Operation sets with unique, capitalized names.
fn op_set_strategy() -> impl Strategy<Value = OperationSet> {
    prop::collection::vec(
        ("[A-Z][a-zA-Z0-9]{0,12}", kind_strategy(), any::<bool>()),
        1..8,
    ).prop_map(|raw_ops| {
        let mut seen = HashSet::new();
        let ops = raw_ops.into_iter()
            .filter(|(name, _, _)| seen.insert(name.clone()))
            .map(|(name, kind, has_vars)| op(&name, kind, has_vars));
        OperationSet::from_descriptors(ops).unwrap()
    })
}

proptest! {
    #[test]
    fn assembling_twice_is_byte_identical(
        ops in op_set_strategy(),
        renderer in renderer_strategy(),
    ) {
        prop_assert_eq!(assemble(renderer, &ops), assemble(renderer, &ops));
    }

    #[test]
    fn framework_imports_have_no_duplicates(
        ops in op_set_strategy(),
        renderer in renderer_strategy(),
    ) {
        let imports = aggregate_imports(renderer, &ops);
        let unique: HashSet<&String> = imports.framework.iter().collect();
        prop_assert_eq!(unique.len(), imports.framework.len());

        let kinds_in_import_order: Vec<OperationKind> = imports.framework.iter()
            .filter_map(|symbol| OperationKind::ALL.into_iter()
                .find(|kind| kind.as_str() == symbol))
            .collect();
        prop_assert_eq!(kinds_in_import_order, ops.kinds_present());
    }

    #[test]
    fn every_operation_gets_a_component(
        ops in op_set_strategy(),
        renderer in renderer_strategy(),
    ) {
        let text = assemble(renderer, &ops);
        for op in &ops {
            let component_decl = format!("export const {} = ", op.component_name());
            prop_assert!(text.contains(&component_decl));
        }
    }
}
