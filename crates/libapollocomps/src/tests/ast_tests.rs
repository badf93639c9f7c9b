use crate::ast;

#[test]
fn parse_yields_owned_operation_definitions() {
    let doc = ast::parse(
        "query GetUser($id: ID!) { user(id: $id) { name } }\n\
         fragment F on User { id }",
    ).unwrap();

    let var_defs: Vec<&ast::VariableDefinition> = doc.definitions.iter()
        .filter_map(|def| match def {
            ast::Definition::Operation(ast::OperationDefinition::Query(query)) =>
                Some(&query.variable_definitions),
            _ => None,
        })
        .flatten()
        .collect();
    assert_eq!(var_defs.len(), 1);
    assert_eq!(var_defs[0].name, "id");
    assert_eq!(doc.definitions.len(), 2);
}

#[test]
fn parse_reports_unterminated_selection_set() {
    assert!(ast::parse("query {").is_err());
}
