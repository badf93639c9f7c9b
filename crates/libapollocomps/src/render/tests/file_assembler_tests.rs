use crate::operation::OperationKind;
use crate::operation::OperationSet;
use crate::render::assemble;
use crate::render::tests::test_utils::op;
use crate::render::tests::test_utils::op_set;
use crate::render::tests::test_utils::LIST_AND_DELETE_DOC;
use crate::render::Renderer;

#[test]
fn flow_file_for_query_and_mutation() {
    let ops = OperationSet::from_str(LIST_AND_DELETE_DOC).unwrap();

    let text = assemble(Renderer::FlowClass, &ops);

    assert_eq!(text, concat!(
        "/* Generated using apollo-typed-components */\n",
        "// @flow\n",
        "import * as React from \"react\";\n",
        "import { Query, Mutation } from \"react-apollo\";\n",
        "import {\n",
        "  GetList,\n",
        "  DeleteItem\n",
        "} from \"./queries.graphql\";\n",
        "import type {\n",
        "  GetList as GetListType,\n",
        "  GetListVariables,\n",
        "  DeleteItem as DeleteItemType,\n",
        "  DeleteItemVariables\n",
        "} from \"types\";\n",
        "\n",
        "class GetListQueryClass extends Query<GetListType, GetListVariables> {};\n",
        "export const GetListQuery = (props: $Diff<React.ElementConfig<typeof GetListQueryClass>, { query: any }>) => <GetListQueryClass query={GetList} {...props} />;\n",
        "\n",
        "class DeleteItemMutationClass extends Mutation<DeleteItemType, DeleteItemVariables> {};\n",
        "export const DeleteItemMutation = (props: $Diff<React.ElementConfig<typeof DeleteItemMutationClass>, { mutation: any }>) => <DeleteItemMutationClass mutation={DeleteItem} {...props} />;\n",
    ));
}

#[test]
fn typescript_function_file_for_single_query() {
    let ops = op_set(vec![op("GetViewer", OperationKind::Query, false)]);

    let text = assemble(Renderer::TypeScriptFunction, &ops);

    assert_eq!(text, concat!(
        "/* Generated using apollo-typed-components */\n",
        "import * as React from \"react\";\n",
        "import {\n",
        "  Query,\n",
        "  useQuery,\n",
        "  QueryComponentOptions,\n",
        "  QueryHookOptions\n",
        "} from \"react-apollo\";\n",
        "import {\n",
        "  GetViewer\n",
        "} from \"./queries.graphql\";\n",
        "import {\n",
        "  GetViewer as GetViewerType\n",
        "} from \"types\";\n",
        "\n",
        "export const GetViewerQuery = (props: Omit<QueryComponentOptions<GetViewerType>, \"query\">) => {\n",
        "  return <Query<GetViewerType> query={GetViewer} {...props} />;\n",
        "}\n",
        "export const useGetViewerQuery = (options?: QueryHookOptions<GetViewerType>) => {\n",
        "  return useQuery<GetViewerType>(GetViewer, options);\n",
        "}\n",
    ));
}

#[test]
fn typescript_class_file_emits_helper_aliases_before_framework_import() {
    let ops = op_set(vec![op("DeleteRecord", OperationKind::Mutation, true)]);

    let text = assemble(Renderer::TypeScriptClass, &ops);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(&lines[..7], &[
        "/* Generated using apollo-typed-components */",
        "import * as React from \"react\";",
        "type Omit<T, K extends keyof T> = Pick<T, Exclude<keyof T, K>>;",
        "type PropsOf<C> = C extends React.Component<infer P> ? P : never;",
        "import {",
        "  Mutation",
        "} from \"react-apollo\";",
    ]);
    assert!(text.contains(
        "class DeleteRecordMutationClass extends Mutation<DeleteRecordType, DeleteRecordVariables> {}\n",
    ));
}

#[test]
fn flow_and_class_typescript_files_do_not_share_markers() {
    let ops = op_set(vec![op("GetViewer", OperationKind::Query, false)]);

    let flow = assemble(Renderer::FlowClass, &ops);
    let typescript = assemble(Renderer::TypeScriptFunction, &ops);

    assert!(flow.contains("// @flow\n"));
    assert!(flow.contains("import type {\n"));
    assert!(!flow.contains("type PropsOf"));
    assert!(!typescript.contains("// @flow"));
    assert!(!typescript.contains("import type"));
}

#[test]
fn operations_are_separated_by_a_blank_line() {
    let ops = op_set(vec![
        op("GetList", OperationKind::Query, true),
        op("GetViewer", OperationKind::Query, false),
        op("DeleteItem", OperationKind::Mutation, true),
    ]);

    let text = assemble(Renderer::TypeScriptFunction, &ops);
    let body = text.split_once("} from \"types\";\n\n").unwrap().1;

    assert_eq!(body.matches("\n\n").count(), 2);
    assert!(body.starts_with("export const GetListQuery "));
    assert!(body.ends_with("}\n"));
}
