use crate::operation::OperationSet;
use crate::render::aggregate_imports;
use crate::render::typescript_renderer;
use crate::render::Imports;
use crate::render::RenderTarget;
use crate::render::Renderer;
use crate::render::DOCUMENTS_MODULE;
use crate::render::FRAMEWORK_MODULE;
use crate::render::TYPES_MODULE;

/// First line of every generated file.
pub const GENERATED_FILE_HEADER: &str =
    "/* Generated using apollo-typed-components */";

/// Renders the complete text of the file generated for `operations`.
///
/// The output depends on nothing but `renderer` and `operations`, so
/// re-rendering unchanged input reproduces the same bytes.
pub fn assemble(renderer: Renderer, operations: &OperationSet) -> String {
    let imports = aggregate_imports(renderer, operations);
    let mut lines: Vec<String> = vec![GENERATED_FILE_HEADER.to_string()];

    if renderer.target() == RenderTarget::Flow {
        lines.push("// @flow".to_string());
    }
    lines.push("import * as React from \"react\";".to_string());
    if renderer == Renderer::TypeScriptClass {
        lines.extend(typescript_renderer::CLASS_STYLE_PREAMBLE.map(str::to_string));
    }
    lines.push(framework_import(renderer, &imports));
    lines.push(import_block(
        "import",
        imports.documents.iter(),
        DOCUMENTS_MODULE,
    ));
    let type_import_keyword = match renderer.target() {
        RenderTarget::Flow => "import type",
        RenderTarget::TypeScript => "import",
    };
    lines.push(import_block(
        type_import_keyword,
        imports.types.iter(),
        TYPES_MODULE,
    ));

    let declarations = operations.iter()
        .map(|op| renderer.render_declarations(op).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{}\n\n{declarations}\n", lines.join("\n"))
}

fn framework_import(renderer: Renderer, imports: &Imports) -> String {
    match renderer.target() {
        RenderTarget::Flow => format!(
            "import {{ {} }} from \"{FRAMEWORK_MODULE}\";",
            imports.framework.join(", "),
        ),
        RenderTarget::TypeScript => import_block(
            "import",
            imports.framework.iter(),
            FRAMEWORK_MODULE,
        ),
    }
}

/// A multi-line `import { ... } from "module";` statement with one symbol
/// per line.
fn import_block<T: std::fmt::Display>(
    keyword: &str,
    symbols: impl Iterator<Item = T>,
    module: &str,
) -> String {
    let symbols = symbols
        .map(|symbol| format!("  {symbol}"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{keyword} {{\n{symbols}\n}} from \"{module}\";")
}
