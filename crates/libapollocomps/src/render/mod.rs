mod declaration_style;
mod file_assembler;
mod flow_renderer;
mod import_aggregator;
mod render_target;
mod renderer;
mod typescript_renderer;

pub use declaration_style::DeclarationStyle;
pub use declaration_style::UnknownDeclarationStyleError;
pub use file_assembler::assemble;
pub use file_assembler::GENERATED_FILE_HEADER;
pub use import_aggregator::aggregate_imports;
pub use import_aggregator::Imports;
pub use import_aggregator::TypeImport;
pub use render_target::RenderTarget;
pub use render_target::UnknownRenderTargetError;
pub use renderer::Renderer;
pub use renderer::RendererConfigError;

/// Module the generated file imports `react-apollo` primitives from.
pub(crate) const FRAMEWORK_MODULE: &str = "react-apollo";

/// Module, relative to the generated file, that exports the compiled
/// GraphQL documents.
pub(crate) const DOCUMENTS_MODULE: &str = "./queries.graphql";

/// Module the generated result and variables types are imported from.
pub(crate) const TYPES_MODULE: &str = "types";

#[cfg(test)]
mod tests;
