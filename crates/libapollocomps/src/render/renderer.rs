use crate::operation::OperationDescriptor;
use crate::render::flow_renderer;
use crate::render::typescript_renderer;
use crate::render::DeclarationStyle;
use crate::render::RenderTarget;
use thiserror::Error;

/// The closed set of supported wrapper renderers.
///
/// A `Renderer` is resolved once per invocation from a [`RenderTarget`] and
/// an optional [`DeclarationStyle`]. Every variant renders the same
/// per-operation contract; they only differ in the shape of the emitted
/// declarations and imports.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Renderer {
    FlowClass,
    TypeScriptClass,
    TypeScriptFunction,
}
impl Renderer {
    /// Resolves the renderer for `target`. When `style` is `None` the
    /// target's preferred style is used.
    pub fn new(
        target: RenderTarget,
        style: Option<DeclarationStyle>,
    ) -> Result<Self, RendererConfigError> {
        match (target, style) {
            (RenderTarget::Flow, None | Some(DeclarationStyle::Class)) =>
                Ok(Self::FlowClass),

            (RenderTarget::Flow, Some(style @ DeclarationStyle::Function)) =>
                Err(RendererConfigError::UnsupportedDeclarationStyle {
                    target,
                    style,
                }),

            (RenderTarget::TypeScript, Some(DeclarationStyle::Class)) =>
                Ok(Self::TypeScriptClass),

            (RenderTarget::TypeScript, None | Some(DeclarationStyle::Function)) =>
                Ok(Self::TypeScriptFunction),
        }
    }

    pub fn declaration_style(&self) -> DeclarationStyle {
        match self {
            Self::FlowClass | Self::TypeScriptClass => DeclarationStyle::Class,
            Self::TypeScriptFunction => DeclarationStyle::Function,
        }
    }

    /// Renders the declaration(s) that wrap a single operation, in the order
    /// they must appear in the generated file.
    pub fn render_declarations(&self, op: &OperationDescriptor) -> Vec<String> {
        match self {
            Self::FlowClass => vec![
                flow_renderer::class_declaration(op),
                flow_renderer::component_declaration(op),
            ],

            Self::TypeScriptClass => vec![
                typescript_renderer::class_declaration(op),
                typescript_renderer::class_component_declaration(op),
            ],

            Self::TypeScriptFunction => vec![
                typescript_renderer::component_declaration(op),
                typescript_renderer::hook_declaration(op),
            ],
        }
    }

    pub fn target(&self) -> RenderTarget {
        match self {
            Self::FlowClass => RenderTarget::Flow,
            Self::TypeScriptClass | Self::TypeScriptFunction => RenderTarget::TypeScript,
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RendererConfigError {
    #[error("The `{target}` target does not support `{style}`-style declarations")]
    UnsupportedDeclarationStyle {
        target: RenderTarget,
        style: DeclarationStyle,
    },
}
