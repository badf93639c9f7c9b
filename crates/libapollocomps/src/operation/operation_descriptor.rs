use crate::loc::SourcePosition;
use crate::operation::OperationKind;

/// The metadata extracted from a single named operation definition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperationDescriptor {
    pub(super) has_variables: bool,
    pub(super) kind: OperationKind,
    pub(super) name: String,
    pub(super) position: SourcePosition,
}
impl OperationDescriptor {
    pub fn new(
        name: impl Into<String>,
        kind: OperationKind,
        has_variables: bool,
        position: SourcePosition,
    ) -> Self {
        Self {
            has_variables,
            kind,
            name: name.into(),
            position,
        }
    }

    /// `<Name><Kind>`, e.g. `GetViewerQuery`.
    pub fn component_name(&self) -> String {
        format!("{}{}", self.name, self.kind.as_str())
    }

    /// Whether the operation declares at least one variable.
    pub fn has_variables(&self) -> bool {
        self.has_variables
    }

    /// `use<Name><Kind>`, e.g. `useGetViewerQuery`.
    pub fn hook_name(&self) -> String {
        format!("use{}", self.component_name())
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Where the operation was defined. Only used for diagnostics.
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// `<Name>Type`, the alias under which the generated result type is
    /// imported.
    pub fn result_type_alias(&self) -> String {
        format!("{}Type", self.name)
    }

    /// `<Name>Variables`, if the operation declares any variables.
    pub fn variables_type_name(&self) -> Option<String> {
        self.has_variables.then(|| format!("{}Variables", self.name))
    }
}
