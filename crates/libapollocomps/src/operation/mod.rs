mod classify_error;
mod operation_descriptor;
mod operation_kind;
mod operation_set;

pub use classify_error::ClassifyError;
pub use operation_descriptor::OperationDescriptor;
pub use operation_kind::OperationKind;
pub use operation_set::OperationSet;
pub use operation_set::OperationSetBuildError;

#[cfg(test)]
mod tests;
