//! Generates typed `react-apollo` wrappers for the GraphQL operations found in
//! `queries.graphql` files.
//!
//! The crate is split into a pure core and a thin I/O shell:
//!
//! * [`operation`] classifies a parsed GraphQL document into an
//!   [`OperationSet`](operation::OperationSet).
//! * [`render`] turns an `OperationSet` into the text of a generated
//!   `ApolloComps.js` / `ApolloComps.tsx` file.
//! * [`generate`] finds every `queries.graphql` file below a root directory
//!   and drives the above for each of them concurrently.

pub mod ast;
mod file_reader;
mod file_writer;
pub mod generate;
mod loc;
pub mod operation;
pub mod render;

pub use file_reader::ReadContentError;
pub use file_writer::WriteContentError;
pub use loc::SourcePosition;

#[cfg(test)]
mod tests;
