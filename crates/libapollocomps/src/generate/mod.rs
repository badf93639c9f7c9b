//! Finds every `queries.graphql` file below a root directory and generates
//! the companion wrapper file next to each one.

mod file_discovery;
mod generate_error;
mod generate_options;
mod generate_summary;
mod generator;
mod output_path;

pub use file_discovery::find_query_files;
pub use file_discovery::DiscoveryError;
pub use file_discovery::QUERY_FILE_NAME;
pub use generate_error::GenerateError;
pub use generate_options::DEFAULT_IGNORED_DIRS;
pub use generate_options::GenerateOptions;
pub use generate_summary::FileOutcome;
pub use generate_summary::GenerateSummary;
pub use generator::generate_file;
pub use generator::Generator;
pub use output_path::output_path;
