use crate::generate::QUERY_FILE_NAME;
use crate::render::RenderTarget;
use std::path::Path;
use std::path::PathBuf;

/// The path of the file generated for the query file at `source_path`.
///
/// The trailing `queries.graphql` of the path is replaced with
/// `ApolloComps.js` or `ApolloComps.tsx`. Returns `None` if `source_path`
/// does not end in `queries.graphql`.
pub fn output_path(source_path: &Path, target: RenderTarget) -> Option<PathBuf> {
    let file_name = source_path.file_name()?.to_str()?;
    let prefix = file_name.strip_suffix(QUERY_FILE_NAME)?;
    Some(source_path.with_file_name(format!(
        "{prefix}{}",
        target.output_file_suffix(),
    )))
}
