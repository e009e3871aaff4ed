use crate::core::error::WriteError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Write the report to `path`, wrapped in a leading and trailing newline.
///
/// Missing parent directories are created. An existing file is replaced.
pub fn write_report(content: &str, path: &Path) -> Result<(), WriteError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let mut body = String::with_capacity(content.len() + 2);
    body.push('\n');
    body.push_str(content);
    body.push('\n');

    fs::write(path, body).map_err(|source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = content.len() + 2, "Report written");

    Ok(())
}
