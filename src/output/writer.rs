//! Plain-text result writer
//!
//! The output file holds one absolute URL per line, sorted ascending, each
//! line terminated by `\n`, with nothing else in the file. The same result set
//! always produces byte-identical output.

use crate::output::{OutputError, OutputResult};
use crate::state::ResultSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the result set to `output_path`, replacing any previous content
///
/// The parent directory is created if missing.
///
/// # Arguments
///
/// * `results` - The deduplicated PDF links
/// * `output_path` - Destination file
///
/// # Returns
///
/// * `Ok(())` - File written
/// * `Err(OutputError)` - Directory creation or write failed
pub fn write_results(results: &ResultSet, output_path: &Path) -> OutputResult<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let write_error = |source| OutputError::Write {
        path: output_path.display().to_string(),
        source,
    };

    let file = File::create(output_path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(format_results(results).as_bytes())
        .map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    tracing::debug!("Wrote {} links to {}", results.len(), output_path.display());
    Ok(())
}

/// Formats the result set as the output file content
pub fn format_results(results: &ResultSet) -> String {
    let mut content = String::new();
    for link in results.iter() {
        content.push_str(link);
        content.push('\n');
    }
    content
}
