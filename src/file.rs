// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{check_extension, ExportFormat, ExportOptions};
use crate::course::Course;
use crate::csv::courses_to_string;
use crate::error::CrawlResult;

/// Serialize `courses` per `export` and write them to one file.
/// Returns the final path written to.
pub fn export_courses(
    export: &ExportOptions,
    category_label: &str,
    courses: &[Course],
) -> CrawlResult<PathBuf> {
    let path = export.out_path(category_label);
    check_extension(&path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = render(export, courses)?;
    fs::write(&path, contents)?;
    logf!("Wrote {} courses to {}", courses.len(), path.display());
    Ok(path)
}

/// File body for the chosen format.
pub fn render(export: &ExportOptions, courses: &[Course]) -> CrawlResult<String> {
    match (export.format, export.format.delim()) {
        (ExportFormat::Json, _) | (_, None) => {
            let mut text = serde_json::to_string_pretty(courses)?;
            text.push('\n');
            Ok(text)
        }
        (_, Some(sep)) => Ok(courses_to_string(courses, export.include_headers, sep)),
    }
}

pub fn ensure_directory(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
