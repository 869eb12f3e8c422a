use std::path::Path;

use crate::errors::{AppError, AppResult};

/// Pulls the source text out of an uploaded file. Only plain-text uploads
/// are readable; anything else is refused outright rather than silently
/// replaced with placeholder content.
pub fn extract_text(file_name: Option<&str>, content: &str) -> AppResult<String> {
    let name = match file_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(AppError::NoFileUploaded),
    };

    let is_txt = Path::new(name)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);

    if !is_txt {
        return Err(AppError::UnsupportedFileType(name.to_string()));
    }

    if content.trim().is_empty() {
        return Err(AppError::ValidationError(format!(
            "Uploaded file '{}' has no readable text",
            name
        )));
    }

    Ok(content.to_string())
}
