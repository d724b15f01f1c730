//! Welcome notice file.

use std::{fs, path::Path};

/// Contents written when the notice file does not exist yet.
pub const DEFAULT_NOTICE: &str = "";

/// Read the welcome notice, creating an empty file if there is none.
///
/// Never fails: an unreadable file yields an empty notice and a warning.
pub fn load_notice(path: &Path) -> String {
    if !path.exists() {
        if let Err(e) = create_default(path) {
            tracing::warn!(path = %path.display(), error = %e, "Failed to create welcome file");
        }
        return DEFAULT_NOTICE.to_string();
    }

    match fs::read_to_string(path) {
        Ok(notice) => notice,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read welcome file, showing none");
            String::new()
        },
    }
}

fn create_default(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_NOTICE)
}
