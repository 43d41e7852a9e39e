use std::fs;
use std::path::Path;

use crate::error::{LootError, Result};
use crate::parser::parse_localization;

use super::LookupTable;

/// Load the localization table.
///
/// The localization document is required; a missing or unparsable file is
/// fatal for the run.
pub fn load_localization(path: &Path) -> Result<LookupTable> {
    if !path.is_file() {
        return Err(LootError::Source {
            message: format!("Localization file not found: {}", path.display()),
            help: Some("Unpack English.pak into the source directory".to_string()),
        });
    }

    let source = fs::read_to_string(path).map_err(|e| LootError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read localization: {}", e),
    })?;

    let entries = parse_localization(&source).map_err(|e| LootError::Parse {
        message: format!("{}: {}", path.display(), e),
        help: None,
    })?;

    Ok(entries.into_iter().collect())
}
