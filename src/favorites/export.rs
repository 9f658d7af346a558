//! Plain-text export of favorites

use std::fs;
use std::path::Path;

use crate::ai::NameSuggestion;
use crate::error::ZhnameError;

const SEPARATOR: &str = "\n---\n";

/// Format favorites as plain text, one block per name
pub fn format_export(favorites: &[NameSuggestion]) -> String {
    let blocks: Vec<String> = favorites.iter().map(format_block).collect();
    let mut text = blocks.join(SEPARATOR);
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

fn format_block(favorite: &NameSuggestion) -> String {
    let explanation = &favorite.explanation;
    format!(
        "Chinese Name: {}\n\
         Pinyin: {}\n\
         Individual Meanings: {}\n\
         Overall Meaning: {}\n\
         Cultural Significance: {}\n\
         Personality Traits: {}",
        favorite.chinese_name,
        favorite.pinyin,
        explanation.individual.join(", "),
        explanation.overall,
        explanation.cultural,
        explanation.personality,
    )
}

/// Write favorites to `path`, creating parent directories
///
/// Overwrites any existing file. Fails with `NothingToExport` when there are
/// no favorites.
pub fn export_to_file(favorites: &[NameSuggestion], path: &Path) -> Result<(), ZhnameError> {
    if favorites.is_empty() {
        return Err(ZhnameError::NothingToExport);
    }

    let export_error = |source| ZhnameError::Export {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(export_error)?;
    }

    fs::write(path, format_export(favorites)).map_err(export_error)?;
    log::debug!("Exported {} favorites to {}", favorites.len(), path.display());
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod export_tests;
