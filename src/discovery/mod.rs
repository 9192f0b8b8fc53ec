//! Finding settings.js candidates on disk.
//!
//! The heuristic mirrors where Mindcraft checkouts usually live: a few
//! conventional roots, each probed for `mindcraft*/settings.js` and a direct
//! `settings.js` child. Anything found is filtered through `is_candidate`,
//! which requires the file to actually parse as a settings literal.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::SettingsDocument;

const INSTALL_DIR_NAMES: [&str; 2] = ["mindcraft", "mindcraft-main"];
const SETTINGS_FILE_NAME: &str = "settings.js";

/// Conventional roots to probe when the caller gives none.
pub fn default_candidates() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Some(home) = dirs::home_dir() {
        roots.push(home.join("Desktop"));
        roots.push(home.join("Documents"));
        roots.push(home.join("Downloads"));
        roots.push(home);
    }
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    roots
}

/// True when the path holds a file the document model can load.
pub fn is_candidate(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    SettingsDocument::load(&contents).is_ok()
}

/// Expands each root to the settings files beneath it and keeps the ones
/// that parse. Order follows the roots; duplicates are dropped.
pub fn discover(roots: &[PathBuf]) -> Vec<PathBuf> {
    let mut found = Vec::new();
    for root in roots {
        if !root.is_dir() {
            // A root may also name a settings file directly.
            if root.is_file() {
                push_if_candidate(&mut found, root.clone());
            }
            continue;
        }
        for dir_name in INSTALL_DIR_NAMES {
            push_if_candidate(&mut found, root.join(dir_name).join(SETTINGS_FILE_NAME));
        }
        push_if_candidate(&mut found, root.join(SETTINGS_FILE_NAME));
    }
    found
}

fn push_if_candidate(found: &mut Vec<PathBuf>, path: PathBuf) {
    if found.contains(&path) || !path.is_file() {
        return;
    }
    if is_candidate(&path) {
        found.push(path);
    }
}

#[cfg(test)]
mod tests;
