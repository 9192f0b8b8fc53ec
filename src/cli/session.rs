use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::discovery::{default_candidates, discover};
use crate::document::SettingsDocument;

/// One loaded settings file: its path, the exact text it held at load time,
/// and the parsed document. Mutations happen on the document; `save` renders
/// the patched text and writes it back.
pub(crate) struct EditSession {
    pub path: PathBuf,
    pub text: String,
    pub document: SettingsDocument,
}

impl EditSession {
    pub fn open(file: Option<&Path>, verbose: bool) -> Result<Self> {
        let path = match file {
            Some(path) => path.to_path_buf(),
            None => resolve_default(verbose)?,
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed reading settings at {}", path.display()))?;
        let document = SettingsDocument::load(&text)
            .with_context(|| format!("Failed parsing settings at {}", path.display()))?;

        if verbose {
            eprintln!(
                "loaded {} settings from {}",
                document.len(),
                path.display()
            );
        }

        Ok(Self {
            path,
            text,
            document,
        })
    }

    pub fn save(&self) -> Result<()> {
        let new_text = self
            .document
            .render(&self.text)
            .context("Failed rendering updated settings")?;
        fs::write(&self.path, new_text)
            .with_context(|| format!("Failed writing settings to {}", self.path.display()))?;
        Ok(())
    }
}

fn resolve_default(verbose: bool) -> Result<PathBuf> {
    let roots = default_candidates();
    if verbose {
        eprintln!("scanning {} default locations", roots.len());
    }
    let found = discover(&roots);
    match found.into_iter().next() {
        Some(path) => {
            if verbose {
                eprintln!("using {}", path.display());
            }
            Ok(path)
        }
        None => bail!(
            "No Mindcraft settings.js found in the usual places. Pass --file or run `mindset scan`."
        ),
    }
}
