// Client-side preferences that survive restarts (currently only the theme)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

/// Where preferences live: a JSON file, or memory for throwaway sessions
#[derive(Debug)]
pub struct PreferencesStore {
    path: Option<PathBuf>,
    memory: RefCell<Preferences>,
}

impl PreferencesStore {
    /// `prefs.json` next to the config file
    pub fn default_location() -> Result<Self> {
        Ok(Self::at(crate::config::app_dir()?.join("prefs.json")))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            memory: RefCell::new(Preferences::default()),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            memory: RefCell::new(Preferences::default()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load preferences; a missing or unreadable file yields defaults
    pub fn load(&self) -> Preferences {
        let Some(path) = &self.path else {
            return *self.memory.borrow();
        };

        if !path.exists() {
            return Preferences::default();
        }

        match read_prefs(path) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "ignoring unreadable preferences");
                Preferences::default()
            }
        }
    }

    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        let Some(path) = &self.path else {
            *self.memory.borrow_mut() = *prefs;
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create preferences directory: {}", parent.display())
            })?;
        }

        let contents =
            serde_json::to_string_pretty(prefs).context("Failed to serialize preferences")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write preferences: {}", path.display()))?;

        Ok(())
    }
}

fn read_prefs(path: &Path) -> Result<Preferences> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read preferences: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse preferences: {}", path.display()))
}
