//! Preference persistence.
//!
//! Two durable key-value entries (display language and theme), read once at
//! startup and rewritten on every toggle, plus the session-scoped flags that
//! die with the browsing session. The file is replaced atomically so a
//! crash mid-write never corrupts the stored preferences.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::warn;

use crate::i18n::{strings_for, Language};

/// Site color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a persisted value, falling back to the default on junk.
    pub fn from_stored(value: &str) -> Theme {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Localized label shown on the theme toggle button.
    ///
    /// The button advertises the theme you would switch to, so the label
    /// while dark is active reads "Light Mode".
    pub fn button_label(&self, language: Language) -> &'static str {
        let strings = strings_for(language);
        match self {
            Theme::Dark => strings.theme_light_mode,
            Theme::Light => strings.theme_dark_mode,
        }
    }
}

/// The two persisted preferences, with their defaults for first-time visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

/// On-disk shape: the same two string keys the site keeps in local storage.
#[derive(Debug, Serialize, Deserialize)]
struct StoredPreferences {
    lang: String,
    theme: String,
}

/// Durable store for [`Preferences`].
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load preferences, falling back to defaults when the file is missing,
    /// unreadable, or holds values we don't recognize (fail-soft).
    pub fn load(&self) -> Preferences {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Preferences::default(),
        };

        let stored: StoredPreferences = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Ignoring corrupt preferences file {:?}: {}", self.path, e);
                return Preferences::default();
            }
        };

        Preferences {
            language: Language::from_code(&stored.lang).unwrap_or_default(),
            theme: Theme::from_stored(&stored.theme),
        }
    }

    /// Persist preferences, replacing the file atomically.
    pub fn save(&self, preferences: &Preferences) -> Result<()> {
        let parent = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = parent {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create preferences dir {:?}", dir))?;
        }

        let stored = StoredPreferences {
            lang: preferences.language.code().to_string(),
            theme: preferences.theme.as_str().to_string(),
        };

        let temp = NamedTempFile::new_in(parent.unwrap_or_else(|| Path::new(".")))
            .context("Failed to create temp preferences file")?;
        {
            let mut writer = BufWriter::new(&temp);
            serde_json::to_writer_pretty(&mut writer, &stored)
                .context("Failed to serialize preferences")?;
            writer.flush().context("Failed to flush preferences")?;
        }
        temp.persist(&self.path)
            .with_context(|| format!("Failed to replace {:?}", self.path))?;

        Ok(())
    }
}

/// Session-scoped flags, never persisted. Cleared when the session ends by
/// virtue of living only in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionFlags {
    popup_shown: bool,
}

impl SessionFlags {
    pub fn popup_shown(&self) -> bool {
        self.popup_shown
    }

    /// Set permanently for the rest of the session.
    pub fn mark_popup_shown(&mut self) {
        self.popup_shown = true;
    }
}
