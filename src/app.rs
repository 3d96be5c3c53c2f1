//! Application context: explicit state passed to rendering entry points.
//!
//! The toggles mutate exactly one preference each, persist it, and re-render
//! what depends on it. Nothing here is ambient or global, which keeps the
//! flows testable.

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::i18n::Language;
use crate::menu::{build_menu, MenuEntry};
use crate::prefs::{PreferenceStore, Preferences, Theme};
use crate::render::Document;

pub struct AppContext {
    config: Config,
    store: PreferenceStore,
    preferences: Preferences,
}

impl AppContext {
    /// Load persisted preferences and build the context.
    pub fn new(config: Config) -> Self {
        let store = PreferenceStore::open(&config.preferences_file);
        let preferences = store.load();
        info!(
            "Loaded preferences: language={}, theme={}",
            preferences.language.code(),
            preferences.theme.as_str()
        );

        Self {
            config,
            store,
            preferences,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.preferences.language
    }

    pub fn theme(&self) -> Theme {
        self.preferences.theme
    }

    /// Apply the saved language to a freshly loaded page.
    pub fn render_page(
        &self,
        document: &mut Document,
        current_path: &str,
        current_fragment: &str,
    ) -> Vec<MenuEntry> {
        document.translate(self.language());
        build_menu(self.language(), current_path, current_fragment)
    }

    /// Switch the active language: persist it, re-translate every
    /// translatable node, and rebuild the navigation menu.
    pub fn set_language(
        &mut self,
        language: Language,
        document: &mut Document,
        current_path: &str,
        current_fragment: &str,
    ) -> Result<Vec<MenuEntry>> {
        self.preferences.language = language;
        self.store.save(&self.preferences)?;
        info!("Language set to {}", language.code());

        document.translate(language);
        Ok(build_menu(language, current_path, current_fragment))
    }

    /// The language toggle control: en ↔ mr.
    pub fn toggle_language(
        &mut self,
        document: &mut Document,
        current_path: &str,
        current_fragment: &str,
    ) -> Result<Vec<MenuEntry>> {
        let next = self.language().toggled();
        self.set_language(next, document, current_path, current_fragment)
    }

    /// The theme toggle control. Persists the new theme and returns it with
    /// the localized label for the toggle button.
    pub fn toggle_theme(&mut self) -> Result<(Theme, &'static str)> {
        let next = self.theme().toggled();
        self.preferences.theme = next;
        self.store.save(&self.preferences)?;
        info!("Theme set to {}", next.as_str());

        Ok((next, next.button_label(self.language())))
    }
}
