use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::i18n::{Language, Translations};
use crate::platform::Platform;

pub const THEME_KEY: &str = "darkMode";
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored as a JSON boolean string, `"true"` meaning dark.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "true" => Some(Theme::Dark),
            "false" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn as_stored(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }
}

/// Theme and language, persisted through a [`Platform`].
///
/// Every setter writes the new value to storage and applies the matching
/// document effect (`dark` class on the root, `lang` attribute).
pub struct PreferenceStore {
    platform: Arc<dyn Platform>,
    theme: Theme,
    language: Language,
}

impl PreferenceStore {
    /// Defaults only; nothing is read or applied yet.
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self {
            platform,
            theme: Theme::default(),
            language: Language::default(),
        }
    }

    pub fn load(platform: Arc<dyn Platform>) -> Self {
        let mut store = Self::new(platform);
        store.restore();
        store
    }

    /// Reads persisted values, ignoring anything unrecognised, and applies
    /// the result to the document. Nothing is written back.
    pub fn restore(&mut self) {
        if let Some(theme) = self
            .platform
            .load(THEME_KEY)
            .and_then(|v| Theme::from_stored(&v))
        {
            self.theme = theme;
        }
        if let Some(language) = self
            .platform
            .load(LANGUAGE_KEY)
            .and_then(|v| Language::from_code(&v))
        {
            self.language = language;
        }
        self.platform.set_dark_class(self.theme.is_dark());
        self.platform.set_document_lang(self.language.code());
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn translations(&self) -> &'static Translations {
        self.language.translations()
    }

    pub fn platform(&self) -> Arc<dyn Platform> {
        Arc::clone(&self.platform)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.platform.store(THEME_KEY, theme.as_stored());
        self.platform.set_dark_class(theme.is_dark());
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.platform.store(LANGUAGE_KEY, language.code());
        self.platform.set_document_lang(language.code());
    }

    /// Unsupported codes are ignored. Returns whether the code was accepted.
    pub fn set_language_code(&mut self, code: &str) -> bool {
        match Language::from_code(code) {
            Some(language) => {
                self.set_language(language);
                true
            }
            None => false,
        }
    }
}
