use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::i18n::{Language, Translations};
use crate::platform::Platform;
use crate::prefs::{PreferenceStore, Theme};
use crate::voice::ThemeControl;

/// Theme and language shared by every component.
///
/// The signals start at the defaults on both server and client so hydration
/// sees identical markup; persisted values are restored by an effect once
/// the app is running in the browser.
#[derive(Clone, Copy)]
pub struct Preferences {
    store: StoredValue<Arc<Mutex<PreferenceStore>>>,
    theme: RwSignal<Theme>,
    language: RwSignal<Language>,
}

fn default_platform() -> Arc<dyn Platform> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(crate::platform::BrowserPlatform)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(crate::platform::MemoryPlatform::default())
    }
}

pub fn provide_preferences() -> Preferences {
    let prefs = Preferences {
        store: StoredValue::new(Arc::new(Mutex::new(PreferenceStore::new(
            default_platform(),
        )))),
        theme: RwSignal::new(Theme::default()),
        language: RwSignal::new(Language::default()),
    };

    // effects never run during SSR
    Effect::new(move |_| {
        let (theme, language) = prefs.with_store(|s| {
            s.restore();
            (s.theme(), s.language())
        });
        prefs.theme.set(theme);
        prefs.language.set(language);
    });

    provide_context(prefs);
    prefs
}

pub fn use_preferences() -> Preferences {
    expect_context::<Preferences>()
}

impl Preferences {
    fn with_store<R>(&self, f: impl FnOnce(&mut PreferenceStore) -> R) -> R {
        self.store.with_value(|store| {
            let mut store = store.lock().expect("should be able to lock preferences");
            f(&mut store)
        })
    }

    /// Dictionary for the active language. Tracks the language signal.
    pub fn t(&self) -> &'static Translations {
        self.language.get().translations()
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.with_store(|s| s.set_theme(theme));
        self.theme.set(theme);
    }

    pub fn toggle_theme(&self) {
        let theme = self.with_store(|s| s.toggle_theme());
        self.theme.set(theme);
    }

    pub fn set_language(&self, language: Language) {
        self.with_store(|s| s.set_language(language));
        self.language.set(language);
    }

    pub fn platform(&self) -> Arc<dyn Platform> {
        self.with_store(|s| s.platform())
    }
}

impl ThemeControl for Preferences {
    fn set_theme(&mut self, theme: Theme) {
        Preferences::set_theme(self, theme);
    }

    fn toggle_theme(&mut self) {
        Preferences::toggle_theme(self);
    }
}
