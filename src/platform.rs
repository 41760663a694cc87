//! Access to browser globals (storage, document, scrolling) behind a trait,
//! so preference and voice logic runs the same under SSR, tests and WASM.

use std::collections::HashMap;
use std::sync::Mutex;

/// Page dimensions needed to turn a scroll offset into progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub document_height: f64,
    pub viewport_height: f64,
}

/// What happened when a form submission was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSubmit {
    Submitted,
    /// The browser blocked it, e.g. a required field is empty.
    Invalid,
    Missing,
}

pub trait Platform: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str);
    fn set_dark_class(&self, dark: bool);
    fn set_document_lang(&self, lang: &str);
    fn viewport(&self) -> Viewport;
    /// Returns false when no element carries `id`.
    fn scroll_to_element(&self, id: &str) -> bool;
    fn scroll_to_top(&self);
    /// Sets an input's value and fires `input` so bound signals follow.
    fn fill_input(&self, id: &str, value: &str) -> bool;
    fn submit_form(&self, id: &str) -> FormSubmit;
}

/// In-memory platform. Used while rendering on the server and in tests;
/// it records every side effect so callers can inspect them.
#[derive(Debug, Default)]
pub struct MemoryPlatform {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default, Clone)]
pub struct MemoryState {
    pub storage: HashMap<String, String>,
    pub dark_class: bool,
    pub lang: Option<String>,
    pub scrolled_to: Vec<String>,
    pub filled: Vec<(String, String)>,
    pub submitted: Vec<String>,
    /// Makes every submission fail validation.
    pub forms_invalid: bool,
    pub viewport: Viewport,
}

impl MemoryPlatform {
    pub fn with_storage(entries: &[(&str, &str)]) -> Self {
        let platform = Self::default();
        {
            let mut state = platform.state.lock().expect("should be able to lock state");
            for (k, v) in entries {
                state.storage.insert(k.to_string(), v.to_string());
            }
        }
        platform
    }

    pub fn with_invalid_forms() -> Self {
        let platform = Self::default();
        platform.with_state(|s| s.forms_invalid = true);
        platform
    }

    pub fn snapshot(&self) -> MemoryState {
        self.state
            .lock()
            .expect("should be able to lock state")
            .clone()
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut MemoryState) -> R) -> R {
        let mut state = self.state.lock().expect("should be able to lock state");
        f(&mut state)
    }
}

impl Platform for MemoryPlatform {
    fn load(&self, key: &str) -> Option<String> {
        self.with_state(|s| s.storage.get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) {
        self.with_state(|s| {
            s.storage.insert(key.to_string(), value.to_string());
        })
    }

    fn set_dark_class(&self, dark: bool) {
        self.with_state(|s| s.dark_class = dark)
    }

    fn set_document_lang(&self, lang: &str) {
        self.with_state(|s| s.lang = Some(lang.to_string()))
    }

    fn viewport(&self) -> Viewport {
        self.with_state(|s| s.viewport)
    }

    fn scroll_to_element(&self, id: &str) -> bool {
        self.with_state(|s| s.scrolled_to.push(id.to_string()));
        true
    }

    fn scroll_to_top(&self) {
        self.with_state(|s| s.scrolled_to.push(String::new()))
    }

    fn fill_input(&self, id: &str, value: &str) -> bool {
        self.with_state(|s| s.filled.push((id.to_string(), value.to_string())));
        true
    }

    fn submit_form(&self, id: &str) -> FormSubmit {
        self.with_state(|s| {
            if s.forms_invalid {
                return FormSubmit::Invalid;
            }
            s.submitted.push(id.to_string());
            FormSubmit::Submitted
        })
    }
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserPlatform;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{
        Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior,
        ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
    };

    use super::{FormSubmit, Platform, Viewport};

    /// The real thing: `window.localStorage` and the live document.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserPlatform;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    impl Platform for BrowserPlatform {
        fn load(&self, key: &str) -> Option<String> {
            storage()?.get_item(key).ok().flatten()
        }

        fn store(&self, key: &str, value: &str) {
            if let Some(storage) = storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("could not persist {key}");
                }
            }
        }

        fn set_dark_class(&self, dark: bool) {
            let Some(root) = document().and_then(|d| d.document_element()) else {
                return;
            };
            let classes = root.class_list();
            let res = if dark {
                classes.add_1("dark")
            } else {
                classes.remove_1("dark")
            };
            if res.is_err() {
                log::warn!("could not update theme class");
            }
        }

        fn set_document_lang(&self, lang: &str) {
            let Some(root) = document().and_then(|d| d.document_element()) else {
                return;
            };
            if root.set_attribute("lang", lang).is_err() {
                log::warn!("could not update document lang");
            }
        }

        fn viewport(&self) -> Viewport {
            let Some(window) = web_sys::window() else {
                return Viewport::default();
            };
            let document_height = window
                .document()
                .and_then(|d| d.document_element())
                .map(|el| el.scroll_height() as f64)
                .unwrap_or_default();
            let viewport_height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or_default();
            Viewport {
                document_height,
                viewport_height,
            }
        }

        fn scroll_to_element(&self, id: &str) -> bool {
            let Some(el) = document().and_then(|d| d.get_element_by_id(id)) else {
                return false;
            };
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
            true
        }

        fn scroll_to_top(&self) {
            if let Some(window) = web_sys::window() {
                let opts = ScrollToOptions::new();
                opts.set_top(0.0);
                opts.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&opts);
            }
        }

        fn fill_input(&self, id: &str, value: &str) -> bool {
            let Some(el) = document().and_then(|d| d.get_element_by_id(id)) else {
                return false;
            };
            if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                input.set_value(value);
            } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
                area.set_value(value);
            } else {
                return false;
            }
            match Event::new("input") {
                Ok(ev) => el.dispatch_event(&ev).is_ok(),
                Err(_) => false,
            }
        }

        fn submit_form(&self, id: &str) -> FormSubmit {
            let Some(form) = document()
                .and_then(|d| d.get_element_by_id(id))
                .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
            else {
                return FormSubmit::Missing;
            };
            // shows the browser's own hints on the offending fields
            if !form.report_validity() {
                return FormSubmit::Invalid;
            }
            match form.request_submit() {
                Ok(()) => FormSubmit::Submitted,
                Err(e) => {
                    log::warn!("could not submit {id}: {e:?}");
                    FormSubmit::Invalid
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_platform_records_effects() {
        let platform = MemoryPlatform::with_storage(&[("language", "en")]);
        assert_eq!(platform.load("language").as_deref(), Some("en"));
        assert_eq!(platform.load("darkMode"), None);

        platform.store("darkMode", "true");
        platform.set_dark_class(true);
        platform.set_document_lang("en");
        assert!(platform.scroll_to_element("projects"));
        assert!(platform.fill_input("contact-name", "ada"));
        assert_eq!(platform.submit_form("contact-form"), FormSubmit::Submitted);

        let state = platform.snapshot();
        assert_eq!(state.storage.get("darkMode").map(String::as_str), Some("true"));
        assert!(state.dark_class);
        assert_eq!(state.lang.as_deref(), Some("en"));
        assert_eq!(state.scrolled_to, vec!["projects".to_string()]);
        assert_eq!(
            state.filled,
            vec![("contact-name".to_string(), "ada".to_string())]
        );
        assert_eq!(state.submitted, vec!["contact-form".to_string()]);
    }

    #[test]
    fn test_invalid_form_is_not_submitted() {
        let platform = MemoryPlatform::with_invalid_forms();
        assert_eq!(platform.submit_form("contact-form"), FormSubmit::Invalid);
        assert!(platform.snapshot().submitted.is_empty());
    }
}
