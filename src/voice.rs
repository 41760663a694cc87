//! Spoken phrase matching for the voice command widget.
//!
//! Matching is plain substring search over the lower-cased transcript. Rules
//! are tried in order and the first hit decides the action.

use crate::contact::{ContactField, FORM_ID};
use crate::content::Section;
use crate::platform::{FormSubmit, Platform};
use crate::prefs::{PreferenceStore, Theme};

pub const RECOGNITION_LOCALE: &str = "en-US";
/// How long a feedback toast stays on screen.
pub const TOAST_MS: f64 = 3000.0;

pub const LISTENING: &str = "🎤 Listening... Speak now!";
pub const START_FAILED: &str = "❌ Could not start listening";
pub const RECOGNITION_ERROR: &str = "❌ Error: Could not understand. Try again!";
pub const HELP: &str =
    "💡 Try: \"go to projects\", \"dark mode\", \"my name is ...\" or \"send the message\"";
pub const NOT_RECOGNIZED: &str = "🤔 Command not recognized. Try \"help\" for available commands.";
const FORM_MISSING: &str = "❌ Contact form not found";
const FORM_INCOMPLETE: &str = "✋ Fill in every field before sending";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceAction {
    ScrollTo(Section),
    SetTheme(Theme),
    ToggleTheme,
    FillContact(ContactField, String),
    SubmitContact,
    Reply(&'static str),
}

const FILL_RULES: &[(&str, ContactField)] = &[
    ("my name is ", ContactField::Name),
    ("my email is ", ContactField::Email),
    ("the subject is ", ContactField::Subject),
    ("subject is ", ContactField::Subject),
    ("my message is ", ContactField::Message),
    ("message is ", ContactField::Message),
];

const SUBMIT_PHRASES: &[&str] = &["send the message", "send message", "submit"];

const THEME_RULES: &[(&str, Theme)] = &[("dark mode", Theme::Dark), ("light mode", Theme::Light)];

const TOGGLE_PHRASES: &[&str] = &["toggle theme", "change theme", "switch theme"];

const NAVIGATION_RULES: &[(&[&str], Section)] = &[
    (&["home", "top"], Section::Home),
    (&["about"], Section::About),
    (&["skill"], Section::Skills),
    (&["project"], Section::Projects),
    (&["service"], Section::Services),
    (&["certificate"], Section::Certificates),
    (&["github"], Section::GitHub),
    (&["contact", "hire", "recruit"], Section::Contact),
];

/// Maps a recognised utterance to exactly one action.
pub fn interpret(transcript: &str) -> VoiceAction {
    let command = transcript.trim().to_lowercase();

    for (phrase, field) in FILL_RULES {
        if let Some((_, rest)) = command.split_once(phrase) {
            let value = rest.trim();
            if value.is_empty() {
                continue;
            }
            let value = match field {
                ContactField::Email => spoken_email(value),
                _ => value.to_string(),
            };
            return VoiceAction::FillContact(*field, value);
        }
    }

    if SUBMIT_PHRASES.iter().any(|p| command.contains(p)) {
        return VoiceAction::SubmitContact;
    }
    if let Some((_, theme)) = THEME_RULES.iter().find(|(p, _)| command.contains(p)) {
        return VoiceAction::SetTheme(*theme);
    }
    if TOGGLE_PHRASES.iter().any(|p| command.contains(p)) {
        return VoiceAction::ToggleTheme;
    }
    for (phrases, section) in NAVIGATION_RULES {
        if phrases.iter().any(|p| command.contains(p)) {
            return VoiceAction::ScrollTo(*section);
        }
    }
    if command.contains("help") {
        return VoiceAction::Reply(HELP);
    }
    VoiceAction::Reply(NOT_RECOGNIZED)
}

/// "ada at example dot com" -> "ada@example.com"
fn spoken_email(value: &str) -> String {
    value
        .replace(" at ", "@")
        .replace(" dot ", ".")
        .split_whitespace()
        .collect()
}

fn section_feedback(section: Section) -> &'static str {
    match section {
        Section::Home => "🏠 Going to Home",
        Section::About => "👤 Going to About",
        Section::Skills => "💻 Going to Skills",
        Section::Projects => "🚀 Going to Projects",
        Section::Services => "⚡ Going to Services",
        Section::Certificates => "🏆 Going to Certificates",
        Section::GitHub => "🐙 Going to GitHub Stats",
        Section::Contact => "📧 Going to Contact",
    }
}

/// Whatever owns the theme. Voice commands change it only through this.
pub trait ThemeControl {
    fn set_theme(&mut self, theme: Theme);
    fn toggle_theme(&mut self);
}

impl ThemeControl for PreferenceStore {
    fn set_theme(&mut self, theme: Theme) {
        PreferenceStore::set_theme(self, theme);
    }

    fn toggle_theme(&mut self) {
        PreferenceStore::toggle_theme(self);
    }
}

impl VoiceAction {
    /// Performs the action and returns the toast text to show.
    pub fn execute(&self, platform: &dyn Platform, theme: &mut impl ThemeControl) -> String {
        match self {
            VoiceAction::ScrollTo(section) => {
                platform.scroll_to_element(section.id());
                section_feedback(*section).to_string()
            }
            VoiceAction::SetTheme(Theme::Dark) => {
                theme.set_theme(Theme::Dark);
                "🌙 Dark mode on".to_string()
            }
            VoiceAction::SetTheme(Theme::Light) => {
                theme.set_theme(Theme::Light);
                "☀️ Light mode on".to_string()
            }
            VoiceAction::ToggleTheme => {
                theme.toggle_theme();
                "🌓 Theme switched".to_string()
            }
            VoiceAction::FillContact(field, value) => {
                if !platform.fill_input(field.input_id(), value) {
                    return FORM_MISSING.to_string();
                }
                platform.scroll_to_element(Section::Contact.id());
                format!("✍️ Filled {}: {value}", field.label())
            }
            VoiceAction::SubmitContact => {
                let text = match platform.submit_form(FORM_ID) {
                    FormSubmit::Submitted => "📨 Sending your message",
                    FormSubmit::Invalid => FORM_INCOMPLETE,
                    FormSubmit::Missing => FORM_MISSING,
                };
                text.to_string()
            }
            VoiceAction::Reply(text) => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::platform::MemoryPlatform;
    use crate::prefs::THEME_KEY;

    /// Counts theme requests without touching any storage.
    #[derive(Default)]
    struct ThemeLog {
        set: Vec<Theme>,
        toggles: usize,
    }

    impl ThemeControl for ThemeLog {
        fn set_theme(&mut self, theme: Theme) {
            self.set.push(theme);
        }

        fn toggle_theme(&mut self) {
            self.toggles += 1;
        }
    }

    #[test]
    fn test_navigation() {
        assert_eq!(interpret("Go to projects"), VoiceAction::ScrollTo(Section::Projects));
        assert_eq!(interpret("show me your skills"), VoiceAction::ScrollTo(Section::Skills));
        assert_eq!(interpret("back to the top"), VoiceAction::ScrollTo(Section::Home));
        assert_eq!(interpret("GitHub"), VoiceAction::ScrollTo(Section::GitHub));
        assert_eq!(interpret("I want to hire you"), VoiceAction::ScrollTo(Section::Contact));
    }

    #[test]
    fn test_first_rule_wins() {
        // "home" precedes "about" in the rule list
        assert_eq!(interpret("about home"), VoiceAction::ScrollTo(Section::Home));
        // theme beats navigation
        assert_eq!(interpret("switch to dark mode"), VoiceAction::SetTheme(Theme::Dark));
        assert_eq!(interpret("project theme toggle theme"), VoiceAction::ToggleTheme);
        // filling beats everything it contains
        assert_eq!(
            interpret("my message is I liked your projects"),
            VoiceAction::FillContact(ContactField::Message, "i liked your projects".to_string())
        );
    }

    #[test]
    fn test_theme_phrases() {
        assert_eq!(interpret("Light mode please"), VoiceAction::SetTheme(Theme::Light));
        assert_eq!(interpret("dark mode"), VoiceAction::SetTheme(Theme::Dark));
        assert_eq!(interpret("change theme"), VoiceAction::ToggleTheme);
    }

    #[test]
    fn test_named_mode_never_flips_current_theme() {
        let platform = Arc::new(MemoryPlatform::default());
        let mut store = PreferenceStore::load(platform.clone());
        assert_eq!(store.theme(), Theme::Light);

        let msg = interpret("switch to light mode").execute(&*platform, &mut store);
        assert_eq!(msg, "☀️ Light mode on");
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(platform.load(THEME_KEY).as_deref(), Some("false"));

        interpret("dark mode").execute(&*platform, &mut store);
        interpret("dark mode").execute(&*platform, &mut store);
        assert_eq!(store.theme(), Theme::Dark);
        assert!(platform.snapshot().dark_class);

        interpret("toggle theme").execute(&*platform, &mut store);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_blocked_submit_is_not_reported_as_sending() {
        let platform = MemoryPlatform::with_invalid_forms();
        let msg = VoiceAction::SubmitContact.execute(&platform, &mut ThemeLog::default());
        assert_eq!(msg, FORM_INCOMPLETE);
        assert!(platform.snapshot().submitted.is_empty());
    }

    #[test]
    fn test_fill_and_submit() {
        assert_eq!(
            interpret("my name is Ada"),
            VoiceAction::FillContact(ContactField::Name, "ada".to_string())
        );
        assert_eq!(
            interpret("my email is ada at example dot com"),
            VoiceAction::FillContact(ContactField::Email, "ada@example.com".to_string())
        );
        assert_eq!(
            interpret("the subject is internship"),
            VoiceAction::FillContact(ContactField::Subject, "internship".to_string())
        );
        assert_eq!(interpret("send the message"), VoiceAction::SubmitContact);
        // nothing after the phrase
        assert_eq!(interpret("my name is"), VoiceAction::Reply(NOT_RECOGNIZED));
    }

    #[test]
    fn test_replies() {
        assert_eq!(interpret("help"), VoiceAction::Reply(HELP));
        assert_eq!(interpret("banana"), VoiceAction::Reply(NOT_RECOGNIZED));
        assert_eq!(interpret(""), VoiceAction::Reply(NOT_RECOGNIZED));
    }

    #[test]
    fn test_execute_effects() {
        let platform = MemoryPlatform::default();
        let mut theme = ThemeLog::default();

        let msg = VoiceAction::ScrollTo(Section::Services).execute(&platform, &mut theme);
        assert_eq!(msg, "⚡ Going to Services");

        VoiceAction::ToggleTheme.execute(&platform, &mut theme);
        VoiceAction::SetTheme(Theme::Dark).execute(&platform, &mut theme);
        assert_eq!(theme.toggles, 1);
        assert_eq!(theme.set, vec![Theme::Dark]);

        VoiceAction::FillContact(ContactField::Name, "ada".to_string()).execute(&platform, &mut theme);
        let msg = VoiceAction::SubmitContact.execute(&platform, &mut theme);
        assert_eq!(msg, "📨 Sending your message");

        let msg = VoiceAction::Reply(HELP).execute(&platform, &mut theme);
        assert_eq!(msg, HELP);
        assert_eq!(theme.toggles, 1);
        assert_eq!(theme.set.len(), 1);

        let state = platform.snapshot();
        assert_eq!(state.scrolled_to, vec!["services".to_string(), "contact".to_string()]);
        assert_eq!(state.filled, vec![("contact-name".to_string(), "ada".to_string())]);
        assert_eq!(state.submitted, vec![FORM_ID.to_string()]);
    }
}
