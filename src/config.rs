//! Site settings read from the environment (and `.env` when present).

use std::sync::LazyLock;

use crate::contact::EmailJsConfig;
use crate::content::PERSONAL_INFO;

pub const DEFAULT_GITHUB_USERNAME: &str = "HAMZAZAWAK17";

pub static SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::from_env);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub github_username: String,
    /// Optional; raises the GitHub rate limit from 60 to 5000 requests an hour.
    pub github_token: Option<String>,
    pub emailjs: EmailJsConfig,
    /// Address the contact form delivers to.
    pub contact_recipient: String,
}

impl SiteConfig {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("no .env loaded: {e}");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = EmailJsConfig::default();
        Self {
            github_username: get("GITHUB_USERNAME")
                .unwrap_or_else(|| DEFAULT_GITHUB_USERNAME.to_string()),
            github_token: get("GITHUB_TOKEN"),
            emailjs: EmailJsConfig {
                service_id: get("EMAILJS_SERVICE_ID").unwrap_or(defaults.service_id),
                template_id: get("EMAILJS_TEMPLATE_ID").unwrap_or(defaults.template_id),
                public_key: get("EMAILJS_PUBLIC_KEY").unwrap_or(defaults.public_key),
                private_key: get("EMAILJS_PRIVATE_KEY"),
            },
            contact_recipient: get("CONTACT_RECIPIENT")
                .unwrap_or_else(|| PERSONAL_INFO.email.to_string()),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.github_username, DEFAULT_GITHUB_USERNAME);
        assert_eq!(config.github_token, None);
        assert_eq!(config.contact_recipient, PERSONAL_INFO.email);
        assert!(config.emailjs.is_placeholder());
        assert_eq!(config.emailjs.private_key, None);
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let vars = HashMap::from([
            ("GITHUB_USERNAME", "octocat"),
            ("GITHUB_TOKEN", "ghp_abc"),
            ("EMAILJS_SERVICE_ID", "service_1"),
            ("EMAILJS_TEMPLATE_ID", "template_1"),
            ("EMAILJS_PUBLIC_KEY", "key_1"),
            ("EMAILJS_PRIVATE_KEY", "  "),
            ("CONTACT_RECIPIENT", "me@example.com"),
        ]);
        let config = SiteConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.github_username, "octocat");
        assert_eq!(config.github_token.as_deref(), Some("ghp_abc"));
        assert_eq!(config.emailjs.service_id, "service_1");
        assert!(!config.emailjs.is_placeholder());
        // blank means unset
        assert_eq!(config.emailjs.private_key, None);
        assert_eq!(config.contact_recipient, "me@example.com");
    }
}
