//! Configuration handling for the contact form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default EmailJS account public key
pub const DEFAULT_PUBLIC_KEY: &str = "_5E3TBTSxOfgNVIWG";
/// Default EmailJS service identifier
pub const DEFAULT_SERVICE_ID: &str = "service_fkb2flr";
/// Default EmailJS template identifier
pub const DEFAULT_TEMPLATE_ID: &str = "template_frnzbtp";
/// Default EmailJS API base URL
pub const DEFAULT_API_BASE: &str = "https://api.emailjs.com";
/// Default recipient label passed as `to_name`
pub const DEFAULT_TO_NAME: &str = "Support Team";
/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User configuration for the contact form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// EmailJS account public key
    pub public_key: Option<String>,
    /// EmailJS service identifier
    pub service_id: Option<String>,
    /// EmailJS template identifier
    pub template_id: Option<String>,
    /// EmailJS private key, sent as `accessToken` when set
    pub private_key: Option<String>,
    /// API base URL
    pub api_base: Option<String>,
    /// Recipient label
    pub to_name: Option<String>,
    /// HTTP request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl ContactConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let mut config: ContactConfig = serde_json::from_str(&content)?;
                if config.timeout_secs == Some(0) {
                    tracing::warn!("Ignoring timeout_secs = 0 in {}", path.display());
                    config.timeout_secs = None;
                }
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Apply `CONTACT_*` overrides; `lookup` resolves a variable name to its value
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let string_overrides: [(&str, &mut Option<String>); 6] = [
            ("CONTACT_EMAILJS_PUBLIC_KEY", &mut self.public_key),
            ("CONTACT_EMAILJS_SERVICE_ID", &mut self.service_id),
            ("CONTACT_EMAILJS_TEMPLATE_ID", &mut self.template_id),
            ("CONTACT_EMAILJS_PRIVATE_KEY", &mut self.private_key),
            ("CONTACT_EMAILJS_API_BASE", &mut self.api_base),
            ("CONTACT_TO_NAME", &mut self.to_name),
        ];
        for (key, slot) in string_overrides {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                *slot = Some(value);
            }
        }

        if let Some(raw) = lookup("CONTACT_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout_secs = Some(secs),
                _ => tracing::warn!("Ignoring invalid CONTACT_TIMEOUT_SECS: {raw}"),
            }
        }
    }

    pub fn public_key(&self) -> &str {
        self.public_key.as_deref().unwrap_or(DEFAULT_PUBLIC_KEY)
    }

    pub fn service_id(&self) -> &str {
        self.service_id.as_deref().unwrap_or(DEFAULT_SERVICE_ID)
    }

    pub fn template_id(&self) -> &str {
        self.template_id.as_deref().unwrap_or(DEFAULT_TEMPLATE_ID)
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn to_name(&self) -> &str {
        self.to_name.as_deref().unwrap_or(DEFAULT_TO_NAME)
    }

    pub fn timeout_secs(&self) -> u64 {
        // Zero counts as unset
        self.timeout_secs
            .filter(|&secs| secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}
