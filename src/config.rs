//! Page configuration: element ids, selectors, timings and copy limits.
//!
//! Defaults match the portfolio markup. A page may embed
//! `<script type="application/json" id="portfolio-config">` holding any
//! subset of these fields (camelCase keys) to override them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::state::typing::TypingTimings;

/// Id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

pub const DEFAULT_PHRASES: [&str; 3] = ["Frontend Developer", "Web Developer", "Backend Developer"];
pub const DEFAULT_STORAGE_KEY: &str = "darkMode";
pub const DEFAULT_MIN_MESSAGE_CHARS: usize = 10;
pub const DEFAULT_BANNER_MS: u32 = 5000;
pub const DEFAULT_COUNTER_DURATION_MS: u32 = 2000;
pub const DEFAULT_COUNTER_TICK_MS: u32 = 16;
pub const DEFAULT_COUNTER_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(String),
    #[error("typing phrases must not be empty")]
    NoPhrases,
    #[error("typing phrase {0} is empty")]
    EmptyPhrase(usize),
    #[error("counter tick must be positive")]
    ZeroTick,
    #[error("counter duration {duration_ms}ms is shorter than its {tick_ms}ms tick")]
    DurationShorterThanTick { duration_ms: u32, tick_ms: u32 },
    #[error("counter threshold {0} is outside 0..=1")]
    ThresholdOutOfRange(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub reveal: RevealOptions,
    pub typing: TypingConfig,
    pub scroll: ScrollConfig,
    pub nav: NavConfig,
    pub contact: ContactConfig,
    pub theme: ThemeConfig,
    pub counter: CounterConfig,
}

impl PageConfig {
    /// Parse a JSON override document and validate the merged result.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and the matching
    /// validation variant when a value cannot drive the page.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or break a behavior.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typing.phrases.is_empty() {
            return Err(ConfigError::NoPhrases);
        }
        if let Some(index) = self.typing.phrases.iter().position(String::is_empty) {
            return Err(ConfigError::EmptyPhrase(index));
        }
        if self.counter.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if self.counter.duration_ms < self.counter.tick_ms {
            return Err(ConfigError::DurationShorterThanTick {
                duration_ms: self.counter.duration_ms,
                tick_ms: self.counter.tick_ms,
            });
        }
        if !(0.0..=1.0).contains(&self.counter.threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.counter.threshold.to_string()));
        }
        Ok(())
    }
}

/// Options handed verbatim to the scroll-reveal library's `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    pub duration: u32,
    pub once: bool,
    pub offset: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { duration: 800, once: true, offset: 80 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypingConfig {
    pub element_id: String,
    pub phrases: Vec<String>,
    pub timings: TypingTimings,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            element_id: "changing-text".into(),
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_owned()).collect(),
            timings: TypingTimings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollConfig {
    pub anchor_selector: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { anchor_selector: "a[href^=\"#\"]".into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    pub link_selector: String,
    pub active_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            link_selector: ".navbar-nav .nav-link".into(),
            active_class: "active".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactConfig {
    pub form_id: String,
    pub name_id: String,
    pub email_id: String,
    pub message_id: String,
    pub invalid_class: String,
    pub feedback_class: String,
    pub min_message_chars: usize,
    pub banner_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm".into(),
            name_id: "name".into(),
            email_id: "email".into(),
            message_id: "message".into(),
            invalid_class: "is-invalid".into(),
            feedback_class: "invalid-feedback".into(),
            min_message_chars: DEFAULT_MIN_MESSAGE_CHARS,
            banner_ms: DEFAULT_BANNER_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub toggle_id: String,
    pub icon_selector: String,
    pub storage_key: String,
    pub dark_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "themeToggle".into(),
            icon_selector: "i".into(),
            storage_key: DEFAULT_STORAGE_KEY.into(),
            dark_class: "dark-mode".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterConfig {
    pub container_selector: String,
    pub item_selector: String,
    pub threshold: f64,
    pub duration_ms: u32,
    pub tick_ms: u32,
    pub suffix: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            container_selector: ".stats-section".into(),
            item_selector: ".stat-number".into(),
            threshold: DEFAULT_COUNTER_THRESHOLD,
            duration_ms: DEFAULT_COUNTER_DURATION_MS,
            tick_ms: DEFAULT_COUNTER_TICK_MS,
            suffix: "+".into(),
        }
    }
}
