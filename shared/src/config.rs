//! Enhancer configuration.
//!
//! Every field defaults to the literal the site markup and stylesheet
//! expect, so an empty JSON object (or no config block at all) yields the
//! stock behavior.

use serde::Deserialize;
use thiserror::Error;

/// Rejected configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON block could not be parsed.
    #[error("malformed enhancer config: {0}")]
    Json(#[from] serde_json::Error),
    /// A visibility threshold outside `[0, 1]`.
    #[error("`{field}` must be within 0.0..=1.0, got {value}")]
    Threshold {
        /// Offending field name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A selector or key that must not be blank.
    #[error("`{0}` must not be empty")]
    Empty(&'static str),
}

/// Selectors, storage key and animation constants for the page enhancer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    /// `localStorage` key holding the explicit theme choice.
    pub storage_key: String,
    /// Attribute on the document root mirroring the theme.
    pub theme_attribute: String,
    /// Id of the theme toggle control.
    pub toggle_id: String,
    /// Media query reporting the system dark preference.
    pub dark_scheme_query: String,
    /// Links that get smooth scrolling.
    pub anchor_selector: String,
    /// Elements watched by the section observer.
    pub section_selector: String,
    /// Root margin of the section observer.
    pub section_root_margin: String,
    /// Visibility threshold of the section observer.
    pub section_threshold: f64,
    /// Card-style selectors that fade in.
    pub card_selectors: Vec<String>,
    /// Visibility threshold of the card observer.
    pub card_threshold: f64,
    /// Initial downward offset of hidden cards, in pixels.
    pub card_offset_px: u32,
    /// Transition declared on cards before they are revealed.
    pub card_transition: String,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            theme_attribute: "data-theme".to_string(),
            toggle_id: "theme-toggle".to_string(),
            dark_scheme_query: "(prefers-color-scheme: dark)".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
            section_selector: "article".to_string(),
            section_root_margin: "-20% 0px -80% 0px".to_string(),
            section_threshold: 0.0,
            card_selectors: vec![
                ".post-card".to_string(),
                ".project-card".to_string(),
                ".paper-item".to_string(),
            ],
            card_threshold: 0.1,
            card_offset_px: 20,
            card_transition: "opacity 0.6s ease, transform 0.6s ease".to_string(),
        }
    }
}

impl EnhancerConfig {
    /// Parses and validates a JSON override block. Missing fields keep their
    /// defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks thresholds and required strings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("section_threshold", self.section_threshold)?;
        check_threshold("card_threshold", self.card_threshold)?;

        let required = [
            ("storage_key", &self.storage_key),
            ("theme_attribute", &self.theme_attribute),
            ("dark_scheme_query", &self.dark_scheme_query),
            ("anchor_selector", &self.anchor_selector),
            ("section_selector", &self.section_selector),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(field));
            }
        }
        if self.card_selectors.iter().all(|s| s.trim().is_empty()) {
            return Err(ConfigError::Empty("card_selectors"));
        }
        Ok(())
    }

    /// Card selectors joined into one selector group for `querySelectorAll`.
    pub fn card_selector_group(&self) -> String {
        self.card_selectors
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn check_threshold(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Threshold {
            field,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = EnhancerConfig::from_json("{}").expect("parse empty config");
        assert_eq!(config, EnhancerConfig::default());
        assert_eq!(config.card_selector_group(), ".post-card, .project-card, .paper-item");
    }

    #[test]
    fn overrides_single_fields() {
        let config = EnhancerConfig::from_json(r#"{"storage_key":"site-theme","card_threshold":0.25}"#)
            .expect("parse overrides");
        assert_eq!(config.storage_key, "site-theme");
        assert_eq!(config.card_threshold, 0.25);
        assert_eq!(config.toggle_id, "theme-toggle");
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let err = EnhancerConfig::from_json(r#"{"card_threshold":1.5}"#).expect_err("config should be rejected");
        assert!(matches!(err, ConfigError::Threshold { field: "card_threshold", .. }));
    }

    #[test]
    fn rejects_blank_selectors() {
        let err = EnhancerConfig::from_json(r#"{"card_selectors":[" ", ""]}"#).expect_err("config should be rejected");
        assert!(matches!(err, ConfigError::Empty("card_selectors")));

        let err = EnhancerConfig::from_json(r#"{"storage_key":""}"#).expect_err("config should be rejected");
        assert!(matches!(err, ConfigError::Empty("storage_key")));
    }

    #[test]
    fn rejects_blank_dark_scheme_query() {
        // An empty media query matches every environment.
        let err = EnhancerConfig::from_json(r#"{"dark_scheme_query":"  "}"#)
            .expect_err("config should be rejected");
        assert!(matches!(err, ConfigError::Empty("dark_scheme_query")));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = EnhancerConfig::from_json("{not json").expect_err("config should be rejected");
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
