//! Configuration for the page enhancer.

use page_enhancer_shared::EnhancerConfig;
use web_sys::Document;

use crate::warn;

/// Id of the optional `<script type="application/json">` override block.
pub const CONFIG_ELEMENT_ID: &str = "page-enhancer-config";

/// Reads overrides from the page, falling back to defaults when the block is
/// missing, empty, or invalid.
pub fn load(document: &Document) -> EnhancerConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    let Some(raw) = raw else {
        return EnhancerConfig::default();
    };
    match EnhancerConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            warn(&format!("#{CONFIG_ELEMENT_ID}: {err}, using defaults"));
            EnhancerConfig::default()
        },
    }
}
