//! Runtime knobs for the page.
//!
//! Defaults are compiled in. `index.html` may override any subset by
//! embedding JSON in `<script id="site-config" type="application/json">`.

use serde::Deserialize;
use web_sys::Document;

use crate::error::Result;

/// Id of the optional config element in `index.html`.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const DEFAULT_FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=400&h=250&fit=crop";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Added to the scroll offset before testing section extents, so a
    /// section lights up slightly before its top reaches the viewport edge.
    pub scroll_lookahead_px: f64,
    pub fallback_image_url: String,
    /// Text of the contact form acknowledgement dialog.
    pub acknowledgement: String,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_lookahead_px: 100.0,
            fallback_image_url: DEFAULT_FALLBACK_IMAGE.to_owned(),
            acknowledgement: "Message sent! (This is a demo)".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the embedded config element. A missing element means defaults;
    /// one that does not parse is an error.
    pub fn load(document: &Document) -> Result<Self> {
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(text) => Self::from_json(&text),
            None => Ok(Self::default()),
        }
    }
}
