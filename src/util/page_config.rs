//! Reads puzzle settings from the page.
//!
//! The host page may carry a JSON block
//! `<script id="puzzle-config" type="application/json">` with any subset of
//! the [`PuzzleConfig`] fields. A missing block means defaults; a bad one is
//! logged and ignored so the puzzle still loads.

#[cfg(test)]
#[path = "page_config_test.rs"]
mod page_config_test;

use log::warn;
use puzzle::config::PuzzleConfig;

pub const CONFIG_ELEMENT_ID: &str = "puzzle-config";

#[must_use]
pub fn parse_page_config(raw: Option<&str>) -> PuzzleConfig {
    let Some(json) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return PuzzleConfig::default();
    };
    match PuzzleConfig::from_json(json) {
        Ok(config) => config,
        Err(e) => {
            warn!("page config: {e}; using defaults");
            PuzzleConfig::default()
        }
    }
}

/// Config from the current document, or defaults outside the browser.
#[must_use]
pub fn load_page_config() -> PuzzleConfig {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        parse_page_config(raw.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        parse_page_config(None)
    }
}
