//! Runtime configuration from the `<script id="wall-config">` tag in `index.html`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use wall::WallConfig;

/// Id of the JSON script element holding the config.
pub const CONFIG_ELEMENT_ID: &str = "wall-config";

/// Parse config text, falling back to defaults when it is missing or malformed.
#[must_use]
pub fn parse(raw: Option<&str>) -> WallConfig {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return WallConfig::default();
    };
    match WallConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring malformed wall config: {e}");
            WallConfig::default()
        }
    }
}

/// Read and parse the page's config element.
#[must_use]
pub fn load() -> WallConfig {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        parse(raw.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        parse(None)
    }
}
