//! Настройки форм ввода.
//!
//! Defaults match the backend routes. A host page may override any of them
//! by putting a JSON object into the `data-forms-config` attribute of
//! `<body>`; missing keys keep their defaults.

use serde::Deserialize;

const CONFIG_ATTRIBUTE: &str = "data-forms-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    /// Page opened after a successful submission
    pub listing_page: String,
    /// Delay before the redirect, in milliseconds
    pub redirect_delay_ms: u32,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub verify_abbreviation: String,
    pub insert_abbreviation: String,
    pub submit_form: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            listing_page: "/add_data".to_string(),
            redirect_delay_ms: 1,
            endpoints: Endpoints::default(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            verify_abbreviation: "/verify_abbreviation".to_string(),
            insert_abbreviation: "/insert_abbreviation".to_string(),
            submit_form: "/submit_form".to_string(),
        }
    }
}

impl FormsConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Load configuration from the page
    ///
    /// Falls back to defaults when there is no override or it is malformed.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));

        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed {}: {}", CONFIG_ATTRIBUTE, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
