use crate::layout::{CLICK_EPSILON_PX, DEFAULT_GRID_SIZE};

/// Tunables for gesture handling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Grid pitch in pixels; 0 disables snapping.
    pub grid_size: f64,
    /// Max pointer travel that still counts as a click.
    pub click_epsilon_px: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            click_epsilon_px: CLICK_EPSILON_PX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for `{key}`: {value:?}")]
    InvalidValue { key: String, value: String },
}

impl LayoutConfig {
    /// Apply overrides from a URL query string such as `?grid=10&click_epsilon=3`.
    /// Unknown keys are ignored.
    pub fn from_query(search: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let query = search.trim_start_matches('?');

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "grid" => config.grid_size = parse_non_negative(key, value)?,
                "click_epsilon" => config.click_epsilon_px = parse_non_negative(key, value)?,
                _ => {}
            }
        }

        Ok(config)
    }

    /// Read overrides from the current page URL, falling back to defaults.
    pub fn from_location() -> Self {
        let Some(search) = web_sys::window().and_then(|w| w.location().search().ok()) else {
            return Self::default();
        };
        match Self::from_query(&search) {
            Ok(config) => config,
            Err(e) => {
                dioxus_logger::tracing::warn!("Ignoring layout overrides: {}", e);
                Self::default()
            }
        }
    }
}

fn parse_non_negative(key: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}
