use serde::Deserialize;

pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Settings for the map and the form. Every field is optional in the source file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub zoom: f64,
    pub tile_url: String,
    pub tile_attribution: String,
    pub popup_max_width: f64,
    pub popup_min_width: f64,
    /// Delay before a hidden form gets its grid layout back.
    pub form_reset_delay_ms: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            zoom: 15.,
            tile_url: OSM_TILE_URL.into(),
            tile_attribution: OSM_ATTRIBUTION.into(),
            popup_max_width: 250.,
            popup_min_width: 100.,
            form_reset_delay_ms: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: TrackerConfig = serde_json::from_str(r#"{ "zoom": 13 }"#).unwrap();

        assert_eq!(config.zoom, 13.);
        assert_eq!(config.tile_url, OSM_TILE_URL);
        assert_eq!(config.form_reset_delay_ms, 1000);
    }

    #[test]
    fn empty_object_is_default() {
        let config: TrackerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(serde_json::from_str::<TrackerConfig>(r#"{ "zoom": "close" }"#).is_err());
    }
}
