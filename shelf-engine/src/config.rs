//! Tunable constants for tiles. Every field has a default so a partial JSON
//! document (or none at all) is enough.
use crate::geometry::MagnifierParams;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TileConfig {
    /// Largest tilt, in degrees, on either axis.
    pub max_tilt_deg: f64,
    pub magnifier_diameter: f64,
    /// Pan amplification of the magnifier background relative to the pointer.
    pub magnifier_pan: f64,
    /// Review counts strictly above this are abbreviated.
    pub review_abbrev_threshold: u64,
    pub star_slots: u8,
    pub compact_placeholder: String,
    pub quick_look_placeholder: String,
    pub card_perspective_px: f64,
    pub hover_lift_px: f64,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            max_tilt_deg: 10.0,
            magnifier_diameter: 120.0,
            magnifier_pan: 1.1,
            review_abbrev_threshold: 1000,
            star_slots: 5,
            compact_placeholder: "https://via.placeholder.com/220x140?text=No+Image".to_string(),
            quick_look_placeholder: "https://via.placeholder.com/300x400?text=No+Image"
                .to_string(),
            card_perspective_px: 800.0,
            hover_lift_px: 5.0,
        }
    }
}

impl TileConfig {
    /// Parse a config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub const fn magnifier(&self) -> MagnifierParams {
        MagnifierParams {
            diameter: self.magnifier_diameter,
            pan: self.magnifier_pan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let cfg = TileConfig::from_json(r#"{"max_tilt_deg": 6.0}"#).unwrap();
        assert!((cfg.max_tilt_deg - 6.0).abs() < f64::EPSILON);
        assert_eq!(cfg.review_abbrev_threshold, 1000);
        assert_eq!(cfg.star_slots, 5);
        assert!(cfg.quick_look_placeholder.contains("300x400"));
    }

    #[test]
    fn magnifier_params_follow_config() {
        let cfg = TileConfig::default();
        let params = cfg.magnifier();
        assert!((params.diameter - 120.0).abs() < f64::EPSILON);
        assert!((params.pan - 1.1).abs() < f64::EPSILON);
    }
}
