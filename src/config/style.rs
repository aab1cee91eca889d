use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How the canvas shell draws markers and segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Radius of a control point marker in pixels
    pub marker_radius: f64,
    pub marker_color: String,
    /// Stroke color of the raw control polygon while editing
    pub polygon_color: String,
    /// Stroke color of the refined curve while animating
    pub curve_color: String,
    pub background: String,
    pub line_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            marker_radius: 5.0,
            marker_color: "red".to_string(),
            polygon_color: "black".to_string(),
            curve_color: "blue".to_string(),
            background: "white".to_string(),
            line_width: 1.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.marker_radius.is_finite() && self.marker_radius > 0.0) {
            return Err(ConfigError::InvalidStyle(format!(
                "marker_radius must be positive, got {}",
                self.marker_radius
            )));
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(ConfigError::InvalidStyle(format!(
                "line_width must be positive, got {}",
                self.line_width
            )));
        }

        let colors = [
            ("marker_color", &self.marker_color),
            ("polygon_color", &self.polygon_color),
            ("curve_color", &self.curve_color),
            ("background", &self.background),
        ];
        for (name, value) in colors {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidStyle(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_valid() {
        assert!(RenderStyle::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_radius() {
        let style = RenderStyle {
            marker_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(style.validate(), Err(ConfigError::InvalidStyle(_))));
    }

    #[test]
    fn test_rejects_empty_color() {
        let style = RenderStyle {
            curve_color: "  ".to_string(),
            ..Default::default()
        };
        let err = style.validate().unwrap_err();
        assert!(err.to_string().contains("curve_color"));
    }
}
