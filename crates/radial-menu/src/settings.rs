use crate::brush::Brush;
use crate::button::{CenterButtonSnapshot, DEFAULT_FONT_SIZE, DEFAULT_SIZE, Glyph};
use crate::pie::DEFAULT_START_ANGLE;
use serde::{Deserialize, Serialize};

/// Appearance of the centre button as read from configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CenterSettings {
    pub background: Brush,
    pub border: Brush,
    pub icon: Glyph,
    pub size: u32,
    pub font_size: f64,
}

impl Default for CenterSettings {
    fn default() -> Self {
        let look = CenterButtonSnapshot::default();
        Self {
            background: look.background,
            border: look.border,
            icon: look.icon,
            size: DEFAULT_SIZE,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl CenterSettings {
    pub fn snapshot(&self) -> CenterButtonSnapshot {
        CenterButtonSnapshot {
            border: self.border,
            background: self.background,
            icon: self.icon.clone(),
            font_size: self.font_size,
        }
    }
}

/// Everything a host may configure on a menu before or after creating it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub center: CenterSettings,
    pub diameter: f64,
    pub start_angle: f64,
    pub navigation_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            center: CenterSettings::default(),
            diameter: 0.0,
            start_angle: DEFAULT_START_ANGLE,
            navigation_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fall_back_to_defaults() {
        let json = r#"{"diameter": 300.0, "center": {"icon": "*", "border": "red"}}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.diameter, 300.0);
        assert_eq!(settings.start_angle, 22.5);
        assert!(settings.navigation_enabled);
        assert_eq!(settings.center.icon.as_str(), "*");
        assert_eq!(settings.center.border, Brush::rgba(255, 0, 0, 255));
        assert_eq!(settings.center.size, 60);
        assert_eq!(settings.center.background, Brush::rgba(245, 245, 245, 255));
    }

    #[test]
    fn test_bad_colour_is_rejected() {
        let json = r#"{"center": {"background": "nope"}}"#;
        assert!(serde_json::from_str::<Settings>(json).is_err());
    }
}
