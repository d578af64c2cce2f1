use std::path::Path;
use serde::{ Serialize, Deserialize };

use crate::engine::errors::{ HitboxError, Result };

/// Demo scene settings. Every field is optional in the JSON file; missing
/// ones fall back to the defaults below.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DemoSettings {
    pub screen_width: f32,
    pub screen_height: f32,
    pub fps: u32,
    /// Frames to simulate before the headless demo exits.
    pub frames: u32,
    pub fixed_circle_radius: f32,
    pub movable_circle_radius: f32,
    pub triangle_side: f32,
    pub rect_width: f32,
    pub rect_height: f32,
    /// Radians per frame applied to the rectangle.
    pub rect_spin: f32,
    pub draw_aabbs: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            fps: 60,
            frames: 240,
            fixed_circle_radius: 75.0,
            movable_circle_radius: 50.0,
            triangle_side: 80.0,
            rect_width: 120.0,
            rect_height: 40.0,
            rect_spin: 0.02,
            draw_aabbs: true,
        }
    }
}

impl DemoSettings {
    pub fn from_json(text: &str) -> Result<Self> {
        let settings: DemoSettings = serde_json::from_str(text)
            .map_err(|e| HitboxError::Settings(format!("JSON parse error: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| HitboxError::Settings(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.screen_width) || !positive(self.screen_height) {
            return Err(HitboxError::Settings("screen size must be positive".into()));
        }
        if self.fps == 0 {
            return Err(HitboxError::Settings("fps must be at least 1".into()));
        }
        if !self.rect_spin.is_finite() {
            return Err(HitboxError::Settings("rect_spin must be finite".into()));
        }
        Ok(())
    }

    pub fn center(&self) -> (f32, f32) {
        (self.screen_width / 2.0, self.screen_height / 2.0)
    }
}
