use log::warn;

use crate::engine::components::{ CircleHitbox, Hitbox, RotatedRectHitbox, TriangleHitbox };
use crate::engine::errors::Result;
use crate::engine::settings::DemoSettings;
use crate::game::entities::{ spawn_fixed_circle, spawn_movable_circle, spawn_spinner, spawn_test_triangle };

/// Everything the demo loop mutates. The circles are required; the triangle
/// and spinner are skipped (with a warning) if their settings are invalid.
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: DemoSettings,
    pub fixed_circle: CircleHitbox,
    pub movable_circle: CircleHitbox,
    pub test_triangle: Option<TriangleHitbox>,
    pub spinner: Option<RotatedRectHitbox>,
    pub frame: u64,
}

impl GameState {
    pub fn new(settings: DemoSettings) -> Result<Self> {
        settings.validate()?;
        let fixed_circle = spawn_fixed_circle(&settings)?;
        let movable_circle = spawn_movable_circle(&settings)?;

        let test_triangle = spawn_test_triangle(&settings)
            .map_err(|e| warn!("[DEMO] Skipping triangle: {}", e))
            .ok();
        let spinner = spawn_spinner(&settings)
            .map_err(|e| warn!("[DEMO] Skipping spinner: {}", e))
            .ok();

        Ok(Self {
            settings,
            fixed_circle,
            movable_circle,
            test_triangle,
            spinner,
            frame: 0,
        })
    }

    /// Every live hitbox, in draw order.
    pub fn hitboxes(&self) -> Vec<&dyn Hitbox> {
        let mut all: Vec<&dyn Hitbox> = vec![&self.fixed_circle, &self.movable_circle];
        if let Some(triangle) = &self.test_triangle {
            all.push(triangle);
        }
        if let Some(spinner) = &self.spinner {
            all.push(spinner);
        }
        all
    }
}
