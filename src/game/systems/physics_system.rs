use log::{ debug, warn };

use crate::engine::components::{ Hitbox, RotatedRectHitbox };
use crate::engine::errors::Result;
use crate::engine::systems::collision_system::check_collision;
use crate::game::game_state::GameState;

/// Collision results for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub circles_colliding: bool,
    /// `None` when the scene has no triangle.
    pub circle_hits_triangle: Option<bool>,
    /// Owners of the hitboxes the spinner touches.
    pub spinner_hits: Vec<String>,
}

pub struct PhysicsSystem;

impl PhysicsSystem {
    pub fn update(state: &GameState) -> Result<FrameReport> {
        let mut report = FrameReport {
            circles_colliding: check_collision(&state.fixed_circle, &state.movable_circle)?,
            ..FrameReport::default()
        };

        if let Some(triangle) = &state.test_triangle {
            report.circle_hits_triangle = Some(check_collision(&state.movable_circle, triangle)?);
        }

        if let Some(spinner) = &state.spinner {
            for other in state.hitboxes() {
                if std::ptr::addr_eq(other as *const dyn Hitbox, spinner as *const RotatedRectHitbox) {
                    continue;
                }
                match check_collision(spinner, other) {
                    Ok(true) => report.spinner_hits.push(other.owner().unwrap_or("?").to_string()),
                    Ok(false) => {}
                    // unsupported pairs are skipped
                    Err(e) => warn!("[DEMO] {}", e),
                }
            }
        }

        debug!("[DEMO] frame {}: {:?}", state.frame, report);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::settings::DemoSettings;
    use crate::engine::utils::math::Vec2;

    #[test]
    fn circles_and_triangle() {
        let mut state = GameState::new(DemoSettings::default()).unwrap();
        let report = PhysicsSystem::update(&state).unwrap();
        // 200 apart, radii 75 + 50
        assert!(!report.circles_colliding);
        assert_eq!(report.circle_hits_triangle, Some(false));

        state.movable_circle.position = Vec2::new(380.0, 300.0);
        assert!(PhysicsSystem::update(&state).unwrap().circles_colliding);

        state.movable_circle.position = Vec2::new(150.0, 150.0);
        assert_eq!(PhysicsSystem::update(&state).unwrap().circle_hits_triangle, Some(true));
    }

    #[test]
    fn spinner_reports_what_it_touches() {
        let mut state = GameState::new(DemoSettings::default()).unwrap();
        assert!(PhysicsSystem::update(&state).unwrap().spinner_hits.is_empty());

        let spinner_at = state.spinner.as_ref().map(|s| s.position).unwrap();
        state.movable_circle.position = spinner_at;
        let report = PhysicsSystem::update(&state).unwrap();
        assert_eq!(report.spinner_hits, vec!["movable_circle".to_string()]);
    }

    #[test]
    fn spinner_skips_only_itself() {
        let mut state = GameState::new(DemoSettings::default()).unwrap();
        let spinner_at = state.spinner.as_ref().map(|s| s.position).unwrap();
        state.movable_circle.position = spinner_at;
        state.movable_circle.owner = Some("spinner".to_string());

        let report = PhysicsSystem::update(&state).unwrap();
        assert_eq!(report.spinner_hits, vec!["spinner".to_string()]);

        state.movable_circle.owner = None;
        if let Some(spinner) = state.spinner.as_mut() {
            spinner.owner = None;
        }
        let report = PhysicsSystem::update(&state).unwrap();
        assert_eq!(report.spinner_hits, vec!["?".to_string()]);
    }
}
