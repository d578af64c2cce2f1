use log::debug;

use crate::engine::components::{ Aabb, Hitbox };
use crate::engine::systems::render_system::{ Color, Renderer };
use crate::engine::utils::math::Vec2;
use crate::game::game_state::GameState;
use crate::game::systems::physics_system::FrameReport;

const LINE_WIDTH: f32 = 2.0;
const AABB_LINE_WIDTH: f32 = 1.0;

#[derive(Debug)]
pub struct RenderSystem;

impl RenderSystem {
    pub fn update(state: &GameState, report: &FrameReport, renderer: &mut dyn Renderer) {
        renderer.clear(Color::BLACK);

        let (fixed_color, movable_color) = if report.circles_colliding {
            (Color::GREEN, Color::GREEN)
        } else {
            (Color::RED, Color::CYAN)
        };

        state.fixed_circle.draw(renderer, fixed_color, LINE_WIDTH);
        state.movable_circle.draw(renderer, movable_color, LINE_WIDTH);

        if let Some(triangle) = &state.test_triangle {
            triangle.draw(renderer, Color::YELLOW, LINE_WIDTH);
        }

        if let Some(spinner) = &state.spinner {
            let color = if report.spinner_hits.is_empty() { Color::CYAN } else { Color::GREEN };
            spinner.draw(renderer, color, LINE_WIDTH);
        }

        if state.settings.draw_aabbs {
            renderer.draw_rect(&state.fixed_circle.get_aabb(), Color::YELLOW, AABB_LINE_WIDTH);
            renderer.draw_rect(&state.movable_circle.get_aabb(), Color::YELLOW, AABB_LINE_WIDTH);
            if let Some(triangle) = &state.test_triangle {
                renderer.draw_rect(&triangle.get_aabb(), Color::MAGENTA, AABB_LINE_WIDTH);
            }
            if let Some(spinner) = &state.spinner {
                renderer.draw_rect(&spinner.get_aabb(), Color::MAGENTA, AABB_LINE_WIDTH);
            }
        }

        renderer.present();
    }
}

/// Headless renderer: every draw call becomes a `debug!` line and a counter
/// bump.
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub circles_drawn: usize,
    pub polygons_drawn: usize,
    pub frames_presented: usize,
}

impl Renderer for LogRenderer {
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        self.circles_drawn += 1;
        debug!(
            "[RENDER] circle at ({:.1}, {:.1}) r={:.1} {:?} w={}",
            center.x,
            center.y,
            radius,
            color,
            line_width
        );
    }

    fn draw_polygon(&mut self, points: &[Vec2], color: Color, line_width: f32) {
        self.polygons_drawn += 1;
        debug!("[RENDER] polygon {:?} {:?} w={}", points, color, line_width);
    }

    fn draw_rect(&mut self, aabb: &Aabb, color: Color, line_width: f32) {
        self.polygons_drawn += 1;
        debug!(
            "[RENDER] rect ({:.1}, {:.1}, {:.1}, {:.1}) {:?} w={}",
            aabb.x,
            aabb.y,
            aabb.width,
            aabb.height,
            color,
            line_width
        );
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::settings::DemoSettings;

    #[test]
    fn draws_every_shape_and_its_box() {
        let state = GameState::new(DemoSettings::default()).unwrap();
        let mut renderer = LogRenderer::default();
        RenderSystem::update(&state, &FrameReport::default(), &mut renderer);
        assert_eq!(renderer.circles_drawn, 2);
        // triangle + spinner + four boxes
        assert_eq!(renderer.polygons_drawn, 6);
        assert_eq!(renderer.frames_presented, 1);
    }

    #[test]
    fn boxes_can_be_turned_off() {
        let settings = DemoSettings { draw_aabbs: false, ..DemoSettings::default() };
        let state = GameState::new(settings).unwrap();
        let mut renderer = LogRenderer::default();
        RenderSystem::update(&state, &FrameReport::default(), &mut renderer);
        assert_eq!(renderer.polygons_drawn, 2);
    }
}
