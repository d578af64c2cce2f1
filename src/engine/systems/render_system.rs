use serde::{ Serialize, Deserialize };

use crate::engine::components::Aabb;
use crate::engine::utils::math::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const RED: Color = Color(255, 0, 0);
    pub const GREEN: Color = Color(0, 255, 0);
    pub const CYAN: Color = Color(0, 255, 255);
    pub const YELLOW: Color = Color(255, 255, 0);
    pub const MAGENTA: Color = Color(255, 0, 255);
    pub const BLACK: Color = Color(0, 0, 0);
}

/// Drawing backend. The hitbox library only ever hands it world-space
/// outlines; windowing and frame presentation belong to the implementor.
pub trait Renderer {
    fn clear(&mut self, _color: Color) {}

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32);

    /// Closed outline, last point joins back to the first.
    fn draw_polygon(&mut self, points: &[Vec2], color: Color, line_width: f32);

    fn draw_rect(&mut self, aabb: &Aabb, color: Color, line_width: f32) {
        let (min, max) = (aabb.min(), aabb.max());
        let corners = [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)];
        self.draw_polygon(&corners, color, line_width);
    }

    fn present(&mut self) {}
}
