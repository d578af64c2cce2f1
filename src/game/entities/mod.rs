use crate::engine::components::{ CircleHitbox, RotatedRectHitbox, TriangleHitbox };
use crate::engine::errors::Result;
use crate::engine::settings::DemoSettings;
use crate::engine::utils::math::Vec2;

pub fn spawn_fixed_circle(settings: &DemoSettings) -> Result<CircleHitbox> {
    let (cx, cy) = settings.center();
    Ok(CircleHitbox::new(Vec2::new(cx - 100.0, cy), settings.fixed_circle_radius)?.with_owner("fixed_circle"))
}

// Follows the pointer.
pub fn spawn_movable_circle(settings: &DemoSettings) -> Result<CircleHitbox> {
    let (cx, cy) = settings.center();
    Ok(CircleHitbox::new(Vec2::new(cx + 100.0, cy), settings.movable_circle_radius)?.with_owner("movable_circle"))
}

pub fn spawn_test_triangle(settings: &DemoSettings) -> Result<TriangleHitbox> {
    Ok(TriangleHitbox::equilateral(Vec2::new(150.0, 150.0), settings.triangle_side)?.with_owner("test_triangle"))
}

/// Rectangle in the lower-right quadrant, spun a little every frame.
pub fn spawn_spinner(settings: &DemoSettings) -> Result<RotatedRectHitbox> {
    let position = Vec2::new(settings.screen_width * 0.75, settings.screen_height * 0.75);
    Ok(RotatedRectHitbox::new(position, settings.rect_width, settings.rect_height, 0.0)?.with_owner("spinner"))
}
