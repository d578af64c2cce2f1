//! 2D hitboxes with exact pairwise collision tests.
//!
//! Circles, triangles, rotated rectangles and convex polygons each report an
//! axis-aligned bounding box and their world-space outline. `check_collision`
//! picks the right test for any pair: distance for two circles, closest edge
//! point plus containment for a circle and a polygon, and the separating axis
//! theorem for two polygons.
//!
//! The `game` module is the headless demo scene built on top of the library.

pub mod engine;
pub mod game;

pub use engine::components::{
    Aabb,
    CircleHitbox,
    Hitbox,
    Outline,
    PolygonHitbox,
    RotatedRectHitbox,
    Shape,
    ShapeKind,
    TriangleHitbox,
};
pub use engine::errors::{ HitboxError, Result };
pub use engine::settings::DemoSettings;
pub use engine::systems::{ check_collision, Color, Renderer };
pub use engine::utils::math::Vec2;
