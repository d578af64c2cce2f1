pub mod aabb;
pub mod shapes;

pub use aabb::Aabb;
pub use shapes::{
    CircleHitbox,
    Hitbox,
    Outline,
    PolygonHitbox,
    RotatedRectHitbox,
    Shape,
    ShapeKind,
    TriangleHitbox,
};
