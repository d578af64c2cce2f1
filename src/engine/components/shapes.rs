use std::fmt;

use crate::engine::components::aabb::Aabb;
use crate::engine::errors::{ HitboxError, Result };
use crate::engine::systems::collision_system::point_in_convex_polygon;
use crate::engine::systems::render_system::{ Color, Renderer };
use crate::engine::utils::math::{ dist2, edges, signed_area2, Vec2 };

// Twice-the-area below this fraction of the longest squared edge counts as
// zero. Also the slack allowed when testing which side of an edge a vertex is on.
const REL_AREA_EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Triangle,
    RotatedRect,
    Polygon,
    /// A caller-defined hitbox with no built-in collision test.
    Other(&'static str),
}

impl ShapeKind {
    pub fn is_polygon(self) -> bool {
        matches!(self, ShapeKind::Triangle | ShapeKind::RotatedRect | ShapeKind::Polygon)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Circle => f.write_str("Circle"),
            ShapeKind::Triangle => f.write_str("Triangle"),
            ShapeKind::RotatedRect => f.write_str("RotatedRect"),
            ShapeKind::Polygon => f.write_str("Polygon"),
            ShapeKind::Other(name) => f.write_str(name),
        }
    }
}

/// World-space geometry of a hitbox at its current pose.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    Circle {
        center: Vec2,
        radius: f32,
    },
    Polygon(Vec<Vec2>),
}

impl Outline {
    pub fn aabb(&self) -> Aabb {
        match self {
            Outline::Circle { center, radius } => Aabb::from_circle(*center, *radius),
            Outline::Polygon(points) => Aabb::from_points(points.iter().copied()).unwrap_or_default(),
        }
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        match self {
            Outline::Circle { center, radius } => dist2(*center, p) <= radius * radius,
            Outline::Polygon(points) => point_in_convex_polygon(p, points),
        }
    }
}

/// Capability set shared by every hitbox: bounding box, world geometry and
/// drawing. Collision dispatch keys off `kind()`.
pub trait Hitbox {
    fn kind(&self) -> ShapeKind;

    fn position(&self) -> Vec2;

    fn owner(&self) -> Option<&str>;

    fn outline(&self) -> Outline;

    fn get_aabb(&self) -> Aabb {
        self.outline().aabb()
    }

    fn contains_point(&self, p: Vec2) -> bool {
        self.outline().contains_point(p)
    }

    fn draw(&self, renderer: &mut dyn Renderer, color: Color, line_width: f32) {
        match self.outline() {
            Outline::Circle { center, radius } =>
                renderer.draw_circle(center, radius, color, line_width),
            Outline::Polygon(points) => renderer.draw_polygon(&points, color, line_width),
        }
    }
}

fn check_positive(shape: &'static str, name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(HitboxError::invalid(shape, format!("{} must be positive, got {}", name, value)));
    }
    Ok(())
}

// Convex, non-degenerate, simple outline with no repeated consecutive vertex.
fn check_convex(shape: &'static str, points: &[Vec2]) -> Result<()> {
    if points.len() < 3 {
        return Err(HitboxError::invalid(shape, format!("needs at least 3 vertices, got {}", points.len())));
    }
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(HitboxError::invalid(shape, "vertices must be finite"));
    }
    if edges(points).any(|(a, b)| a == b) {
        return Err(HitboxError::invalid(shape, "zero-length edge"));
    }

    let scale2 = edges(points)
        .map(|(a, b)| dist2(a, b))
        .fold(0.0_f32, f32::max);
    let area2 = signed_area2(points);
    if area2.abs() < REL_AREA_EPSILON * scale2 {
        return Err(HitboxError::invalid(shape, "zero area"));
    }

    // Every vertex on the inner side of every edge. Rules out reflex corners
    // and outlines that wind around more than once.
    let winding = area2.signum();
    let slack = REL_AREA_EPSILON * scale2;
    for (a, b) in edges(points) {
        let edge = b - a;
        if points.iter().any(|p| edge.cross(*p - a) * winding < -slack) {
            return Err(HitboxError::invalid(shape, "outline is not convex"));
        }
    }
    Ok(())
}

// ================================================================================================
// CIRCLE
// ================================================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct CircleHitbox {
    pub position: Vec2,
    pub owner: Option<String>,
    radius: f32,
}

impl CircleHitbox {
    pub fn new(position: Vec2, radius: f32) -> Result<Self> {
        check_positive("circle", "radius", radius)?;
        Ok(Self { position, owner: None, radius })
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn center(&self) -> Vec2 {
        self.position
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

impl Hitbox for CircleHitbox {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    fn outline(&self) -> Outline {
        Outline::Circle { center: self.position, radius: self.radius }
    }

    fn get_aabb(&self) -> Aabb {
        Aabb::from_circle(self.position, self.radius)
    }
}

// ================================================================================================
// TRIANGLE
// ================================================================================================

/// Triangle defined by three offsets from `position`. Orientation lives in
/// the offsets themselves; there is no separate angle.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleHitbox {
    pub position: Vec2,
    pub owner: Option<String>,
    vertices_local: [Vec2; 3],
}

impl TriangleHitbox {
    pub fn new(position: Vec2, vertices_local: impl IntoIterator<Item = Vec2>) -> Result<Self> {
        let vertices: Vec<Vec2> = vertices_local.into_iter().collect();
        let vertices_local: [Vec2; 3] = vertices
            .as_slice()
            .try_into()
            .map_err(|_| HitboxError::invalid("triangle", format!("needs exactly 3 vertices, got {}", vertices.len())))?;
        check_convex("triangle", &vertices_local)?;
        Ok(Self { position, owner: None, vertices_local })
    }

    /// Upward-pointing equilateral triangle whose bounding box is centered
    /// on `position`.
    pub fn equilateral(position: Vec2, side: f32) -> Result<Self> {
        check_positive("triangle", "side", side)?;
        let height = side * (3.0_f32.sqrt() / 2.0);
        Self::new(position, [
            Vec2::new(0.0, -height / 2.0),
            Vec2::new(-side / 2.0, height / 2.0),
            Vec2::new(side / 2.0, height / 2.0),
        ])
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn vertices_local(&self) -> &[Vec2; 3] {
        &self.vertices_local
    }

    pub fn world_vertices(&self) -> Vec<Vec2> {
        self.vertices_local.iter().map(|v| self.position + *v).collect()
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

impl Hitbox for TriangleHitbox {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    fn outline(&self) -> Outline {
        Outline::Polygon(self.world_vertices())
    }
}

// ================================================================================================
// ROTATED RECTANGLE
// ================================================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct RotatedRectHitbox {
    pub position: Vec2,
    /// Radians, applied about `position`. Unbounded.
    pub angle: f32,
    pub owner: Option<String>,
    width: f32,
    height: f32,
}

impl RotatedRectHitbox {
    pub fn new(position: Vec2, width: f32, height: f32, angle: f32) -> Result<Self> {
        check_positive("rotated rect", "width", width)?;
        check_positive("rotated rect", "height", height)?;
        if !angle.is_finite() {
            return Err(HitboxError::invalid("rotated rect", "angle must be finite"));
        }
        Ok(Self { position, angle, owner: None, width, height })
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Corners in order: top-left, top-right, bottom-right, bottom-left of
    /// the unrotated rectangle.
    pub fn world_vertices(&self) -> Vec<Vec2> {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        [Vec2::new(-hw, -hh), Vec2::new(hw, -hh), Vec2::new(hw, hh), Vec2::new(-hw, hh)]
            .iter()
            .map(|corner| self.position + corner.rotate(self.angle))
            .collect()
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    pub fn rotate(&mut self, delta: f32) {
        self.angle += delta;
    }
}

impl Hitbox for RotatedRectHitbox {
    fn kind(&self) -> ShapeKind {
        ShapeKind::RotatedRect
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    fn outline(&self) -> Outline {
        Outline::Polygon(self.world_vertices())
    }
}

// ================================================================================================
// CONVEX POLYGON
// ================================================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct PolygonHitbox {
    pub position: Vec2,
    pub owner: Option<String>,
    vertices_local: Vec<Vec2>,
}

impl PolygonHitbox {
    pub fn new(position: Vec2, vertices_local: impl IntoIterator<Item = Vec2>) -> Result<Self> {
        let vertices_local: Vec<Vec2> = vertices_local.into_iter().collect();
        check_convex("polygon", &vertices_local)?;
        Ok(Self { position, owner: None, vertices_local })
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn vertices_local(&self) -> &[Vec2] {
        &self.vertices_local
    }

    pub fn world_vertices(&self) -> Vec<Vec2> {
        self.vertices_local.iter().map(|v| self.position + *v).collect()
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

impl Hitbox for PolygonHitbox {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    fn outline(&self) -> Outline {
        Outline::Polygon(self.world_vertices())
    }
}

// ================================================================================================
// SHAPE
// ================================================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(CircleHitbox),
    Triangle(TriangleHitbox),
    RotatedRect(RotatedRectHitbox),
    Polygon(PolygonHitbox),
}

impl Shape {
    fn as_hitbox(&self) -> &dyn Hitbox {
        match self {
            Shape::Circle(s) => s,
            Shape::Triangle(s) => s,
            Shape::RotatedRect(s) => s,
            Shape::Polygon(s) => s,
        }
    }

    pub fn get_shape_name(&self) -> String {
        match self {
            Shape::Circle(c) => format!("Circle (r: {:.2})", c.radius()),
            Shape::Triangle(_) => "Triangle".to_string(),
            Shape::RotatedRect(r) =>
                format!("RotatedRect ({:.2} x {:.2}, {:.2} rad)", r.width(), r.height(), r.angle),
            Shape::Polygon(p) => format!("Polygon ({} vertices)", p.vertices_local().len()),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Circle(s) => s.translate(delta),
            Shape::Triangle(s) => s.translate(delta),
            Shape::RotatedRect(s) => s.translate(delta),
            Shape::Polygon(s) => s.translate(delta),
        }
    }

    pub fn set_position(&mut self, position: Vec2) {
        match self {
            Shape::Circle(s) => s.position = position,
            Shape::Triangle(s) => s.position = position,
            Shape::RotatedRect(s) => s.position = position,
            Shape::Polygon(s) => s.position = position,
        }
    }
}

impl Hitbox for Shape {
    fn kind(&self) -> ShapeKind {
        self.as_hitbox().kind()
    }

    fn position(&self) -> Vec2 {
        self.as_hitbox().position()
    }

    fn owner(&self) -> Option<&str> {
        self.as_hitbox().owner()
    }

    fn outline(&self) -> Outline {
        self.as_hitbox().outline()
    }

    fn get_aabb(&self) -> Aabb {
        self.as_hitbox().get_aabb()
    }
}

impl From<CircleHitbox> for Shape {
    fn from(s: CircleHitbox) -> Self {
        Shape::Circle(s)
    }
}

impl From<TriangleHitbox> for Shape {
    fn from(s: TriangleHitbox) -> Self {
        Shape::Triangle(s)
    }
}

impl From<RotatedRectHitbox> for Shape {
    fn from(s: RotatedRectHitbox) -> Self {
        Shape::RotatedRect(s)
    }
}

impl From<PolygonHitbox> for Shape {
    fn from(s: PolygonHitbox) -> Self {
        Shape::Polygon(s)
    }
}
