use log::trace;

use crate::engine::components::{ Hitbox, Outline, ShapeKind };
use crate::engine::errors::{ HitboxError, Result };
use crate::engine::utils::math::{ closest_point_on_segment, dist2, edges, Vec2 };

// Two unit normals closer than this (by cross product) are treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Exact overlap test between any two hitboxes. Touching counts as
/// colliding. The result does not depend on argument order.
pub fn check_collision(a: &dyn Hitbox, b: &dyn Hitbox) -> Result<bool> {
    let (kind_a, kind_b) = (a.kind(), b.kind());

    match (kind_a, kind_b) {
        (ShapeKind::Other(_), _) | (_, ShapeKind::Other(_)) => {
            return Err(HitboxError::UnsupportedShapePair { first: kind_a, second: kind_b });
        }
        _ => {}
    }

    let hit = match (a.outline(), b.outline()) {
        (Outline::Circle { center: ca, radius: ra }, Outline::Circle { center: cb, radius: rb }) =>
            collision_check_circle_circle(ca, ra, cb, rb),
        (Outline::Circle { center, radius }, Outline::Polygon(points)) =>
            collision_check_circle_polygon(center, radius, &points),
        (Outline::Polygon(points), Outline::Circle { center, radius }) =>
            collision_check_circle_polygon(center, radius, &points),
        (Outline::Polygon(pa), Outline::Polygon(pb)) => collision_check_polygon_polygon(&pa, &pb),
    };

    trace!("[COLLISION] {} vs {} -> {}", kind_a, kind_b, hit);
    Ok(hit)
}

// ================================================================================================
// COLLISION DETECTION IMPLEMENTATION
// ================================================================================================

fn collision_check_circle_circle(ca: Vec2, ra: f32, cb: Vec2, rb: f32) -> bool {
    // Use squared distance to avoid sqrt
    let sum_radii = ra + rb;
    dist2(ca, cb) <= sum_radii * sum_radii
}

fn collision_check_circle_polygon(center: Vec2, radius: f32, points: &[Vec2]) -> bool {
    let radius2 = radius * radius;

    // Circle straddles or touches an edge
    let near_edge = edges(points).any(|(a, b)| {
        dist2(center, closest_point_on_segment(center, a, b)) <= radius2
    });

    // Circle fully inside the polygon never comes near an edge
    near_edge || point_in_convex_polygon(center, points)
}

fn collision_check_polygon_polygon(a: &[Vec2], b: &[Vec2]) -> bool {
    for axis in separating_axes(a).into_iter().chain(separating_axes(b)) {
        let (min_a, max_a) = project(a, axis);
        let (min_b, max_b) = project(b, axis);
        if max_a < min_b || max_b < min_a {
            trace!("[COLLISION] separated on axis ({:.3}, {:.3})", axis.x, axis.y);
            return false;
        }
    }
    true
}

/// Unit edge normals of a polygon, one per direction. Zero-length edges have
/// no normal and are skipped.
fn separating_axes(points: &[Vec2]) -> Vec<Vec2> {
    let mut axes: Vec<Vec2> = Vec::with_capacity(points.len());
    for (start, end) in edges(points) {
        let Ok(normal) = (end - start).perp().normalize() else {
            continue;
        };
        if axes.iter().any(|axis| axis.cross(normal).abs() < PARALLEL_EPSILON) {
            continue;
        }
        axes.push(normal);
    }
    axes
}

fn project(points: &[Vec2], axis: Vec2) -> (f32, f32) {
    points.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), p| {
        let d = p.dot(axis);
        (min.min(d), max.max(d))
    })
}

/// Boundary-inclusive containment for a convex polygon of either winding:
/// the point must sit on the same side of every edge.
pub fn point_in_convex_polygon(p: Vec2, points: &[Vec2]) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut has_pos = false;
    let mut has_neg = false;
    for (a, b) in edges(points) {
        let side = (b - a).cross(p - a);
        has_pos |= side > 0.0;
        has_neg |= side < 0.0;
        if has_pos && has_neg {
            return false;
        }
    }
    true
}
