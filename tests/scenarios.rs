use extended_hitboxes::{
    check_collision,
    CircleHitbox,
    Hitbox,
    HitboxError,
    Outline,
    PolygonHitbox,
    RotatedRectHitbox,
    Shape,
    ShapeKind,
    TriangleHitbox,
    Vec2,
};

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

fn collide(a: &dyn Hitbox, b: &dyn Hitbox) -> bool {
    let ab = check_collision(a, b).unwrap();
    assert_eq!(ab, check_collision(b, a).unwrap());
    ab
}

#[test]
fn two_circles_move_into_contact() {
    let first = CircleHitbox::new(v(150.0, 150.0), 50.0).unwrap();
    let mut second = CircleHitbox::new(v(300.0, 150.0), 40.0).unwrap();
    assert!(!collide(&first, &second));

    second.position = v(190.0, 150.0);
    assert!(collide(&first, &second));
}

#[test]
fn circle_boundary_exactness() {
    let (r1, r2) = (30.0, 20.0);
    let eps = 0.01;
    let a = CircleHitbox::new(v(0.0, 0.0), r1).unwrap();
    for (d, expected) in [(r1 + r2 - eps, true), (r1 + r2, true), (r1 + r2 + eps, false)] {
        let b = CircleHitbox::new(v(d, 0.0), r2).unwrap();
        assert_eq!(collide(&a, &b), expected, "distance {}", d);
    }
}

#[test]
fn equilateral_triangles_move_into_contact() {
    // circumradius ~57
    let side = 57.0 * 3.0_f32.sqrt();
    let first = TriangleHitbox::equilateral(v(400.0, 200.0), side).unwrap();
    let mut second = TriangleHitbox::equilateral(v(550.0, 200.0), side).unwrap();
    assert!(!collide(&first, &second));

    second.position = v(420.0, 200.0);
    assert!(collide(&first, &second));
}

#[test]
fn axis_aligned_rectangles() {
    // x in [0, 10] vs [20, 30], same y range
    let left = RotatedRectHitbox::new(v(5.0, 5.0), 10.0, 10.0, 0.0).unwrap();
    let far = RotatedRectHitbox::new(v(25.0, 5.0), 10.0, 10.0, 0.0).unwrap();
    let near = RotatedRectHitbox::new(v(10.0, 5.0), 10.0, 10.0, 0.0).unwrap();
    assert!(!collide(&left, &far));
    assert!(collide(&left, &near));
}

#[test]
fn translating_both_shapes_keeps_result() {
    let offsets = [v(0.0, 0.0), v(1000.0, -250.0), v(-37.5, 12.25)];
    let mut cases: Vec<(Shape, Shape, bool)> = vec![
        (
            CircleHitbox::new(v(0.0, 0.0), 10.0).unwrap().into(),
            RotatedRectHitbox::new(v(20.0, 0.0), 10.0, 10.0, 0.4).unwrap().into(),
            false,
        ),
        (
            CircleHitbox::new(v(0.0, 0.0), 10.0).unwrap().into(),
            TriangleHitbox::equilateral(v(12.0, 0.0), 10.0).unwrap().into(),
            true,
        ),
        (
            RotatedRectHitbox::new(v(0.0, 0.0), 40.0, 10.0, 0.8).unwrap().into(),
            TriangleHitbox::equilateral(v(30.0, -30.0), 12.0).unwrap().into(),
            false,
        ),
        (
            RotatedRectHitbox::new(v(0.0, 0.0), 40.0, 10.0, 0.8).unwrap().into(),
            TriangleHitbox::equilateral(v(10.0, 10.0), 12.0).unwrap().into(),
            true,
        ),
    ];

    for (a, b, expected) in cases.iter_mut() {
        for offset in offsets {
            a.translate(offset);
            b.translate(offset);
            assert_eq!(collide(&*a, &*b), *expected, "{} vs {} after {:?}", a.get_shape_name(), b.get_shape_name(), offset);
        }
    }
}

#[test]
fn rectangle_spinning_in_place_keeps_box_center() {
    let mut rect = RotatedRectHitbox::new(v(321.0, -45.0), 80.0, 20.0, 0.0).unwrap();
    for step in 0..64 {
        rect.angle = (step as f32) * 0.37;
        let center = rect.get_aabb().center();
        assert!((center.x - 321.0).abs() < 1e-3, "step {}", step);
        assert!((center.y + 45.0).abs() < 1e-3, "step {}", step);
    }
}

#[test]
fn boxes_contain_their_shapes() {
    let tol = 1e-3;
    let inside = |aabb: &extended_hitboxes::Aabb, p: Vec2| {
        p.x >= aabb.x - tol &&
            p.x <= aabb.x + aabb.width + tol &&
            p.y >= aabb.y - tol &&
            p.y <= aabb.y + aabb.height + tol
    };

    let circle = CircleHitbox::new(v(10.0, -20.0), 7.5).unwrap();
    let aabb = circle.get_aabb();
    for i in 0..32 {
        let theta = (i as f32) * std::f32::consts::TAU / 32.0;
        assert!(inside(&aabb, circle.center() + v(theta.cos(), theta.sin()) * circle.radius()));
    }

    let polygons: Vec<Shape> = vec![
        TriangleHitbox::new(v(5.0, 5.0), [v(0.0, -3.0), v(4.0, 2.0), v(-6.0, 1.0)]).unwrap().into(),
        RotatedRectHitbox::new(v(-100.0, 40.0), 33.0, 7.0, 123.4).unwrap().into(),
        PolygonHitbox::new(v(0.0, 0.0), [v(0.0, 0.0), v(5.0, -1.0), v(7.0, 3.0), v(2.0, 6.0)]).unwrap().into(),
    ];
    for shape in &polygons {
        let aabb = shape.get_aabb();
        let Outline::Polygon(points) = shape.outline() else {
            panic!("expected a polygon outline");
        };
        for p in points {
            assert!(inside(&aabb, p), "{:?} outside {:?}", p, aabb);
        }
    }
}

#[test]
fn large_accumulated_angles_are_fine() {
    let a = RotatedRectHitbox::new(v(0.0, 0.0), 10.0, 2.0, 0.0).unwrap();
    let mut b = a.clone();
    b.position = v(0.0, 4.0);
    b.angle = 100.0 * std::f32::consts::PI;
    assert!(!collide(&a, &b));
    b.angle += std::f32::consts::FRAC_PI_2;
    assert!(collide(&a, &b));
}

struct Segment;

impl Hitbox for Segment {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Other("Segment")
    }

    fn position(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn owner(&self) -> Option<&str> {
        Some("segment")
    }

    fn outline(&self) -> Outline {
        Outline::Polygon(vec![v(0.0, 0.0), v(1.0, 0.0)])
    }
}

#[test]
fn unsupported_pair_is_an_error() {
    let tri = TriangleHitbox::equilateral(v(0.0, 0.0), 5.0).unwrap();
    match check_collision(&tri, &Segment) {
        Err(HitboxError::UnsupportedShapePair { first, second }) => {
            assert_eq!(first, ShapeKind::Triangle);
            assert_eq!(second, ShapeKind::Other("Segment"));
        }
        other => panic!("expected UnsupportedShapePair, got {:?}", other),
    }
    assert!(check_collision(&Segment, &Segment).is_err());
}

#[test]
fn invalid_construction_is_rejected() {
    assert!(matches!(CircleHitbox::new(v(0.0, 0.0), 0.0), Err(HitboxError::InvalidShapeParameter { .. })));
    assert!(matches!(
        RotatedRectHitbox::new(v(0.0, 0.0), 5.0, 0.0, 0.0),
        Err(HitboxError::InvalidShapeParameter { .. })
    ));
    assert!(matches!(
        TriangleHitbox::new(v(0.0, 0.0), [v(0.0, 0.0), v(1.0, 0.0)]),
        Err(HitboxError::InvalidShapeParameter { .. })
    ));
    assert!(matches!(
        PolygonHitbox::new(v(0.0, 0.0), [v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0), v(3.0, 3.0)]),
        Err(HitboxError::InvalidShapeParameter { .. })
    ));
}
