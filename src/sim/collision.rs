//! Overlap tests shared by level generation and gameplay
//!
//! Both tests are pure. Level placement and in-game collision go through the
//! same functions so "does not overlap the goal at generation time" and
//! "touching the goal advances the level" agree on edge cases.

use glam::Vec2;

use super::geom::Rect;

/// Rectangle/rectangle intersection
///
/// Strict inequalities: rectangles that only share an edge do not overlap.
#[inline]
pub fn check_collision_recs(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Circle/rectangle intersection
///
/// The circle center is clamped to the rectangle bounds; the shapes overlap
/// when the squared distance to that point is below the squared radius.
#[inline]
pub fn check_collision_circle_rec(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.clamp_point(center);
    center.distance_squared(closest) < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(25.0, 25.0, 50.0, 50.0);
        assert!(check_collision_recs(&a, &b));
        assert!(check_collision_recs(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let right = Rect::new(50.0, 0.0, 50.0, 50.0);
        let below = Rect::new(0.0, 50.0, 50.0, 50.0);
        assert!(!check_collision_recs(&a, &right));
        assert!(!check_collision_recs(&a, &below));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(-500.0, -500.0, 500.0, 1200.0);
        let inner = Rect::new(-100.0, 0.0, 50.0, 50.0);
        assert!(check_collision_recs(&outer, &inner));
    }

    #[test]
    fn test_circle_inside_rect() {
        let goal = Rect::new(3400.0, 400.0, 50.0, 50.0);
        assert!(check_collision_circle_rec(Vec2::new(3425.0, 425.0), 10.0, &goal));
    }

    #[test]
    fn test_circle_near_corner() {
        let goal = Rect::new(3400.0, 400.0, 50.0, 50.0);
        // 6-8-10 triangle: exactly on the radius is not an overlap
        assert!(!check_collision_circle_rec(Vec2::new(3394.0, 392.0), 10.0, &goal));
        assert!(check_collision_circle_rec(Vec2::new(3395.0, 393.0), 10.0, &goal));
    }

    #[test]
    fn test_circle_beside_edge() {
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
        assert!(check_collision_circle_rec(Vec2::new(50.0, 29.0), 10.0, &rect));
        assert!(!check_collision_circle_rec(Vec2::new(50.0, 31.0), 10.0, &rect));
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-1000i32..4000, -500i32..800, 1i32..200, 1i32..200)
            .prop_map(|(x, y, w, h)| Rect::new(x as f32, y as f32, w as f32, h as f32))
    }

    proptest! {
        #[test]
        fn overlap_is_pure_and_symmetric(a in arb_rect(), b in arb_rect()) {
            let first = check_collision_recs(&a, &b);
            prop_assert_eq!(first, check_collision_recs(&a, &b));
            prop_assert_eq!(first, check_collision_recs(&b, &a));
        }

        #[test]
        fn circle_test_is_pure(x in -100i32..300, y in -100i32..300, r in arb_rect()) {
            let c = Vec2::new(x as f32, y as f32);
            let first = check_collision_circle_rec(c, 10.0, &r);
            prop_assert_eq!(first, check_collision_circle_rec(c, 10.0, &r));
        }
    }
}
