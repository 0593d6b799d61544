use crate::Vector2;

/// Extends the segment from `near` through `far` by `factor` times its
/// length, returning the point past `far`.
pub fn extrapolate(near: Vector2, far: Vector2, factor: f64) -> Vector2 {
    far + factor * (far - near)
}

/// Extends the edge from `from` to `to` past both endpoints by `factor`
/// times its length. Returns the point beyond `to` first, then the point
/// beyond `from`.
pub fn extend_edge(from: Vector2, to: Vector2, factor: f64) -> (Vector2, Vector2) {
    (extrapolate(from, to, factor), extrapolate(to, from, factor))
}

/// Inclusive point-in-polygon test over an ordered loop.
///
/// Points on an edge or vertex count as inside. Works for either winding
/// order and for non-convex loops. A degenerate (zero-area) loop contains
/// only the points lying exactly on its collapsed edges.
pub fn point_in_polygon(point: Vector2, polygon: &[Vector2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    // The even-odd rule below is unreliable exactly on the boundary, so edge
    // membership is checked first.
    for i in 0..n {
        if on_segment(point, polygon[i], polygon[(i + 1) % n]) {
            return true;
        }
    }

    // Even-odd ray cast towards +x.
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = pi.x + (point.y - pi.y) * (pj.x - pi.x) / (pj.y - pi.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn on_segment(point: Vector2, a: Vector2, b: Vector2) -> bool {
    const EPS: f64 = 1e-9;
    let ab = b - a;
    let ap = point - a;
    let cross = ab.x * ap.y - ab.y * ap.x;
    if cross.abs() > EPS * ab.norm().max(1.0) {
        return false;
    }
    let dot = ap.dot(&ab);
    dot >= -EPS && dot <= ab.norm_squared() + EPS
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn square() -> [Vector2; 4] {
        [
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(10.0, 10.0),
            Vector2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_extrapolate() {
        let near = Vector2::new(0.0, 0.0);
        let far = Vector2::new(2.0, 1.0);

        let p = extrapolate(near, far, 1.0);
        assert_relative_eq!(p.x, 4.0);
        assert_relative_eq!(p.y, 2.0);

        let p = extrapolate(near, far, 0.5);
        assert_relative_eq!(p.x, 3.0);
        assert_relative_eq!(p.y, 1.5);
    }

    #[test]
    fn test_extend_edge_both_directions() {
        let from = Vector2::new(1.0, 1.0);
        let to = Vector2::new(3.0, 1.0);

        let (beyond_to, beyond_from) = extend_edge(from, to, 1.0);
        assert_relative_eq!(beyond_to.x, 5.0);
        assert_relative_eq!(beyond_to.y, 1.0);
        assert_relative_eq!(beyond_from.x, -1.0);
        assert_relative_eq!(beyond_from.y, 1.0);
    }

    #[test]
    fn test_point_inside_square() {
        assert!(point_in_polygon(Vector2::new(5.0, 5.0), &square()));
    }

    #[test]
    fn test_point_outside_square() {
        assert!(!point_in_polygon(Vector2::new(15.0, 5.0), &square()));
        assert!(!point_in_polygon(Vector2::new(5.0, -0.1), &square()));
    }

    #[test]
    fn test_point_on_boundary_is_inside() {
        assert!(point_in_polygon(Vector2::new(10.0, 5.0), &square()));
        assert!(point_in_polygon(Vector2::new(0.0, 0.0), &square()));
        assert!(point_in_polygon(Vector2::new(5.0, 10.0), &square()));
    }

    #[test]
    fn test_winding_order_does_not_matter() {
        let mut reversed = square();
        reversed.reverse();
        assert!(point_in_polygon(Vector2::new(5.0, 5.0), &reversed));
        assert!(!point_in_polygon(Vector2::new(15.0, 5.0), &reversed));
        assert!(point_in_polygon(Vector2::new(10.0, 5.0), &reversed));
    }

    #[test]
    fn test_non_convex_loop() {
        // Arrow-head shape: the notch at (5, 5) points back into the loop.
        let polygon = [
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(5.0, 5.0),
            Vector2::new(10.0, 10.0),
        ];
        assert!(point_in_polygon(Vector2::new(4.0, 2.0), &polygon));
        assert!(!point_in_polygon(Vector2::new(9.0, 5.0), &polygon));
    }

    #[test]
    fn test_degenerate_loop_contains_only_its_edge() {
        // All corners collinear: zero area.
        let polygon = [
            Vector2::new(0.0, 0.0),
            Vector2::new(5.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(2.0, 0.0),
        ];
        assert!(point_in_polygon(Vector2::new(3.0, 0.0), &polygon));
        assert!(!point_in_polygon(Vector2::new(3.0, 1.0), &polygon));
    }
}
