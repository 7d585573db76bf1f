use geo::BoundingRect;
use geo_types::{Coord, LineString, Rect, coord};

/// Samples the boundary of `rect` counter-clockwise from its minimum corner.
///
/// The four corners are always present. `density` is the total number of
/// boundary points wanted; anything above 4 is spread evenly over the four
/// edges (rounded up per edge).
pub fn generate_envelope_points(rect: &Rect<f64>, density: usize) -> Vec<Coord<f64>> {
    let per_edge = if density <= 4 {
        0
    } else {
        (density - 4).div_ceil(4)
    };

    let (min, max) = (rect.min(), rect.max());
    let steps = (per_edge + 1) as f64;
    let x_step = (max.x - min.x) / steps;
    let y_step = (max.y - min.y) / steps;

    let mut points = Vec::with_capacity(4 * (per_edge + 1));
    for i in 0..=per_edge {
        points.push(coord! { x: min.x + x_step * i as f64, y: min.y });
    }
    for i in 0..=per_edge {
        points.push(coord! { x: max.x, y: min.y + y_step * i as f64 });
    }
    for i in 0..=per_edge {
        points.push(coord! { x: max.x - x_step * i as f64, y: max.y });
    }
    for i in 0..=per_edge {
        points.push(coord! { x: min.x, y: max.y - y_step * i as f64 });
    }
    points
}

/// Smallest axis-aligned rectangle holding every point, `None` when empty.
pub fn calculate_bbox(points: Vec<Coord<f64>>) -> Option<Rect<f64>> {
    LineString::new(points).bounding_rect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_rect() -> Rect<f64> {
        Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 4.0, y: 2.0 })
    }

    #[test]
    fn test_corners_only() {
        let points = generate_envelope_points(&unit_rect(), 4);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], coord! { x: 0.0, y: 0.0 });
        assert_eq!(points[1], coord! { x: 4.0, y: 0.0 });
        assert_eq!(points[2], coord! { x: 4.0, y: 2.0 });
        assert_eq!(points[3], coord! { x: 0.0, y: 2.0 });
    }

    #[test]
    fn test_density_adds_edge_points() {
        let points = generate_envelope_points(&unit_rect(), 12);
        // two interior samples per edge
        assert_eq!(points.len(), 12);
        assert!(points.contains(&coord! { x: 4.0, y: 2.0 }));

        let points = generate_envelope_points(&unit_rect(), 13);
        assert_eq!(points.len(), 16);
    }

    #[test]
    fn test_small_density_still_has_corners() {
        assert_eq!(generate_envelope_points(&unit_rect(), 0).len(), 4);
    }

    #[test]
    fn test_calculate_bbox() {
        let points = vec![
            coord! { x: 3.0, y: -1.0 },
            coord! { x: -2.0, y: 5.0 },
            coord! { x: 1.0, y: 1.0 },
        ];
        let bbox = calculate_bbox(points).unwrap();
        assert_eq!(bbox.min(), coord! { x: -2.0, y: -1.0 });
        assert_eq!(bbox.max(), coord! { x: 3.0, y: 5.0 });
    }

    #[test]
    fn test_calculate_bbox_empty() {
        assert!(calculate_bbox(Vec::new()).is_none());
    }
}
