use super::Point;

/// Sample the stamp centers of a brush-like path.
///
/// The first vertex is stamped once. Each segment `a -> b` then gets stamps at
/// `step, 2 * step, ...` pixels from `a` (strictly before `b`), followed by a
/// stamp on `b` itself. A non-positive `step` stamps the vertices only.
pub fn stamp_centers(points: &[Point], step: f32) -> Vec<Point> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };

    let mut centers = vec![first];
    for segment in points.windows(2) {
        let (a, b) = (segment[0], segment[1]);
        let dist = a.distance(b);

        if step > 0.0 && dist > 0.0 {
            // Integer stepping keeps the sample positions independent of float accumulation
            let mut i = 1u32;
            loop {
                let d = step * i as f32;
                if d >= dist {
                    break;
                }
                centers.push(a.lerp(b, d / dist));
                i += 1;
            }
        }
        centers.push(b);
    }
    centers
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_empty_path_has_no_stamps() {
        assert!(stamp_centers(&[], 2.0).is_empty());
    }

    #[test]
    fn test_single_point_is_one_stamp() {
        let centers = stamp_centers(&[pos2(3.0, 4.0)], 2.0);
        assert_eq!(centers, vec![pos2(3.0, 4.0)]);
    }

    #[test]
    fn test_segment_spacing() {
        // radius 5 => step 2, a 10px segment gets stamps at 0, 2, 4, 6, 8, 10
        let centers = stamp_centers(&[pos2(0.0, 0.0), pos2(10.0, 0.0)], 5.0 / 2.5);
        let expected = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0];
        assert_eq!(centers.len(), expected.len());
        for (center, x) in centers.iter().zip(expected) {
            assert!((center.x - x).abs() < 1e-4, "{center:?} != {x}");
            assert_eq!(center.y, 0.0);
        }
    }

    #[test]
    fn test_vertices_always_stamped() {
        let points = [pos2(0.0, 0.0), pos2(1.0, 0.0), pos2(1.0, 1.0)];
        let centers = stamp_centers(&points, 4.0);
        assert_eq!(centers, points.to_vec());
    }

    #[test]
    fn test_zero_step_stamps_vertices_only() {
        let points = [pos2(0.0, 0.0), pos2(50.0, 0.0)];
        assert_eq!(stamp_centers(&points, 0.0), points.to_vec());
    }
}
