// src/render/edges.rs
// Distance-thresholded edge graph and glow pulse, recomputed every frame

use crate::models::geometry::{screen_distance, ProjectedPoint};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: ProjectedPoint,
    pub to: ProjectedPoint,
    pub alpha: f64,
}

/// Edge strength for a pair `distance` apart. `None` at or beyond the threshold.
pub fn edge_alpha(distance: f64, threshold: f64) -> Option<f64> {
    if threshold <= 0.0 || distance.is_nan() || distance >= threshold {
        return None;
    }
    Some(1.0 - distance / threshold)
}

/// Every unordered pair (i < j) closer than `threshold`, in pair order.
pub fn visible_edges(projected: &[ProjectedPoint], threshold: f64) -> Vec<Edge> {
    let mut edges = Vec::new();
    for (i, a) in projected.iter().enumerate() {
        for b in &projected[i + 1..] {
            if let Some(alpha) = edge_alpha(screen_distance(a, b), threshold) {
                edges.push(Edge {
                    from: *a,
                    to: *b,
                    alpha,
                });
            }
        }
    }
    edges
}

/// Glow radius oscillating between `base` and `base + amplitude`.
pub fn glow_radius(t: f64, base: f64, amplitude: f64) -> f64 {
    let pulse = ((t * 2.0).sin() + 1.0) / 2.0;
    base + pulse * amplitude
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> ProjectedPoint {
        ProjectedPoint { x, y, depth: 0.0 }
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(edge_alpha(260.0, 260.0), None);
        assert_eq!(edge_alpha(300.0, 260.0), None);

        let alpha = edge_alpha(259.999, 260.0).unwrap();
        assert!(alpha > 0.0 && alpha <= 1.0);

        assert_eq!(edge_alpha(0.0, 260.0), Some(1.0));
        assert_eq!(edge_alpha(130.0, 260.0), Some(0.5));
        assert_eq!(edge_alpha(f64::NAN, 260.0), None);
    }

    #[test]
    fn test_visible_edges_pairs() {
        let points = [pt(0.0, 0.0), pt(100.0, 0.0), pt(0.0, 260.0), pt(1000.0, 1000.0)];
        let edges = visible_edges(&points, 260.0);

        // (0,1) at 100 and (1,2) at ~278 / (0,2) at exactly 260: only the first survives
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].from, points[0]);
        assert_eq!(edges[0].to, points[1]);
        assert!((edges[0].alpha - (1.0 - 100.0 / 260.0)).abs() < 1e-12);
    }

    #[test]
    fn test_all_pairs_when_close() {
        let points: Vec<ProjectedPoint> = (0..12).map(|i| pt(i as f64, 0.0)).collect();
        assert_eq!(visible_edges(&points, 260.0).len(), 66);
        assert!(visible_edges(&points[..1], 260.0).is_empty());
        assert!(visible_edges(&[], 260.0).is_empty());
    }

    #[test]
    fn test_glow_radius_bounds() {
        let mut t = -50.0;
        while t < 50.0 {
            let r = glow_radius(t, 140.0, 20.0);
            assert!((140.0..=160.0).contains(&r), "radius {} out of range at t={}", r, t);
            t += 0.037;
        }
        assert!((glow_radius(0.0, 140.0, 20.0) - 150.0).abs() < 1e-12);
        let peak = std::f64::consts::FRAC_PI_4;
        assert!((glow_radius(peak, 140.0, 20.0) - 160.0).abs() < 1e-12);
    }
}
