// src/models/geometry.rs
// Types and math for the rotating crystal: vertex set, rotation and perspective projection.
//
// Screen space here is top-left origin, y down. Conversion to nannou's
// center-origin space happens in draw::nannou_surface.

/// A vertex of the crystal in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A vertex after rotation and perspective, in screen space.
/// `depth` is the rotated z before perspective division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    // Window sizes arrive as f32 points; negative or NaN measurements clamp to zero
    pub fn from_points(width: f32, height: f32) -> Self {
        let clamp = |v: f32| if v.is_finite() && v > 0.0 { v.round() as u32 } else { 0 };
        Self {
            width: clamp(width),
            height: clamp(height),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

/// Rotation angles in radians, about the X and Y axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angles {
    pub x: f64,
    pub y: f64,
}

impl Angles {
    pub fn at(t: f64, x_rate: f64, y_rate: f64) -> Self {
        Self {
            x: t * x_rate,
            y: t * y_rate,
        }
    }
}

pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// The twelve vertices of a regular icosahedron, scaled.
pub fn icosahedron_vertices(scale: f64) -> [Point3D; 12] {
    let phi = GOLDEN_RATIO;
    let raw = [
        (-1.0, phi, 0.0),
        (1.0, phi, 0.0),
        (-1.0, -phi, 0.0),
        (1.0, -phi, 0.0),
        (0.0, -1.0, phi),
        (0.0, 1.0, phi),
        (0.0, -1.0, -phi),
        (0.0, 1.0, -phi),
        (phi, 0.0, -1.0),
        (phi, 0.0, 1.0),
        (-phi, 0.0, -1.0),
        (-phi, 0.0, 1.0),
    ];
    raw.map(|(x, y, z)| Point3D::new(x * scale, y * scale, z * scale))
}

/// Radius of the sphere every vertex of `icosahedron_vertices(scale)` lies on.
/// Rotation keeps depth within plus or minus this value.
pub fn circumradius(scale: f64) -> f64 {
    scale * (1.0 + GOLDEN_RATIO * GOLDEN_RATIO).sqrt()
}

/// Rotates about Y, then about X using the post-Y depth, then applies
/// perspective `k / (k + depth)` and centers on the surface.
pub fn project(point: Point3D, angles: Angles, size: SurfaceSize, perspective: f64) -> ProjectedPoint {
    let (sin_x, cos_x) = angles.x.sin_cos();
    let (sin_y, cos_y) = angles.y.sin_cos();

    // rotate Y
    let dx = point.x * cos_y - point.z * sin_y;
    let dz = point.x * sin_y + point.z * cos_y;

    // rotate X
    let dy = point.y * cos_x - dz * sin_x;
    let dz = point.y * sin_x + dz * cos_x;

    let scale = perspective / (perspective + dz);
    let (cx, cy) = size.center();

    ProjectedPoint {
        x: dx * scale + cx,
        y: dy * scale + cy,
        depth: dz,
    }
}

pub fn screen_distance(a: &ProjectedPoint, b: &ProjectedPoint) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_vertex_set_is_stable() {
        let a = icosahedron_vertices(140.0);
        let b = icosahedron_vertices(140.0);
        assert_eq!(a.len(), 12);
        assert_eq!(a, b);
    }

    #[test]
    fn test_vertices_share_a_sphere() {
        let vertices = icosahedron_vertices(140.0);
        let expected = circumradius(140.0).powi(2);
        for v in vertices.iter() {
            assert!((v.x * v.x + v.y * v.y + v.z * v.z - expected).abs() < 1e-6 * expected);
        }
    }

    #[test]
    fn test_depth_stays_within_circumradius() {
        let radius = circumradius(140.0);
        let mut t = 0.0;
        while t < 20.0 {
            for v in icosahedron_vertices(140.0) {
                let projected = project(v, Angles::at(t, 0.7, 0.9), SurfaceSize::new(400, 400), 400.0);
                assert!(projected.depth.abs() <= radius + EPSILON);
                assert!(projected.x.is_finite() && projected.y.is_finite());
            }
            t += 0.05;
        }
    }

    #[test]
    fn test_golden_ratio() {
        assert!((GOLDEN_RATIO - (1.0 + 5f64.sqrt()) / 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_projection_at_rest() {
        // t = 0: no rotation, depth 0, perspective scale exactly 1
        let point = Point3D::new(-140.0, GOLDEN_RATIO * 140.0, 0.0);
        let size = SurfaceSize::new(400, 400);
        let projected = project(point, Angles::at(0.0, 0.7, 0.9), size, 400.0);

        let phi = (1.0 + 5f64.sqrt()) / 2.0;
        assert!((projected.x - 60.0).abs() < EPSILON);
        assert!((projected.y - (phi * 140.0 + 200.0)).abs() < EPSILON);
        assert!(projected.depth.abs() < EPSILON);
    }

    #[test]
    fn test_projection_rotation_order() {
        // Y first: (0, 0, 100) at angle_y = 90deg lands on dx = -100, then
        // X rotation only sees the post-Y depth, which is ~0.
        let point = Point3D::new(0.0, 50.0, 100.0);
        let angles = Angles {
            x: std::f64::consts::FRAC_PI_2,
            y: std::f64::consts::FRAC_PI_2,
        };
        let projected = project(point, angles, SurfaceSize::new(0, 0), 400.0);

        // dx = -100, dz' = 0, dy = 0, dz = 50, s = 400 / 450
        let s = 400.0 / 450.0;
        assert!((projected.x - (-100.0 * s)).abs() < EPSILON);
        assert!(projected.y.abs() < EPSILON);
        assert!((projected.depth - 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let point = icosahedron_vertices(140.0)[7];
        let angles = Angles::at(3.21, 0.7, 0.9);
        let size = SurfaceSize::new(640, 480);
        assert_eq!(
            project(point, angles, size, 400.0),
            project(point, angles, size, 400.0)
        );
    }

    #[test]
    fn test_resize_only_moves_center() {
        let angles = Angles::at(1.5, 0.7, 0.9);
        let small = SurfaceSize::new(300, 200);
        let large = SurfaceSize::new(1024, 768);

        for v in icosahedron_vertices(140.0) {
            let a = project(v, angles, small, 400.0);
            let b = project(v, angles, large, 400.0);
            assert!((b.x - a.x - (512.0 - 150.0)).abs() < EPSILON);
            assert!((b.y - a.y - (384.0 - 100.0)).abs() < EPSILON);
            assert_eq!(a.depth, b.depth);
        }
    }

    #[test]
    fn test_surface_size_from_points() {
        assert_eq!(SurfaceSize::from_points(640.4, 479.6), SurfaceSize::new(640, 480));
        assert_eq!(SurfaceSize::from_points(-3.0, f32::NAN), SurfaceSize::new(0, 0));
        assert!(SurfaceSize::new(0, 300).is_empty());
    }
}
