pub mod geometry;

pub use geometry::{Angles, Point3D, ProjectedPoint, SurfaceSize};
