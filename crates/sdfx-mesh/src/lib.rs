#![warn(missing_docs)]

//! Triangle mesh types for the sdfx exporters.
//!
//! Thin wrappers around nalgebra providing the vertex and triangle types
//! shared by the rendering and file-export layers. A renderer (e.g. a
//! marching-cubes isosurface extractor) produces `Triangle3` batches; the
//! exporters consume them.

use nalgebra::Vector3;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A triangle in 3D space, stored as an ordered vertex triple.
///
/// The winding order is significant: the face normal is the unit vector of
/// `(v1 - v0) x (v2 - v0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3(pub [Point3; 3]);

impl Triangle3 {
    /// Create a triangle from three vertices in winding order.
    pub fn new(v0: Point3, v1: Point3, v2: Point3) -> Self {
        Self([v0, v1, v2])
    }

    /// The (non-normalized) cross product `(v1 - v0) x (v2 - v0)`.
    ///
    /// Its length is twice the triangle area.
    pub fn cross(&self) -> Vec3 {
        let e1 = self.0[1] - self.0[0];
        let e2 = self.0[2] - self.0[0];
        e1.cross(&e2)
    }

    /// The unit face normal.
    ///
    /// Undefined (NaN components) for degenerate triangles; callers filter
    /// those out first.
    pub fn normal(&self) -> Vec3 {
        self.cross().normalize()
    }

    /// Whether the triangle is degenerate under `tolerance`.
    ///
    /// A triangle is degenerate when any edge's squared length is at most
    /// `tolerance^2`, or when the squared length of the edge cross product
    /// is at most `tolerance^2` (colinear vertices).
    pub fn degenerate(&self, tolerance: f64) -> bool {
        let tol2 = tolerance * tolerance;
        let [v0, v1, v2] = self.0;
        if (v1 - v0).norm_squared() <= tol2
            || (v2 - v1).norm_squared() <= tol2
            || (v0 - v2).norm_squared() <= tol2
        {
            return true;
        }
        self.cross().norm_squared() <= tol2
    }
}

impl From<[Point3; 3]> for Triangle3 {
    fn from(vertices: [Point3; 3]) -> Self {
        Self(vertices)
    }
}
