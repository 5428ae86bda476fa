//! `Point3D`: a single-precision position in model space
//!
//! Node positions are stored as three packed `f32` coordinates. The type is
//! `repr(C)` and `Pod`, so a slice of points can be reinterpreted as a flat
//! coordinate buffer with `bytemuck::cast_slice` without copying.

use std::fmt;
use std::ops::{Add, Sub};

/// A 3D point with `x`, `y`, `z` coordinates.
#[derive(
    Copy,
    Clone,
    Default,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(C)]
pub struct Point3D(pub [f32; 3]);

impl Point3D {
    /// Creates a point from its three coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Point3D([x, y, z])
    }

    /// The x coordinate.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }

    /// The y coordinate.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }

    /// The z coordinate.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    /// Largest per-axis distance to `other` (Chebyshev metric).
    #[inline]
    pub fn max_axis_distance(&self, other: &Point3D) -> f32 {
        (self.0[0] - other.0[0])
            .abs()
            .max((self.0[1] - other.0[1]).abs())
            .max((self.0[2] - other.0[2]).abs())
    }
}

impl From<[f32; 3]> for Point3D {
    #[inline]
    fn from(v: [f32; 3]) -> Self {
        Point3D(v)
    }
}

impl Add for Point3D {
    type Output = Point3D;

    #[inline]
    fn add(self, rhs: Point3D) -> Point3D {
        Point3D::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl Sub for Point3D {
    type Output = Point3D;

    #[inline]
    fn sub(self, rhs: Point3D) -> Point3D {
        Point3D::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

impl fmt::Debug for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Point3D")
            .field(&self.x())
            .field(&self.y())
            .field(&self.z())
            .finish()
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}
