//! UV-space types. Strictly 2D.
//!
//! UV space is a 2D coordinate frame embedded in a 3D plane, defined by an
//! origin, a U-axis vector, and a normal. Points mapped into such a frame
//! (see [`map_xyz_to_uv`](crate::ops::map_xyz_to_uv)) are represented by the
//! types here, which deliberately do not mix with the 3D spatial types.

use nalgebra::{Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::validate::check_dimension;
use crate::Result;

/// A point in a 2D UV frame.
///
/// # Example
///
/// ```
/// use geo_primitives::UvPoint;
///
/// let mut p = UvPoint::new(0.25, 0.75);
/// assert_eq!(p.u(), 0.25);
///
/// p.set_v(0.5);
/// assert_eq!(p.coords().y, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UvPoint {
    position: Point2<f64>,
}

impl UvPoint {
    /// Create a UV point from its two coordinates.
    #[inline]
    #[must_use]
    pub fn new(u: f64, v: f64) -> Self {
        Self {
            position: Point2::new(u, v),
        }
    }

    /// Create a UV point at the frame origin.
    #[inline]
    #[must_use]
    pub fn origin() -> Self {
        Self {
            position: Point2::origin(),
        }
    }

    /// Create a UV point from a coordinate slice.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`](crate::GeometryError::DimensionMismatch)
    /// unless the slice has exactly 2 elements.
    pub fn from_slice(coords: &[f64]) -> Result<Self> {
        check_dimension(2, coords.len())?;
        Ok(Self::new(coords[0], coords[1]))
    }

    /// Get the U coordinate.
    #[inline]
    #[must_use]
    pub fn u(&self) -> f64 {
        self.position.coords.x
    }

    /// Get the V coordinate.
    #[inline]
    #[must_use]
    pub fn v(&self) -> f64 {
        self.position.coords.y
    }

    /// Set the U coordinate.
    #[inline]
    pub fn set_u(&mut self, u: f64) {
        self.position.coords.x = u;
    }

    /// Set the V coordinate.
    #[inline]
    pub fn set_v(&mut self, v: f64) {
        self.position.coords.y = v;
    }

    /// Get the coordinates as a vector from the frame origin.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> Vector2<f64> {
        self.position.coords
    }

    /// Replace both coordinates at once.
    #[inline]
    pub fn set_coords(&mut self, coords: Vector2<f64>) {
        self.position.coords = coords;
    }

    /// Get the position as a nalgebra point.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Point2<f64> {
        self.position
    }
}

impl From<Point2<f64>> for UvPoint {
    fn from(position: Point2<f64>) -> Self {
        Self { position }
    }
}

impl From<UvPoint> for Point2<f64> {
    fn from(point: UvPoint) -> Self {
        point.position
    }
}

impl From<[f64; 2]> for UvPoint {
    fn from([u, v]: [f64; 2]) -> Self {
        Self::new(u, v)
    }
}

/// An ordered vertex triple in a 2D UV frame.
///
/// This is the argument shape consumed by
/// [`point_in_triangle`](crate::ops::point_in_triangle).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UvTriangle {
    /// First vertex.
    pub a: UvPoint,
    /// Second vertex.
    pub b: UvPoint,
    /// Third vertex.
    pub c: UvPoint,
}

impl UvTriangle {
    /// Create a triangle from three UV points.
    #[inline]
    #[must_use]
    pub const fn new(a: UvPoint, b: UvPoint, c: UvPoint) -> Self {
        Self { a, b, c }
    }

    /// Get the vertices as an array.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [UvPoint; 3] {
        [self.a, self.b, self.c]
    }

    /// Compute the centroid of the triangle.
    #[must_use]
    pub fn centroid(&self) -> UvPoint {
        UvPoint::new(
            (self.a.u() + self.b.u() + self.c.u()) / 3.0,
            (self.a.v() + self.b.v() + self.c.v()) / 3.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_construction() {
        let p = UvPoint::new(0.1, 0.9);
        assert_eq!(p.u(), 0.1);
        assert_eq!(p.v(), 0.9);
    }

    #[test]
    fn setters_stay_in_sync_with_vector() {
        let mut p = UvPoint::origin();
        p.set_u(2.0);
        p.set_v(3.0);
        assert_eq!(p.coords(), Vector2::new(2.0, 3.0));

        p.set_coords(Vector2::new(4.0, 5.0));
        assert_eq!(p.u(), 4.0);
        assert_eq!(p.v(), 5.0);
    }

    #[test]
    fn from_slice_validates_dimension() {
        assert!(UvPoint::from_slice(&[1.0, 2.0]).is_ok());
        assert!(UvPoint::from_slice(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn triangle_centroid() {
        let tri = UvTriangle::new(
            UvPoint::new(0.0, 0.0),
            UvPoint::new(3.0, 0.0),
            UvPoint::new(0.0, 3.0),
        );
        let c = tri.centroid();
        assert!((c.u() - 1.0).abs() < 1e-12);
        assert!((c.v() - 1.0).abs() < 1e-12);
    }
}
