//! Point primitive in 3D space.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::validate::check_dimension;
use crate::Result;

/// A point in 3D space.
///
/// Wraps a single coordinate triple; the per-axis accessors and the
/// whole-vector accessors read and write the same storage, so they can
/// never fall out of sync.
///
/// # Example
///
/// ```
/// use geo_primitives::Point;
///
/// let mut p = Point::new(1.0, 2.0, 3.0);
/// assert_eq!(p.x(), 1.0);
///
/// p.set_x(5.0);
/// assert_eq!(p.coords().x, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    position: Point3<f64>,
}

/// A mesh vertex: a point in 3D space.
///
/// The mesh model ([`Edge`](crate::Edge), [`Face`](crate::Face)) builds on
/// the same point primitive; the alias keeps mesh-facing signatures readable.
pub type Vertex = Point;

impl Point {
    /// Create a point from three coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use geo_primitives::Point;
    ///
    /// let p = Point::new(1.0, 2.0, 3.0);
    /// assert_eq!(p.z(), 3.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
        }
    }

    /// Create a point at the origin.
    #[inline]
    #[must_use]
    pub fn origin() -> Self {
        Self {
            position: Point3::origin(),
        }
    }

    /// Create a point from a coordinate slice.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`](crate::GeometryError::DimensionMismatch)
    /// unless the slice has exactly 3 elements.
    ///
    /// # Example
    ///
    /// ```
    /// use geo_primitives::Point;
    ///
    /// let p = Point::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(p.y(), 2.0);
    ///
    /// assert!(Point::from_slice(&[1.0, 2.0]).is_err());
    /// ```
    pub fn from_slice(coords: &[f64]) -> Result<Self> {
        check_dimension(3, coords.len())?;
        Ok(Self::new(coords[0], coords[1], coords[2]))
    }

    /// Get the X coordinate.
    #[inline]
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.coords.x
    }

    /// Get the Y coordinate.
    #[inline]
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.coords.y
    }

    /// Get the Z coordinate.
    #[inline]
    #[must_use]
    pub fn z(&self) -> f64 {
        self.position.coords.z
    }

    /// Set the X coordinate.
    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.position.coords.x = x;
    }

    /// Set the Y coordinate.
    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.position.coords.y = y;
    }

    /// Set the Z coordinate.
    #[inline]
    pub fn set_z(&mut self, z: f64) {
        self.position.coords.z = z;
    }

    /// Get the coordinates as a vector from the origin.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> Vector3<f64> {
        self.position.coords
    }

    /// Replace all coordinates at once.
    #[inline]
    pub fn set_coords(&mut self, coords: Vector3<f64>) {
        self.position.coords = coords;
    }

    /// Get the position as a nalgebra point.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Point3<f64> {
        self.position
    }
}

impl From<Point3<f64>> for Point {
    fn from(position: Point3<f64>) -> Self {
        Self { position }
    }
}

impl From<Point> for Point3<f64> {
    fn from(point: Point) -> Self {
        point.position
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_construction() {
        let p = Point::new(1.0, 2.0, 3.0);
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.y(), 2.0);
        assert_eq!(p.z(), 3.0);
    }

    #[test]
    fn coordinate_setter_updates_vector() {
        let mut p = Point::new(0.0, 0.0, 0.0);
        p.set_x(1.0);
        p.set_y(2.0);
        p.set_z(3.0);
        assert_eq!(p.coords(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn vector_setter_updates_coordinates() {
        let mut p = Point::origin();
        p.set_coords(Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(p.x(), 4.0);
        assert_eq!(p.y(), 5.0);
        assert_eq!(p.z(), 6.0);
    }

    #[test]
    fn from_slice_validates_dimension() {
        assert!(Point::from_slice(&[1.0, 2.0, 3.0]).is_ok());

        let err = Point::from_slice(&[1.0, 2.0]);
        assert!(matches!(
            err,
            Err(e) if e.is_dimension_mismatch()
        ));

        let err = Point::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert!(err.is_err());
    }

    #[test]
    fn point_from_tuple_and_array() {
        let a: Point = [1.0, 2.0, 3.0].into();
        let b: Point = (1.0, 2.0, 3.0).into();
        assert_eq!(a, b);
    }
}
