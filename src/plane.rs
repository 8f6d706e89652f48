//! Plane primitive in 3D space.

use std::str::FromStr;

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constraint::Constraint;
use crate::{ops, GeometryError, Point, Result};

/// Construction modes for a [`Plane`].
///
/// Parses case-insensitively from the mode strings `"points"` (or
/// `"point"`), `"vector"`, and `"normal"`; anything else is an
/// invalid-mode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlaneMode {
    /// Three points; the in-plane vectors are the edge differences from
    /// the first point.
    Points,
    /// A base point plus two explicit in-plane vectors.
    Vector,
    /// A base point, one in-plane vector, and a normal vector; the second
    /// in-plane vector is derived as `cross(normal, vector_u)`.
    Normal,
}

impl FromStr for PlaneMode {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "points" | "point" => Ok(Self::Points),
            "vector" => Ok(Self::Vector),
            "normal" => Ok(Self::Normal),
            other => Err(GeometryError::invalid_mode(other)),
        }
    }
}

/// A plane in 3D space.
///
/// Canonical storage is a base point and two in-plane vectors; the second
/// and third defining points and the normal are derived on access, so
/// `normal == cross(vector_u, vector_v)` holds after every mutation by
/// construction.
///
/// # Example
///
/// ```
/// use geo_primitives::{Plane, Point};
/// use nalgebra::Vector3;
///
/// let plane = Plane::from_points(
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
/// );
///
/// assert_eq!(plane.normal(), Vector3::new(0.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    point_a: Point3<f64>,
    vector_u: Vector3<f64>,
    vector_v: Vector3<f64>,
}

impl Plane {
    /// Create a plane from three constraints and a construction mode.
    ///
    /// In [`PlaneMode::Points`] all three constraints are positions. In
    /// [`PlaneMode::Vector`] the second and third constraints are the two
    /// in-plane vectors. In [`PlaneMode::Normal`] the second constraint is
    /// an in-plane vector and the third is the plane normal, from which
    /// the second in-plane vector is derived.
    #[must_use]
    pub fn new(
        constraint_0: impl Into<Constraint>,
        constraint_1: impl Into<Constraint>,
        constraint_2: impl Into<Constraint>,
        mode: PlaneMode,
    ) -> Self {
        let point_a = constraint_0.into().position();
        let c1 = constraint_1.into();
        let c2 = constraint_2.into();
        let (vector_u, vector_v) = match mode {
            PlaneMode::Points => (c1.position() - point_a, c2.position() - point_a),
            PlaneMode::Vector => (c1.coords(), c2.coords()),
            PlaneMode::Normal => {
                let vector_u = c1.coords();
                (vector_u, c2.coords().cross(&vector_u))
            }
        };
        Self {
            point_a,
            vector_u,
            vector_v,
        }
    }

    /// Create a plane through three points.
    #[must_use]
    pub fn from_points(
        point_a: impl Into<Point>,
        point_b: impl Into<Point>,
        point_c: impl Into<Point>,
    ) -> Self {
        Self::new(
            point_a.into(),
            point_b.into().position(),
            point_c.into().position(),
            PlaneMode::Points,
        )
    }

    /// Create a plane from a base point and two in-plane vectors.
    #[must_use]
    pub fn from_point_vectors(
        point_a: impl Into<Point>,
        vector_u: Vector3<f64>,
        vector_v: Vector3<f64>,
    ) -> Self {
        Self::new(point_a.into(), vector_u, vector_v, PlaneMode::Vector)
    }

    /// Create a plane from a base point, one in-plane vector, and the
    /// plane normal.
    #[must_use]
    pub fn from_point_normal(
        point_a: impl Into<Point>,
        vector_u: Vector3<f64>,
        normal: Vector3<f64>,
    ) -> Self {
        Self::new(point_a.into(), vector_u, normal, PlaneMode::Normal)
    }

    /// Get the base point.
    #[must_use]
    pub fn point_a(&self) -> Point {
        Point::from(self.point_a)
    }

    /// Get the second defining point, `point_a + vector_u`.
    #[must_use]
    pub fn point_b(&self) -> Point {
        Point::from(self.point_a + self.vector_u)
    }

    /// Get the third defining point, `point_a + vector_v`.
    #[must_use]
    pub fn point_c(&self) -> Point {
        Point::from(self.point_a + self.vector_v)
    }

    /// Get the first in-plane vector.
    #[inline]
    #[must_use]
    pub const fn vector_u(&self) -> Vector3<f64> {
        self.vector_u
    }

    /// Get the second in-plane vector.
    #[inline]
    #[must_use]
    pub const fn vector_v(&self) -> Vector3<f64> {
        self.vector_v
    }

    /// Get the plane normal, `cross(vector_u, vector_v)`.
    ///
    /// Not normalized; the zero vector indicates a degenerate plane.
    #[inline]
    #[must_use]
    pub fn normal(&self) -> Vector3<f64> {
        self.vector_u.cross(&self.vector_v)
    }

    /// Move the base point, keeping the other defining points fixed.
    ///
    /// Both in-plane vectors (and with them the normal) are recomputed
    /// from the unchanged `point_b` and `point_c`.
    pub fn set_point_a(&mut self, point_a: impl Into<Constraint>) {
        let point_b = self.point_a + self.vector_u;
        let point_c = self.point_a + self.vector_v;
        self.point_a = point_a.into().position();
        self.vector_u = point_b - self.point_a;
        self.vector_v = point_c - self.point_a;
    }

    /// Move the second defining point, recomputing `vector_u`.
    pub fn set_point_b(&mut self, point_b: impl Into<Constraint>) {
        self.vector_u = point_b.into().position() - self.point_a;
    }

    /// Move the third defining point, recomputing `vector_v`.
    pub fn set_point_c(&mut self, point_c: impl Into<Constraint>) {
        self.vector_v = point_c.into().position() - self.point_a;
    }

    /// Get a point on the plane by scaling the two in-plane vectors from
    /// the base point.
    ///
    /// # Example
    ///
    /// ```
    /// use geo_primitives::{Plane, Point};
    /// use nalgebra::Vector3;
    ///
    /// let plane = Plane::from_point_vectors(
    ///     Point::origin(),
    ///     Vector3::new(1.0, 0.0, 0.0),
    ///     Vector3::new(0.0, 1.0, 0.0),
    /// );
    /// assert_eq!(plane.point(2.0, 3.0), Point::new(2.0, 3.0, 0.0));
    /// ```
    #[must_use]
    pub fn point(&self, scale_u: f64, scale_v: f64) -> Point {
        Point::from(self.point_a + self.vector_u * scale_u + self.vector_v * scale_v)
    }

    /// Compute the minimum distance from a point to this plane.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the plane normal has zero
    /// length.
    pub fn distance_to(&self, point: impl Into<Point>) -> Result<f64> {
        ops::distance_point_plane(
            point.into().position(),
            self.point_a,
            self.point_a + self.vector_u,
            self.point_a + self.vector_v,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn xy_plane() -> Plane {
        Plane::from_points(
            Point::origin(),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn points_mode_derives_edge_vectors() {
        let plane = Plane::new(
            Point::new(1.0, 1.0, 1.0),
            Point::new(2.0, 1.0, 1.0).position(),
            Point::new(1.0, 3.0, 1.0).position(),
            PlaneMode::Points,
        );
        assert_eq!(plane.vector_u(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(plane.vector_v(), Vector3::new(0.0, 2.0, 0.0));
        assert_eq!(plane.normal(), Vector3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn vector_mode_stores_vectors_directly() {
        let u = Vector3::new(1.0, 0.0, 0.0);
        let v = Vector3::new(0.0, 0.0, 1.0);
        let plane = Plane::new(Point::origin(), u, v, PlaneMode::Vector);
        assert_eq!(plane.vector_u(), u);
        assert_eq!(plane.vector_v(), v);
        assert_eq!(plane.point_b(), Point::new(1.0, 0.0, 0.0));
        assert_eq!(plane.point_c(), Point::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn normal_mode_derives_second_vector_in_plane() {
        let u = Vector3::new(1.0, 0.0, 0.0);
        let n = Vector3::new(0.0, 0.0, 1.0);
        let plane = Plane::new(Point::origin(), u, n, PlaneMode::Normal);
        // vector_v = cross(normal, vector_u) lies in the plane.
        assert_eq!(plane.vector_v(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(plane.vector_v().dot(&n), 0.0);
        // The resulting normal points the same way as the input normal.
        assert_eq!(plane.normal(), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn normal_is_cross_of_defining_vectors_after_mutation() {
        let mut plane = xy_plane();
        plane.set_point_b(Point::new(0.0, 2.0, 1.0));
        plane.set_point_c(Point::new(-1.0, 0.0, 2.0));
        let expected = plane.vector_u().cross(&plane.vector_v());
        assert_relative_eq!(plane.normal(), expected, epsilon = 1e-12);

        plane.set_point_a(Point::new(1.0, 1.0, 1.0));
        let expected = plane.vector_u().cross(&plane.vector_v());
        assert_relative_eq!(plane.normal(), expected, epsilon = 1e-12);
    }

    #[test]
    fn moving_base_point_keeps_other_points_fixed() {
        let mut plane = xy_plane();
        let b = plane.point_b();
        let c = plane.point_c();
        plane.set_point_a(Point::new(0.5, 0.5, 0.5));
        assert_relative_eq!(plane.point_b().position(), b.position(), epsilon = 1e-12);
        assert_relative_eq!(plane.point_c().position(), c.position(), epsilon = 1e-12);
    }

    #[test]
    fn mode_strings_parse_case_insensitively() {
        assert_eq!("Points".parse::<PlaneMode>(), Ok(PlaneMode::Points));
        assert_eq!("VECTOR".parse::<PlaneMode>(), Ok(PlaneMode::Vector));
        assert_eq!("normal".parse::<PlaneMode>(), Ok(PlaneMode::Normal));
        assert!("tangent".parse::<PlaneMode>().is_err());
    }

    #[test]
    fn distance_to_point_above_plane() {
        let plane = xy_plane();
        assert_eq!(plane.distance_to(Point::new(5.0, 5.0, 3.0)), Ok(3.0));
    }

    #[test]
    fn distance_to_fails_for_degenerate_plane() {
        let plane = Plane::from_point_vectors(
            Point::origin(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
        );
        let err = plane.distance_to(Point::new(0.0, 1.0, 0.0));
        assert!(matches!(err, Err(e) if e.is_degenerate()));
    }
}
