//! Line primitive in 3D space.

use std::str::FromStr;

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constraint::Constraint;
use crate::{ops, GeometryError, Plane, Point, Result};

/// Construction modes for a [`Line`].
///
/// Parses case-insensitively from the mode strings `"point"` (or
/// `"points"`) and `"vector"`; anything else is an invalid-mode error.
///
/// # Example
///
/// ```
/// use geo_primitives::LineMode;
///
/// assert_eq!("Point".parse::<LineMode>(), Ok(LineMode::Point));
/// assert_eq!("VECTOR".parse::<LineMode>(), Ok(LineMode::Vector));
/// assert!("diagonal".parse::<LineMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineMode {
    /// The line is defined by two points; the direction is derived.
    Point,
    /// The line is defined by a point and a direction; the second point is
    /// derived.
    Vector,
}

impl FromStr for LineMode {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "point" | "points" => Ok(Self::Point),
            "vector" => Ok(Self::Vector),
            other => Err(GeometryError::invalid_mode(other)),
        }
    }
}

/// An infinite line in 3D space.
///
/// Canonical storage is a base point and a direction vector; the second
/// defining point is derived on access, so the invariant
/// `point_b == point_a + vector` holds after every mutation by
/// construction.
///
/// # Example
///
/// ```
/// use geo_primitives::{Line, LineMode, Point};
///
/// let line = Line::new(
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 2.0, 3.0),
///     LineMode::Point,
/// );
///
/// assert_eq!(line.point_b(), Point::new(1.0, 2.0, 3.0));
/// assert_eq!(line.vector(), nalgebra::Vector3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    point_a: Point3<f64>,
    vector: Vector3<f64>,
}

impl Line {
    /// Create a line from two constraints and a construction mode.
    ///
    /// In [`LineMode::Point`] both constraints are positions and the
    /// direction is derived; in [`LineMode::Vector`] the second constraint
    /// is the direction and the second point is derived. Either constraint
    /// may be given as a named point or a raw coordinate vector.
    #[must_use]
    pub fn new(
        constraint_0: impl Into<Constraint>,
        constraint_1: impl Into<Constraint>,
        mode: LineMode,
    ) -> Self {
        let point_a = constraint_0.into().position();
        let c1 = constraint_1.into();
        let vector = match mode {
            LineMode::Point => c1.position() - point_a,
            LineMode::Vector => c1.coords(),
        };
        Self { point_a, vector }
    }

    /// Create a line through two points.
    #[must_use]
    pub fn from_points(point_a: impl Into<Point>, point_b: impl Into<Point>) -> Self {
        Self::new(point_a.into(), point_b.into(), LineMode::Point)
    }

    /// Create a line from a base point and a direction vector.
    #[must_use]
    pub fn from_point_vector(point_a: impl Into<Point>, vector: Vector3<f64>) -> Self {
        Self::new(point_a.into(), vector, LineMode::Vector)
    }

    /// Get the base point.
    #[must_use]
    pub fn point_a(&self) -> Point {
        Point::from(self.point_a)
    }

    /// Get the second defining point, `point_a + vector`.
    #[must_use]
    pub fn point_b(&self) -> Point {
        Point::from(self.point_a + self.vector)
    }

    /// Get the direction vector, `point_b - point_a`.
    #[inline]
    #[must_use]
    pub const fn vector(&self) -> Vector3<f64> {
        self.vector
    }

    /// Move the base point, keeping the second point fixed.
    ///
    /// The direction is recomputed from the unchanged `point_b`.
    pub fn set_point_a(&mut self, point_a: impl Into<Constraint>) {
        let point_b = self.point_a + self.vector;
        self.point_a = point_a.into().position();
        self.vector = point_b - self.point_a;
    }

    /// Move the second point, keeping the base point fixed.
    ///
    /// The direction is recomputed from the unchanged `point_a`.
    pub fn set_point_b(&mut self, point_b: impl Into<Constraint>) {
        self.vector = point_b.into().position() - self.point_a;
    }

    /// Replace the direction vector, keeping the base point fixed.
    ///
    /// The second point moves to `point_a + vector`.
    pub fn set_vector(&mut self, vector: Vector3<f64>) {
        self.vector = vector;
    }

    /// Get a point on the line by scaling the direction vector from the
    /// base point.
    ///
    /// `scale` is unbounded; see [`Edge::point_at`](crate::Edge::point_at)
    /// for the segment-restricted form.
    ///
    /// # Example
    ///
    /// ```
    /// use geo_primitives::{Line, Point};
    /// use nalgebra::Vector3;
    ///
    /// let line = Line::from_point_vector(Point::origin(), Vector3::new(1.0, 0.0, 0.0));
    /// assert_eq!(line.point(2.5), Point::new(2.5, 0.0, 0.0));
    /// ```
    #[must_use]
    pub fn point(&self, scale: f64) -> Point {
        Point::from(self.point_a + self.vector * scale)
    }

    /// Compute the minimum distance from a point to this line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the direction vector has
    /// zero length.
    pub fn distance_to(&self, point: impl Into<Point>) -> Result<f64> {
        ops::distance_point_line(
            point.into().position(),
            self.point_a,
            self.point_a + self.vector,
        )
    }

    /// Compute the intersection of this line with a plane.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the line is parallel to the
    /// plane or the plane is degenerate.
    pub fn intersection_with(&self, plane: &Plane) -> Result<Point> {
        ops::intersection_line_plane(
            self.point_a,
            self.point_a + self.vector,
            plane.point_a().position(),
            plane.point_b().position(),
            plane.point_c().position(),
        )
        .map(Point::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn point_mode_round_trip() {
        let p0 = Point::new(1.0, 2.0, 3.0);
        let p1 = Point::new(4.0, 6.0, 8.0);
        let line = Line::new(p0, p1, LineMode::Point);
        assert_eq!(line.point_a(), p0);
        assert_eq!(line.point_b(), p1);
        assert_eq!(line.vector(), Vector3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn vector_mode_round_trip() {
        let v = Vector3::new(0.5, -1.0, 2.0);
        let line = Line::new(Point::new(1.0, 1.0, 1.0), v, LineMode::Vector);
        assert_eq!(line.vector(), v);
        assert_eq!(line.point_b(), Point::new(1.5, 0.0, 3.0));
    }

    #[test]
    fn setting_point_a_keeps_point_b_fixed() {
        let mut line = Line::from_points(Point::origin(), Point::new(2.0, 0.0, 0.0));
        line.set_point_a(Point::new(1.0, 1.0, 0.0));
        assert_eq!(line.point_b(), Point::new(2.0, 0.0, 0.0));
        assert_eq!(line.vector(), Vector3::new(1.0, -1.0, 0.0));
    }

    #[test]
    fn setting_point_b_keeps_point_a_fixed() {
        let mut line = Line::from_points(Point::origin(), Point::new(2.0, 0.0, 0.0));
        line.set_point_b(Point::new(0.0, 3.0, 0.0));
        assert_eq!(line.point_a(), Point::origin());
        assert_eq!(line.vector(), Vector3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn setting_vector_moves_point_b() {
        let mut line = Line::from_points(Point::origin(), Point::new(2.0, 0.0, 0.0));
        line.set_vector(Vector3::new(0.0, 0.0, 4.0));
        assert_eq!(line.point_b(), Point::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn invariant_holds_after_setter_chain() {
        let mut line = Line::from_points(Point::new(1.0, 0.0, 0.0), Point::new(0.0, 1.0, 0.0));
        line.set_point_a(Point::new(-1.0, -1.0, -1.0));
        line.set_vector(Vector3::new(2.0, 2.0, 2.0));
        line.set_point_b(Point::new(5.0, 5.0, 5.0));
        let expected = line.point_a().position() + line.vector();
        assert_relative_eq!(line.point_b().position(), expected, epsilon = 1e-12);
    }

    #[test]
    fn raw_vector_accepted_as_point_constraint() {
        // A raw coordinate vector stands in for a point in point mode.
        let line = Line::new(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            LineMode::Point,
        );
        assert_eq!(line.vector(), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn unknown_mode_string_is_rejected() {
        let err = "diagonal".parse::<LineMode>();
        assert_eq!(err, Err(GeometryError::invalid_mode("diagonal")));
        // "normal" is a plane mode, not a line mode.
        assert!("normal".parse::<LineMode>().is_err());
    }

    #[test]
    fn mode_strings_are_case_insensitive() {
        assert_eq!("POINT".parse::<LineMode>(), Ok(LineMode::Point));
        assert_eq!("Vector".parse::<LineMode>(), Ok(LineMode::Vector));
    }

    #[test]
    fn distance_to_point_above_axis() {
        let line = Line::from_points(Point::origin(), Point::new(1.0, 0.0, 0.0));
        assert_eq!(line.distance_to(Point::new(0.0, 0.0, 1.0)), Ok(1.0));
    }
}
