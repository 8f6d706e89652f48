//! Constraint inputs for primitive constructors.
//!
//! Line and plane constructors accept their defining data either as named
//! points or as raw coordinate vectors. [`Constraint`] is the closed set of
//! legal input shapes, so an unsupported shape is rejected by the compiler
//! rather than by a runtime type check.

use nalgebra::{Point3, Vector3};

use crate::Point;

/// A constructor input: either a named point or a raw coordinate vector.
///
/// Both shapes reduce to the same coordinate vector through [`coords`];
/// the distinction only records how the caller phrased the input.
///
/// [`coords`]: Constraint::coords
///
/// # Example
///
/// ```
/// use geo_primitives::{Constraint, Point};
/// use nalgebra::Vector3;
///
/// let from_point: Constraint = Point::new(1.0, 2.0, 3.0).into();
/// let from_vector: Constraint = Vector3::new(1.0, 2.0, 3.0).into();
///
/// assert_eq!(from_point.coords(), from_vector.coords());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// A named point in 3D space.
    Point(Point),
    /// A raw coordinate vector.
    Vector(Vector3<f64>),
}

impl Constraint {
    /// Extract the coordinate vector, regardless of input shape.
    #[must_use]
    pub fn coords(&self) -> Vector3<f64> {
        match self {
            Self::Point(p) => p.coords(),
            Self::Vector(v) => *v,
        }
    }

    /// Interpret the constraint as a position in space.
    #[must_use]
    pub fn position(&self) -> Point3<f64> {
        Point3::from(self.coords())
    }
}

impl From<Point> for Constraint {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<Point3<f64>> for Constraint {
    fn from(position: Point3<f64>) -> Self {
        Self::Point(Point::from(position))
    }
}

impl From<Vector3<f64>> for Constraint {
    fn from(vector: Vector3<f64>) -> Self {
        Self::Vector(vector)
    }
}

impl From<[f64; 3]> for Constraint {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::Vector(Vector3::new(x, y, z))
    }
}
