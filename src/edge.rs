//! Edge type: a bounded segment between two vertices.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::validate::check_range;
use crate::{Line, Result, Vertex};

/// A finite segment between two vertices.
///
/// Unlike [`Line`], an edge is bounded: interpolation is only defined for
/// parameters in `[0, 1]`.
///
/// # Example
///
/// ```
/// use geo_primitives::{Edge, Vertex};
///
/// let edge = Edge::new(Vertex::new(0.0, 0.0, 0.0), Vertex::new(2.0, 0.0, 0.0));
///
/// assert_eq!(edge.point_at(0.5).unwrap(), Vertex::new(1.0, 0.0, 0.0));
/// assert!(edge.point_at(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    vertex_a: Vertex,
    vertex_b: Vertex,
}

impl Edge {
    /// Create an edge between two vertices.
    #[must_use]
    pub fn new(vertex_a: impl Into<Vertex>, vertex_b: impl Into<Vertex>) -> Self {
        Self {
            vertex_a: vertex_a.into(),
            vertex_b: vertex_b.into(),
        }
    }

    /// Get the start vertex.
    #[inline]
    #[must_use]
    pub const fn vertex_a(&self) -> Vertex {
        self.vertex_a
    }

    /// Get the end vertex.
    #[inline]
    #[must_use]
    pub const fn vertex_b(&self) -> Vertex {
        self.vertex_b
    }

    /// Replace the start vertex.
    pub fn set_vertex_a(&mut self, vertex_a: impl Into<Vertex>) {
        self.vertex_a = vertex_a.into();
    }

    /// Replace the end vertex.
    pub fn set_vertex_b(&mut self, vertex_b: impl Into<Vertex>) {
        self.vertex_b = vertex_b.into();
    }

    /// Interpolate along the edge.
    ///
    /// `t = 0` yields the start vertex, `t = 1` the end vertex.
    ///
    /// # Errors
    ///
    /// Returns
    /// [`GeometryError::ParameterOutOfRange`](crate::GeometryError::ParameterOutOfRange)
    /// if `t` is outside `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Result<Vertex> {
        check_range(0.0, 1.0, t)?;
        Ok(Vertex::from(
            self.vertex_a.position() + self.vector() * t,
        ))
    }

    /// Get the direction vector from start to end.
    #[inline]
    #[must_use]
    pub fn vector(&self) -> Vector3<f64> {
        self.vertex_b.position() - self.vertex_a.position()
    }

    /// Get the length of the edge.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Get the midpoint of the edge.
    #[must_use]
    pub fn midpoint(&self) -> Vertex {
        Vertex::from(self.vertex_a.position() + self.vector() * 0.5)
    }

    /// Create a new edge with start and end swapped.
    #[inline]
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            vertex_a: self.vertex_b,
            vertex_b: self.vertex_a,
        }
    }

    /// Get the infinite line through this edge.
    #[must_use]
    pub fn to_line(&self) -> Line {
        Line::from_points(self.vertex_a, self.vertex_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn unit_edge() -> Edge {
        Edge::new(Vertex::new(0.0, 0.0, 0.0), Vertex::new(1.0, 0.0, 0.0))
    }

    #[test]
    fn endpoints_at_parameter_bounds() {
        let edge = unit_edge();
        assert_eq!(edge.point_at(0.0), Ok(edge.vertex_a()));
        assert_eq!(edge.point_at(1.0), Ok(edge.vertex_b()));
    }

    #[test]
    fn midpoint_at_half_parameter() {
        let edge = Edge::new(Vertex::new(0.0, 0.0, 0.0), Vertex::new(2.0, 4.0, 6.0));
        let mid = edge.point_at(0.5);
        assert_eq!(mid, Ok(Vertex::new(1.0, 2.0, 3.0)));
        assert_eq!(edge.midpoint(), Vertex::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn out_of_range_parameter_is_rejected() {
        let edge = unit_edge();
        let err = edge.point_at(1.5);
        assert!(matches!(err, Err(e) if e.is_out_of_range()));
        assert!(edge.point_at(-0.1).is_err());
    }

    #[test]
    fn length_and_vector() {
        let edge = Edge::new(Vertex::new(0.0, 0.0, 0.0), Vertex::new(3.0, 4.0, 0.0));
        assert_relative_eq!(edge.length(), 5.0, epsilon = 1e-12);
        assert_eq!(edge.vector(), Vector3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let edge = unit_edge();
        let rev = edge.reversed();
        assert_eq!(rev.vertex_a(), edge.vertex_b());
        assert_eq!(rev.vertex_b(), edge.vertex_a());
        assert_eq!(rev.reversed(), edge);
    }

    #[test]
    fn vertex_setters_replace_endpoints() {
        let mut edge = unit_edge();
        edge.set_vertex_a(Vertex::new(0.0, 1.0, 0.0));
        edge.set_vertex_b(Point3::new(0.0, 2.0, 0.0));
        assert_eq!(edge.vector(), Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn line_through_edge_extends_past_endpoints() {
        let edge = unit_edge();
        let line = edge.to_line();
        assert_eq!(line.point(2.0), Vertex::new(2.0, 0.0, 0.0));
    }
}
