//! Face type: a winding-canonicalized triangle.

use approx::abs_diff_eq;
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::uv::{UvPoint, UvTriangle};
use crate::{ops, Edge, GeometryError, Plane, Point, Result, Vertex};

/// Component-wise tolerance for treating two edge endpoints as the same
/// vertex in [`Face::from_edges`].
pub const SHARED_VERTEX_TOLERANCE: f64 = 1e-8;

/// A triangular face with counter-clockwise winding.
///
/// A face owns an ordered vertex triple, the three edges connecting them
/// (a→b, b→c, c→a), the two in-plane vectors spanned from `vertex_a`, and
/// the resulting normal. Construction canonicalizes the vertex order to be
/// counter-clockwise as seen from the outward side, determined by mapping
/// the vertices into the face's UV frame and comparing the projected edge
/// vectors. The outward side is the one facing the positive half-space
/// (+Z, tie-breaking toward +Y, then +X).
///
/// Vertex mutation rebuilds the derived edges, vectors, and normal
/// wholesale but does not re-canonicalize the winding; [`flip`](Face::flip)
/// reverses it explicitly.
///
/// # Example
///
/// ```
/// use geo_primitives::{Face, Vertex};
/// use nalgebra::Vector3;
///
/// // Given clockwise, the constructor swaps b and c.
/// let face = Face::new(
///     Vertex::new(0.0, 0.0, 0.0),
///     Vertex::new(0.0, 1.0, 0.0),
///     Vertex::new(1.0, 0.0, 0.0),
/// ).unwrap();
///
/// assert_eq!(face.vertex_b(), Vertex::new(1.0, 0.0, 0.0));
/// assert_eq!(face.vertex_c(), Vertex::new(0.0, 1.0, 0.0));
/// assert_eq!(face.normal(), Vector3::new(0.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    vertex_a: Vertex,
    vertex_b: Vertex,
    vertex_c: Vertex,
    edge_a: Edge,
    edge_b: Edge,
    edge_c: Edge,
    vector_u: Vector3<f64>,
    vector_v: Vector3<f64>,
    normal: Vector3<f64>,
}

impl Face {
    /// Create a face from three vertices in arbitrary order.
    ///
    /// The vertex order is canonicalized counter-clockwise; see the type
    /// docs.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the vertices are collinear
    /// or coincident.
    pub fn new(
        vertex_a: impl Into<Vertex>,
        vertex_b: impl Into<Vertex>,
        vertex_c: impl Into<Vertex>,
    ) -> Result<Self> {
        let (a, b, c) = canonicalize_winding(vertex_a.into(), vertex_b.into(), vertex_c.into())?;
        Ok(Self::assemble(a, b, c))
    }

    /// Create a face from two edges sharing one endpoint.
    ///
    /// Endpoints are matched component-wise within
    /// [`SHARED_VERTEX_TOLERANCE`]. The unshared endpoint of `edge_0`
    /// becomes the first input vertex; the endpoints of `edge_1` follow in
    /// that edge's own order. The combined triple is then canonicalized as
    /// in [`Face::new`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NoSharedVertex`] if the edges share no
    /// endpoint, or [`GeometryError::Degenerate`] if the resulting
    /// vertices are collinear.
    pub fn from_edges(edge_0: &Edge, edge_1: &Edge) -> Result<Self> {
        let a0 = edge_0.vertex_a();
        let b0 = edge_0.vertex_b();
        let shared =
            |p: Vertex| -> bool { is_shared(p, edge_1.vertex_a()) || is_shared(p, edge_1.vertex_b()) };
        let vertex_a = if shared(b0) {
            a0
        } else if shared(a0) {
            b0
        } else {
            return Err(GeometryError::no_shared_vertex(endpoint_gap(edge_0, edge_1)));
        };
        Self::new(vertex_a, edge_1.vertex_a(), edge_1.vertex_b())
    }

    /// Create a face from a standalone vertex and an edge.
    ///
    /// The vertex becomes the first input vertex; the edge's endpoints
    /// follow in the edge's own order. The triple is then canonicalized as
    /// in [`Face::new`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the vertex lies on the
    /// edge's carrier line.
    pub fn from_vertex_edge(vertex: impl Into<Vertex>, edge: &Edge) -> Result<Self> {
        Self::new(vertex.into(), edge.vertex_a(), edge.vertex_b())
    }

    /// Recompute all derived state from the current vertex order.
    fn assemble(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self {
            vertex_a: a,
            vertex_b: b,
            vertex_c: c,
            edge_a: Edge::new(a, b),
            edge_b: Edge::new(b, c),
            edge_c: Edge::new(c, a),
            vector_u: b.position() - a.position(),
            vector_v: c.position() - a.position(),
            normal: ops::calculate_normal(a.position(), b.position(), c.position()),
        }
    }

    fn rebuild(&mut self) {
        *self = Self::assemble(self.vertex_a, self.vertex_b, self.vertex_c);
    }

    /// Get the first vertex.
    #[inline]
    #[must_use]
    pub const fn vertex_a(&self) -> Vertex {
        self.vertex_a
    }

    /// Get the second vertex.
    #[inline]
    #[must_use]
    pub const fn vertex_b(&self) -> Vertex {
        self.vertex_b
    }

    /// Get the third vertex.
    #[inline]
    #[must_use]
    pub const fn vertex_c(&self) -> Vertex {
        self.vertex_c
    }

    /// Get the vertices as an array.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Vertex; 3] {
        [self.vertex_a, self.vertex_b, self.vertex_c]
    }

    /// Get the edge from `vertex_a` to `vertex_b`.
    #[inline]
    #[must_use]
    pub const fn edge_a(&self) -> Edge {
        self.edge_a
    }

    /// Get the edge from `vertex_b` to `vertex_c`.
    #[inline]
    #[must_use]
    pub const fn edge_b(&self) -> Edge {
        self.edge_b
    }

    /// Get the edge from `vertex_c` to `vertex_a`.
    #[inline]
    #[must_use]
    pub const fn edge_c(&self) -> Edge {
        self.edge_c
    }

    /// Get the in-plane vector from `vertex_a` to `vertex_b`.
    #[inline]
    #[must_use]
    pub const fn vector_u(&self) -> Vector3<f64> {
        self.vector_u
    }

    /// Get the in-plane vector from `vertex_a` to `vertex_c`.
    #[inline]
    #[must_use]
    pub const fn vector_v(&self) -> Vector3<f64> {
        self.vector_v
    }

    /// Get the face normal, `cross(vector_u, vector_v)`.
    ///
    /// Not normalized; the magnitude equals twice the face area.
    #[inline]
    #[must_use]
    pub const fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    /// Replace the first vertex, rebuilding edges, vectors, and normal.
    ///
    /// The winding is not re-canonicalized.
    pub fn set_vertex_a(&mut self, vertex: impl Into<Vertex>) {
        self.vertex_a = vertex.into();
        self.rebuild();
    }

    /// Replace the second vertex, rebuilding edges, vectors, and normal.
    ///
    /// The winding is not re-canonicalized.
    pub fn set_vertex_b(&mut self, vertex: impl Into<Vertex>) {
        self.vertex_b = vertex.into();
        self.rebuild();
    }

    /// Replace the third vertex, rebuilding edges, vectors, and normal.
    ///
    /// The winding is not re-canonicalized.
    pub fn set_vertex_c(&mut self, vertex: impl Into<Vertex>) {
        self.vertex_c = vertex.into();
        self.rebuild();
    }

    /// Reverse the winding by swapping `vertex_b` and `vertex_c`.
    ///
    /// Edges, vectors, and normal are rebuilt; the normal ends up negated.
    /// Flipping twice restores the original state.
    pub fn flip(&mut self) {
        core::mem::swap(&mut self.vertex_b, &mut self.vertex_c);
        self.rebuild();
    }

    /// Compute the area of the face.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.normal.norm() * 0.5
    }

    /// Compute the centroid of the face.
    #[must_use]
    pub fn centroid(&self) -> Point {
        let sum =
            self.vertex_a.coords() + self.vertex_b.coords() + self.vertex_c.coords();
        Point::from(nalgebra::Point3::from(sum / 3.0))
    }

    /// Get the infinite plane through this face.
    #[must_use]
    pub fn to_plane(&self) -> Plane {
        Plane::from_points(self.vertex_a, self.vertex_b, self.vertex_c)
    }

    /// Map a point into this face's UV frame.
    ///
    /// The frame has its origin at `vertex_a`, its U axis along
    /// `vector_u`, and the face normal as its plane normal.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the face is degenerate.
    pub fn project_to_uv(&self, point: impl Into<Point>) -> Result<UvPoint> {
        ops::map_xyz_to_uv(
            self.vertex_a.position(),
            self.vector_u,
            self.normal,
            point.into().position(),
            true,
        )
    }

    /// Get the face's vertices mapped into its own UV frame.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the face is degenerate.
    pub fn uv_triangle(&self) -> Result<UvTriangle> {
        Ok(UvTriangle::new(
            self.project_to_uv(self.vertex_a)?,
            self.project_to_uv(self.vertex_b)?,
            self.project_to_uv(self.vertex_c)?,
        ))
    }

    /// Test whether a point lies within the face, boundary inclusive.
    ///
    /// The point is projected into the face's UV frame first, so points
    /// off the face's plane are tested against their in-plane projection.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the face is degenerate.
    pub fn contains(&self, point: impl Into<Point>) -> Result<bool> {
        let uv = self.project_to_uv(point.into())?;
        Ok(ops::point_in_triangle(&self.uv_triangle()?, uv))
    }
}

/// Reorder a vertex triple counter-clockwise as seen from the outward side.
///
/// The vertices are mapped into the UV frame spanned by the first edge and
/// the outward-oriented normal; when the projected edge vectors turn
/// clockwise, the second and third vertices are swapped.
fn canonicalize_winding(a: Vertex, b: Vertex, c: Vertex) -> Result<(Vertex, Vertex, Vertex)> {
    let u = b.position() - a.position();
    let v = c.position() - a.position();
    let normal = outward(u.cross(&v));

    let uv_a = ops::map_xyz_to_uv(a.position(), u, normal, a.position(), true)?;
    let uv_b = ops::map_xyz_to_uv(a.position(), u, normal, b.position(), true)?;
    let uv_c = ops::map_xyz_to_uv(a.position(), u, normal, c.position(), true)?;

    let ab = uv_b.coords() - uv_a.coords();
    let ac = uv_c.coords() - uv_a.coords();
    if ab.perp(&ac) < 0.0 {
        Ok((a, c, b))
    } else {
        Ok((a, b, c))
    }
}

/// Orient a normal toward the positive half-space: +Z, tie-breaking toward
/// +Y, then +X.
fn outward(normal: Vector3<f64>) -> Vector3<f64> {
    let keep = if normal.z != 0.0 {
        normal.z > 0.0
    } else if normal.y != 0.0 {
        normal.y > 0.0
    } else {
        normal.x >= 0.0
    };
    if keep { normal } else { -normal }
}

fn is_shared(p: Vertex, q: Vertex) -> bool {
    abs_diff_eq!(p.position(), q.position(), epsilon = SHARED_VERTEX_TOLERANCE)
}

/// Smallest distance between any endpoint of one edge and any endpoint of
/// the other. Reported in the no-shared-vertex error.
fn endpoint_gap(edge_0: &Edge, edge_1: &Edge) -> f64 {
    let pairs = [
        (edge_0.vertex_a(), edge_1.vertex_a()),
        (edge_0.vertex_a(), edge_1.vertex_b()),
        (edge_0.vertex_b(), edge_1.vertex_a()),
        (edge_0.vertex_b(), edge_1.vertex_b()),
    ];
    pairs
        .iter()
        .map(|(p, q)| ops::distance_point_point(p.position(), q.position()))
        .fold(f64::INFINITY, f64::min)
}
