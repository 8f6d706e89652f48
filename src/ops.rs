//! Stateless vector-algebra utilities.
//!
//! Free functions over raw coordinate values. The primitive and mesh types
//! are built on top of these; they are also part of the public API for
//! callers that work with bare nalgebra values.
//!
//! Degenerate inputs (zero-length direction vectors, zero-area planes,
//! parallel line/plane pairs) are reported as explicit
//! [`GeometryError::Degenerate`](crate::GeometryError::Degenerate) errors
//! rather than propagating as infinities or NaN.

use nalgebra::{Point2, Point3, Vector3};

use crate::uv::{UvPoint, UvTriangle};
use crate::{GeometryError, Result};

/// Compute the normal of a plane defined by three points.
///
/// The direction follows the right-hand rule; the magnitude equals twice
/// the area of the triangle spanned by the points. Collinear points yield
/// the zero vector.
///
/// # Example
///
/// ```
/// use geo_primitives::ops::calculate_normal;
/// use nalgebra::Point3;
///
/// let n = calculate_normal(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// assert_eq!(n, nalgebra::Vector3::new(0.0, 0.0, 1.0));
/// ```
#[inline]
#[must_use]
pub fn calculate_normal(p0: Point3<f64>, p1: Point3<f64>, p2: Point3<f64>) -> Vector3<f64> {
    (p1 - p0).cross(&(p2 - p0))
}

/// Compute the distance between two points.
///
/// # Example
///
/// ```
/// use geo_primitives::ops::distance_point_point;
/// use nalgebra::Point3;
///
/// let d = distance_point_point(Point3::origin(), Point3::new(3.0, 4.0, 0.0));
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn distance_point_point(p0: Point3<f64>, p1: Point3<f64>) -> f64 {
    (p1 - p0).norm()
}

/// Compute the minimum distance between a point and an infinite line
/// through `line_a` and `line_b`.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`](crate::GeometryError::Degenerate)
/// if `line_a` and `line_b` coincide.
///
/// # Example
///
/// ```
/// use geo_primitives::ops::distance_point_line;
/// use nalgebra::Point3;
///
/// let d = distance_point_line(
///     Point3::new(0.0, 0.0, 1.0),
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
/// ).unwrap();
/// assert!((d - 1.0).abs() < 1e-12);
/// ```
pub fn distance_point_line(
    point: Point3<f64>,
    line_a: Point3<f64>,
    line_b: Point3<f64>,
) -> Result<f64> {
    let direction = line_b - line_a;
    let len_sq = direction.norm_squared();
    if len_sq <= f64::EPSILON {
        return Err(GeometryError::degenerate(
            "line endpoints coincide, direction has zero length",
        ));
    }
    Ok(direction.cross(&(point - line_a)).norm() / len_sq.sqrt())
}

/// Compute the minimum distance between a point and a plane defined by
/// three points.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`](crate::GeometryError::Degenerate)
/// if the three points are collinear (zero-area plane).
pub fn distance_point_plane(
    point: Point3<f64>,
    plane_a: Point3<f64>,
    plane_b: Point3<f64>,
    plane_c: Point3<f64>,
) -> Result<f64> {
    let normal = calculate_normal(plane_a, plane_b, plane_c);
    let len_sq = normal.norm_squared();
    if len_sq <= f64::EPSILON {
        return Err(GeometryError::degenerate(
            "plane points are collinear, normal has zero length",
        ));
    }
    Ok(normal.dot(&(point - plane_a)).abs() / len_sq.sqrt())
}

/// Compute the intersection point of an infinite line and a plane.
///
/// The line passes through `line_a` and `line_b`; the plane is defined by
/// three points.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`](crate::GeometryError::Degenerate)
/// if the line is parallel to the plane (including the line lying in the
/// plane), or if the plane itself is degenerate.
///
/// # Example
///
/// ```
/// use geo_primitives::ops::intersection_line_plane;
/// use nalgebra::Point3;
///
/// // Vertical line through the XY plane.
/// let p = intersection_line_plane(
///     Point3::new(0.5, 0.5, -1.0),
///     Point3::new(0.5, 0.5, 1.0),
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ).unwrap();
/// assert!((p - Point3::new(0.5, 0.5, 0.0)).norm() < 1e-12);
/// ```
pub fn intersection_line_plane(
    line_a: Point3<f64>,
    line_b: Point3<f64>,
    plane_a: Point3<f64>,
    plane_b: Point3<f64>,
    plane_c: Point3<f64>,
) -> Result<Point3<f64>> {
    let direction = line_b - line_a;
    let normal = calculate_normal(plane_a, plane_b, plane_c);
    if normal.norm_squared() <= f64::EPSILON {
        return Err(GeometryError::degenerate(
            "plane points are collinear, normal has zero length",
        ));
    }
    let den = normal.dot(&direction);
    if den.abs() <= f64::EPSILON {
        return Err(GeometryError::degenerate("line is parallel to plane"));
    }
    let num = normal.dot(&(plane_a - line_a));
    Ok(line_a + direction * (num / den))
}

/// Project `vector_0` onto `vector_1`.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`](crate::GeometryError::Degenerate)
/// if `vector_1` is the zero vector.
///
/// # Example
///
/// ```
/// use geo_primitives::ops::project_vector;
/// use nalgebra::Vector3;
///
/// let p = project_vector(
///     Vector3::new(1.0, 1.0, 0.0),
///     Vector3::new(2.0, 0.0, 0.0),
/// ).unwrap();
/// assert_eq!(p, Vector3::new(1.0, 0.0, 0.0));
/// ```
pub fn project_vector(vector_0: Vector3<f64>, vector_1: Vector3<f64>) -> Result<Vector3<f64>> {
    let den = vector_1.dot(&vector_1);
    if den <= f64::EPSILON {
        return Err(GeometryError::degenerate(
            "cannot project onto the zero vector",
        ));
    }
    Ok(vector_1 * (vector_1.dot(&vector_0) / den))
}

/// Map a point in 3D space to local UV coordinates.
///
/// The UV frame lies in the plane through `origin` with the given `normal`;
/// `u_axis` defines the U direction and the V axis is derived as
/// `cross(u_axis, -normal)`. With `normalize` set, both axes are scaled to
/// unit length before projecting, so UV coordinates are in the same units
/// as the input space.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`](crate::GeometryError::Degenerate)
/// if `normalize` is set and either axis has zero length (zero `u_axis`,
/// zero `normal`, or `u_axis` parallel to `normal`).
///
/// # Example
///
/// ```
/// use geo_primitives::ops::map_xyz_to_uv;
/// use nalgebra::{Point3, Vector3};
///
/// let uv = map_xyz_to_uv(
///     Point3::origin(),
///     Vector3::new(2.0, 0.0, 0.0),
///     Vector3::new(0.0, 0.0, 1.0),
///     Point3::new(3.0, 4.0, 0.0),
///     true,
/// ).unwrap();
/// assert!((uv.u() - 3.0).abs() < 1e-12);
/// assert!((uv.v() - 4.0).abs() < 1e-12);
/// ```
pub fn map_xyz_to_uv(
    origin: Point3<f64>,
    u_axis: Vector3<f64>,
    normal: Vector3<f64>,
    point: Point3<f64>,
    normalize: bool,
) -> Result<UvPoint> {
    let translated = point - origin;
    let mut u_axis = u_axis;
    let mut v_axis = u_axis.cross(&(-normal));
    if normalize {
        let u_len_sq = u_axis.norm_squared();
        if u_len_sq <= f64::EPSILON {
            return Err(GeometryError::degenerate("U axis has zero length"));
        }
        let v_len_sq = v_axis.norm_squared();
        if v_len_sq <= f64::EPSILON {
            return Err(GeometryError::degenerate("V axis has zero length"));
        }
        u_axis /= u_len_sq.sqrt();
        v_axis /= v_len_sq.sqrt();
    }
    Ok(UvPoint::new(u_axis.dot(&translated), v_axis.dot(&translated)))
}

/// Test whether a UV point lies within a triangle, boundary inclusive.
///
/// For each edge of the triangle, the query point must lie on the same side
/// as the opposite vertex. Points exactly on an edge or vertex count as
/// inside.
///
/// # Example
///
/// ```
/// use geo_primitives::ops::point_in_triangle;
/// use geo_primitives::{UvPoint, UvTriangle};
///
/// let tri = UvTriangle::new(
///     UvPoint::new(0.0, 0.0),
///     UvPoint::new(1.0, 0.0),
///     UvPoint::new(0.0, 1.0),
/// );
///
/// assert!(point_in_triangle(&tri, UvPoint::new(0.25, 0.25)));
/// assert!(point_in_triangle(&tri, UvPoint::new(0.0, 0.0)));
/// assert!(!point_in_triangle(&tri, UvPoint::new(2.0, 2.0)));
/// ```
#[must_use]
pub fn point_in_triangle(triangle: &UvTriangle, point: UvPoint) -> bool {
    let p = point.position();
    let [a, b, c] = triangle.vertices();
    same_side(p, a.position(), b.position(), c.position())
        && same_side(p, b.position(), c.position(), a.position())
        && same_side(p, c.position(), a.position(), b.position())
}

/// True when `p0` and `p1` lie on the same side of the segment from
/// `seg_start` to `seg_end`. A point exactly on the segment's carrier line
/// counts as being on both sides.
fn same_side(
    p0: Point2<f64>,
    p1: Point2<f64>,
    seg_start: Point2<f64>,
    seg_end: Point2<f64>,
) -> bool {
    let direction = seg_end - seg_start;
    direction.perp(&(p0 - seg_start)) * direction.perp(&(p1 - seg_start)) >= 0.0
}
