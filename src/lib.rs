//! 3D geometric primitives and mesh elements for geometric modeling.
//!
//! This crate provides a small set of single-element geometry types with
//! local consistency guarantees:
//!
//! - [`Point`] / [`Vertex`] - A point in 3D space
//! - [`Line`] - An infinite line with `point`/`vector` construction modes
//! - [`Plane`] - A plane with `points`/`vector`/`normal` construction modes
//! - [`Edge`] - A bounded segment with `[0, 1]` parametrization
//! - [`Face`] - A triangle with counter-clockwise winding canonicalization
//! - [`UvPoint`] / [`UvTriangle`] - 2D types for plane-local UV frames
//!
//! The [`ops`] module holds the underlying vector-calculus utilities
//! (distances, projection, line/plane intersection, UV mapping,
//! point-in-triangle tests) as free functions over raw nalgebra values.
//!
//! # Derived-state invariants
//!
//! Each primitive stores one canonical representation and derives the rest,
//! so its defining invariant cannot be observed broken:
//!
//! - `Line`: `point_b == point_a + vector` after any sequence of setters.
//! - `Plane`: `normal == cross(vector_u, vector_v)` after any mutation.
//! - `Face`: vertex order is counter-clockwise after construction; every
//!   mutation rebuilds the dependent edges, vectors, and normal wholesale.
//!
//! Failed validation (dimension mismatch, out-of-range parameter, unknown
//! mode string, edges without a shared endpoint, degenerate geometry)
//! surfaces as a [`GeometryError`] before any state is touched.
//!
//! # Coordinate System
//!
//! Right-handed, `f64` throughout, unit-agnostic. Face winding is
//! counter-clockwise when viewed from the outward side; normals follow the
//! right-hand rule.
//!
//! # Example
//!
//! ```
//! use geo_primitives::{Face, Line, LineMode, Vertex};
//!
//! let face = Face::new(
//!     Vertex::new(0.0, 0.0, 0.0),
//!     Vertex::new(1.0, 0.0, 0.0),
//!     Vertex::new(0.0, 1.0, 0.0),
//! )?;
//! assert_eq!(face.normal(), nalgebra::Vector3::new(0.0, 0.0, 1.0));
//!
//! let mode: LineMode = "point".parse()?;
//! let line = Line::new(face.vertex_a(), face.vertex_b(), mode);
//! assert_eq!(line.point_b(), face.vertex_b());
//! # Ok::<(), geo_primitives::GeometryError>(())
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for all types
//!
//! # Concurrency
//!
//! All types are plain value aggregates with no interior mutability or
//! shared state; treat each instance as exclusively owned by one thread at
//! a time.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::return_self_not_must_use,
    clippy::float_cmp,
    clippy::suboptimal_flops
)]

mod constraint;
mod edge;
mod error;
mod face;
mod line;
pub mod ops;
mod plane;
mod point;
mod uv;
pub mod validate;

// Re-export core types
pub use constraint::Constraint;
pub use edge::Edge;
pub use error::GeometryError;
pub use face::{Face, SHARED_VERTEX_TOLERANCE};
pub use line::{Line, LineMode};
pub use plane::{Plane, PlaneMode};
pub use point::{Point, Vertex};
pub use uv::{UvPoint, UvTriangle};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

/// Result type for geometric operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
