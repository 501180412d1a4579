//! Planar vertex loops carrying a material tag.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::plane::Plane;
use crate::mesh::vertex::Vertex;
use std::fmt::Debug;

/// A planar polygon. Vertex order defines the winding and therefore the outward
/// side; `plane` is derived from the first three vertices and kept in sync by
/// [`Polygon::flip`].
///
/// `metadata` is the material / group tag. It is carried through every split and
/// used only to group the output; it never influences geometry.
#[derive(Debug, Clone)]
pub struct Polygon<S: Clone> {
    pub vertices: Vec<Vertex>,
    pub plane: Plane,
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Polygon<S> {
    /// Create a polygon from a vertex loop.
    ///
    /// Fails if there are fewer than three vertices, any position is not finite,
    /// or the first three vertices do not span a plane.
    ///
    /// ```rust
    /// # use nalgebra::{Point3, Vector3};
    /// # use csgbsp::mesh::{polygon::Polygon, vertex::Vertex};
    /// let tri: Polygon<()> = Polygon::new(
    ///     vec![
    ///         Vertex::new(Point3::origin(), Vector3::z()),
    ///         Vertex::new(Point3::new(1.0, 0.0, 0.0), Vector3::z()),
    ///         Vertex::new(Point3::new(0.0, 1.0, 0.0), Vector3::z()),
    ///     ],
    ///     None,
    /// )
    /// .unwrap();
    /// assert_eq!(tri.plane.normal(), Vector3::z());
    /// ```
    pub fn new(vertices: Vec<Vertex>, metadata: Option<S>) -> Result<Self, ValidationError> {
        if vertices.len() < 3 {
            return Err(ValidationError::TooFewPoints {
                count: vertices.len(),
            });
        }
        if let Some(bad) = vertices
            .iter()
            .find(|v| v.pos.coords.iter().any(|c| !c.is_finite()))
        {
            return Err(ValidationError::InvalidCoordinate(bad.pos));
        }

        let polygon = Self::from_split(vertices, metadata);
        let magnitude = polygon.plane.normal.norm();
        if !magnitude.is_finite() || magnitude <= Real::EPSILON {
            return Err(ValidationError::DegeneratePolygon(polygon.vertices[0].pos));
        }
        Ok(polygon)
    }

    /// Build a polygon without validation. The caller guarantees at least three
    /// vertices; used for the pieces produced by plane splits.
    pub(crate) fn from_split(vertices: Vec<Vertex>, metadata: Option<S>) -> Self {
        let plane = Plane::from_points(&vertices[0].pos, &vertices[1].pos, &vertices[2].pos);
        Polygon {
            vertices,
            plane,
            metadata,
        }
    }

    /// Reverse winding order, flip vertex normals, and flip the plane.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.vertices.iter_mut().for_each(|v| v.flip());
        self.plane.flip();
    }

    /// Fan-triangulate from vertex 0: triangles `(0, j-1, j)` for `j` in `2..n`.
    pub fn triangulate(&self) -> Vec<[Vertex; 3]> {
        (2..self.vertices.len())
            .map(|j| [self.vertices[0], self.vertices[j - 1], self.vertices[j]])
            .collect()
    }
}
