//! `Mesh` struct and implementations of the `CSGOps` trait for `Mesh`

use crate::errors::ValidationError;
use crate::float_types::{CsgConfig, Real};
use crate::mesh::{bsp::Node, polygon::Polygon, vertex::Vertex};
use crate::model::IndexedModel;
use crate::traits::CSGOps;
use log::{debug, warn};
use nalgebra::{Matrix4, Point3};
use std::fmt::Debug;
use std::hash::Hash;

pub mod bsp;
pub mod plane;
pub mod polygon;
pub mod shapes;
pub mod vertex;

/// A solid described by a soup of outward-wound polygons.
#[derive(Clone, Debug)]
pub struct Mesh<S: Clone + Send + Sync + Debug> {
    /// 3D polygons bounding the solid
    pub polygons: Vec<Polygon<S>>,

    /// Settings used when this mesh is the left operand of a boolean operation
    pub config: CsgConfig,
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Build a Mesh from an existing polygon list
    pub fn from_polygons(polygons: &[Polygon<S>]) -> Self {
        let mut mesh = Mesh::new();
        mesh.polygons = polygons.to_vec();
        mesh
    }

    /// Build a Mesh from an indexed model (one polygon per triangle).
    pub fn from_model(model: &IndexedModel<S>) -> Result<Self, ValidationError> {
        Ok(Mesh {
            polygons: model.to_polygons()?,
            config: CsgConfig::default(),
        })
    }

    /// Fan the polygons into per-material index buffers.
    pub fn to_model(&self) -> IndexedModel<S>
    where
        S: Eq + Hash,
    {
        IndexedModel::from_polygons(&self.polygons)
    }

    /// Replace the boolean-operation settings.
    pub fn with_config(mut self, config: CsgConfig) -> Self {
        self.config = config;
        self
    }

    /// Helper to collect all vertices from the mesh.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.polygons
            .iter()
            .flat_map(|p| p.vertices.iter().copied())
            .collect()
    }

    /// Triangulate each polygon in the Mesh returning a Mesh containing triangles
    pub fn triangulate(&self) -> Mesh<S> {
        let triangles = self
            .polygons
            .iter()
            .flat_map(|poly| {
                poly.triangulate().into_iter().map(move |triangle| {
                    Polygon::from_split(triangle.to_vec(), poly.metadata.clone())
                })
            })
            .collect::<Vec<_>>();

        Mesh {
            polygons: triangles,
            config: self.config,
        }
    }

    /// Enclosed volume as the sum of signed tetrahedra `(origin, a, b, c)` over
    /// the fan triangulation. Positive for a closed, outward-wound solid.
    pub fn volume(&self) -> Real {
        self.polygons
            .iter()
            .flat_map(|poly| poly.triangulate())
            .map(|[a, b, c]| a.pos.coords.dot(&b.pos.coords.cross(&c.pos.coords)))
            .sum::<Real>()
            / 6.0
    }

    /// Component-wise `(min, max)` over all vertices, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3<Real>, Point3<Real>)> {
        let mut positions = self.polygons.iter().flat_map(|p| p.vertices.iter().map(|v| v.pos));
        let first = positions.next()?;
        Some(positions.fold((first, first), |(min, max), p| {
            (
                Point3::from(min.coords.inf(&p.coords)),
                Point3::from(max.coords.sup(&p.coords)),
            )
        }))
    }

    fn bsp(&self) -> Node<S> {
        Node::from_polygons(&self.polygons, self.config.epsilon)
    }

    fn combine(
        &self,
        other: &Mesh<S>,
        operation: &str,
        op: fn(&Node<S>, &Node<S>, Real) -> Node<S>,
    ) -> Mesh<S> {
        debug!(
            "{operation}: {} x {} polygons, epsilon {}",
            self.polygons.len(),
            other.polygons.len(),
            self.config.epsilon
        );
        let result = op(&self.bsp(), &other.bsp(), self.config.epsilon);

        Mesh {
            polygons: result.into_polygons(),
            config: self.config,
        }
    }
}

impl<S: Clone + Send + Sync + Debug> CSGOps for Mesh<S> {
    /// Returns a new empty Mesh
    fn new() -> Self {
        Mesh {
            polygons: Vec::new(),
            config: CsgConfig::default(),
        }
    }

    /// Return a new Mesh representing union of the two Meshes.
    ///
    /// ```text
    /// let c = a.union(b);
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   a   |            |   c   |
    ///     |    +--+----+   =   |       +----+
    ///     +----+--+    |       +----+       |
    ///          |   b   |            |   c   |
    ///          |       |            |       |
    ///          +-------+            +-------+
    /// ```
    fn union(&self, other: &Mesh<S>) -> Mesh<S> {
        self.combine(other, "union", Node::union)
    }

    /// Return a new Mesh representing the space in `self` but not in `other`.
    ///
    /// ```text
    /// let c = a.difference(b);
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   a   |            |   c   |
    ///     |    +--+----+   =   |    +--+
    ///     +----+--+    |       +----+
    ///          |   b   |
    ///          |       |
    ///          +-------+
    /// ```
    fn difference(&self, other: &Mesh<S>) -> Mesh<S> {
        self.combine(other, "subtract", Node::subtract)
    }

    /// Return a new Mesh representing the space in both `self` and `other`.
    ///
    /// ```text
    /// let c = a.intersection(b);
    ///     +-------+
    ///     |       |
    ///     |   a   |
    ///     |    +--+----+   =   +--+
    ///     +----+--+    |       +--+
    ///          |   b   |
    ///          |       |
    ///          +-------+
    /// ```
    fn intersection(&self, other: &Mesh<S>) -> Mesh<S> {
        self.combine(other, "intersect", Node::intersect)
    }

    /// Apply an affine transform to positions; normals use the inverse transpose.
    fn transform(&self, mat: &Matrix4<Real>) -> Mesh<S> {
        let normal_matrix = mat.try_inverse().map(|inv| inv.transpose());
        if normal_matrix.is_none() {
            warn!("transform: matrix is not invertible, vertex normals left unchanged");
        }

        let mut mesh = self.clone();
        for poly in &mut mesh.polygons {
            for vert in &mut poly.vertices {
                vert.transform(mat, normal_matrix.as_ref());
            }

            // keep the plane consistent with the new vertex positions
            if poly.vertices.len() >= 3 {
                *poly = Polygon::from_split(
                    std::mem::take(&mut poly.vertices),
                    poly.metadata.take(),
                );
            }
        }

        mesh
    }

    /// Swap inside and outside by flipping every polygon.
    fn inverse(&self) -> Mesh<S> {
        let mut mesh = self.clone();
        mesh.polygons.iter_mut().for_each(|p| p.flip());
        mesh
    }
}
