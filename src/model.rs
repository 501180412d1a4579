//! Indexed triangle models: the format host engines hand in and get back.
//!
//! An [`IndexedModel`] is a shared vertex buffer plus one triangle index list
//! per material. Going in, every triangle becomes one [`Polygon`] tagged with
//! its submesh material. Coming out, polygons are grouped by material and
//! fanned into triangles with unshared vertices.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use hashbrown::HashMap;
use nalgebra::Matrix4;
use std::fmt::Debug;
use std::hash::Hash;

/// One triangle list drawn with one material.
#[derive(Debug, Clone, PartialEq)]
pub struct Submesh<S> {
    /// Indices into [`IndexedModel::vertices`], three per triangle
    pub indices: Vec<usize>,
    pub material: Option<S>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexedModel<S> {
    pub vertices: Vec<Vertex>,
    pub submeshes: Vec<Submesh<S>>,
}

impl<S: Clone + Send + Sync + Debug> IndexedModel<S> {
    /// Create a model from a vertex buffer and one index list per material.
    ///
    /// Checks that the lists pair up, that every list holds whole triangles
    /// and that every index is in range.
    pub fn new(
        vertices: Vec<Vertex>,
        indices: Vec<Vec<usize>>,
        materials: Vec<Option<S>>,
    ) -> Result<Self, ValidationError> {
        if indices.len() != materials.len() {
            return Err(ValidationError::MaterialCountMismatch {
                submeshes: indices.len(),
                materials: materials.len(),
            });
        }

        let model = IndexedModel {
            vertices,
            submeshes: indices
                .into_iter()
                .zip(materials)
                .map(|(indices, material)| Submesh { indices, material })
                .collect(),
        };
        model.validate()?;
        Ok(model)
    }

    /// Check index lists against the vertex buffer.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (submesh_index, submesh) in self.submeshes.iter().enumerate() {
            if submesh.indices.len() % 3 != 0 {
                return Err(ValidationError::IndexCountNotTriangles {
                    submesh: submesh_index,
                    count: submesh.indices.len(),
                });
            }
            if let Some(&index) = submesh.indices.iter().find(|&&i| i >= self.vertices.len()) {
                return Err(ValidationError::IndexOutOfRange {
                    index,
                    vertex_count: self.vertices.len(),
                });
            }
        }
        Ok(())
    }

    /// Number of triangles over all submeshes.
    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(|s| s.indices.len() / 3).sum()
    }

    /// Bake a host transform into the vertex buffer.
    ///
    /// Positions go through `mat`; normals through its inverse transpose.
    pub fn transform(&self, mat: &Matrix4<Real>) -> Result<Self, ValidationError> {
        let normal_matrix = mat
            .try_inverse()
            .ok_or(ValidationError::NonInvertibleTransform)?
            .transpose();

        let mut model = self.clone();
        model
            .vertices
            .iter_mut()
            .for_each(|v| v.transform(mat, Some(&normal_matrix)));
        Ok(model)
    }

    /// Turn every triangle into a polygon carrying its submesh material.
    pub fn to_polygons(&self) -> Result<Vec<Polygon<S>>, ValidationError> {
        self.validate()?;

        let mut polygons = Vec::with_capacity(self.triangle_count());
        for submesh in &self.submeshes {
            for tri in submesh.indices.chunks_exact(3) {
                let vertices = tri.iter().map(|&i| self.vertices[i]).collect();
                polygons.push(Polygon::new(vertices, submesh.material.clone())?);
            }
        }
        Ok(polygons)
    }

    /// Group polygons by material (first-seen order) and fan each one into
    /// triangles `(0, j-1, j)`. Every emitted triangle gets its own three vertices.
    pub fn from_polygons(polygons: &[Polygon<S>]) -> Self
    where
        S: Eq + Hash,
    {
        let mut vertices = Vec::new();
        let mut submeshes: Vec<Submesh<S>> = Vec::new();
        let mut by_material: HashMap<Option<S>, usize> = HashMap::new();

        for poly in polygons {
            let slot = *by_material
                .entry(poly.metadata.clone())
                .or_insert_with(|| {
                    submeshes.push(Submesh {
                        indices: Vec::new(),
                        material: poly.metadata.clone(),
                    });
                    submeshes.len() - 1
                });

            for triangle in poly.triangulate() {
                for vertex in triangle {
                    submeshes[slot].indices.push(vertices.len());
                    vertices.push(vertex);
                }
            }
        }

        IndexedModel {
            vertices,
            submeshes,
        }
    }
}
