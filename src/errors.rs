//! Validation errors

use crate::float_types::Real;
use nalgebra::Point3;

/// Everything that can be wrong with input handed to the boolean operators.
///
/// The BSP algorithms themselves never fail; these are raised when polygons or
/// indexed models are constructed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (TooFewPoints) A polygon needs at least three vertices
    #[error("(TooFewPoints) A polygon needs at least 3 vertices, got {count}")]
    TooFewPoints { count: usize },
    /// (DegeneratePolygon) The first three vertices do not span a plane
    #[error("(DegeneratePolygon) Vertices do not define a plane at: {0}")]
    DegeneratePolygon(Point3<Real>),
    /// (InvalidCoordinate) The coordinate has a NaN or infinite
    #[error("(InvalidCoordinate) The coordinate ({0}) has a NaN or infinite")]
    InvalidCoordinate(Point3<Real>),
    /// (IndexCountNotTriangles) A submesh index list cannot be read as triangles
    #[error("(IndexCountNotTriangles) Submesh {submesh} has {count} indices, not a multiple of 3")]
    IndexCountNotTriangles { submesh: usize, count: usize },
    /// (IndexOutOfRange) An index points past the vertex list
    #[error("(IndexOutOfRange) Index {index} is out of range (vertices.len = {vertex_count})")]
    IndexOutOfRange { index: usize, vertex_count: usize },
    /// (NonInvertibleTransform) Normals cannot be carried through a singular matrix
    #[error("(NonInvertibleTransform) The transform matrix is not invertible")]
    NonInvertibleTransform,
    /// (MaterialCountMismatch) Every submesh needs exactly one material
    #[error("(MaterialCountMismatch) {submeshes} submeshes but {materials} materials")]
    MaterialCountMismatch { submeshes: usize, materials: usize },
}
