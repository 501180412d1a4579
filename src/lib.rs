//! **Constructive Solid Geometry (CSG)** on polygon meshes: *union*,
//! *subtraction* and *intersection* of closed solids, computed with
//! [BSP](mesh::bsp) trees.
//!
//! Inputs are never modified; every operation builds fresh trees.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to split polygons against planes in parallel

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod csg;
pub mod errors;
pub mod float_types;
pub mod mesh;
pub mod model;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use csg::BooleanOp;
pub use errors::ValidationError;
pub use float_types::CsgConfig;
pub use mesh::Mesh;
pub use mesh::vertex::Vertex;
pub use model::IndexedModel;
pub use traits::CSGOps;
