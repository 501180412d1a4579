//! Boolean operations on whole indexed models.
//!
//! These are the entry points for host engines: two [`IndexedModel`]s go in
//! (already in a common space, see [`IndexedModel::transform`]), one comes out.
//! Neither input is modified.

use crate::errors::ValidationError;
use crate::float_types::CsgConfig;
use crate::mesh::bsp::Node;
use crate::model::IndexedModel;
use log::debug;
use std::fmt::Debug;
use std::hash::Hash;

/// The three supported boolean operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    Intersection,
    Union,
    Subtraction,
}

/// Run `op` on `lhs` and `rhs`. Argument order matters for subtraction.
pub fn perform<S>(
    op: BooleanOp,
    lhs: &IndexedModel<S>,
    rhs: &IndexedModel<S>,
    config: &CsgConfig,
) -> Result<IndexedModel<S>, ValidationError>
where
    S: Clone + Send + Sync + Debug + Eq + Hash,
{
    let epsilon = config.epsilon;
    let a = Node::from_polygons(&lhs.to_polygons()?, epsilon);
    let b = Node::from_polygons(&rhs.to_polygons()?, epsilon);
    debug!(
        "{op:?}: {} x {} triangles, epsilon {epsilon}",
        lhs.triangle_count(),
        rhs.triangle_count()
    );

    let result = match op {
        BooleanOp::Intersection => Node::intersect(&a, &b, epsilon),
        BooleanOp::Union => Node::union(&a, &b, epsilon),
        BooleanOp::Subtraction => Node::subtract(&a, &b, epsilon),
    };

    Ok(IndexedModel::from_polygons(&result.into_polygons()))
}

/// Model enclosing the space in either `lhs` or `rhs`.
pub fn union<S>(
    lhs: &IndexedModel<S>,
    rhs: &IndexedModel<S>,
    config: &CsgConfig,
) -> Result<IndexedModel<S>, ValidationError>
where
    S: Clone + Send + Sync + Debug + Eq + Hash,
{
    perform(BooleanOp::Union, lhs, rhs, config)
}

/// Model enclosing the space in `lhs` but not in `rhs`.
pub fn subtract<S>(
    lhs: &IndexedModel<S>,
    rhs: &IndexedModel<S>,
    config: &CsgConfig,
) -> Result<IndexedModel<S>, ValidationError>
where
    S: Clone + Send + Sync + Debug + Eq + Hash,
{
    perform(BooleanOp::Subtraction, lhs, rhs, config)
}

/// Model enclosing the space in both `lhs` and `rhs`.
pub fn intersect<S>(
    lhs: &IndexedModel<S>,
    rhs: &IndexedModel<S>,
    config: &CsgConfig,
) -> Result<IndexedModel<S>, ValidationError>
where
    S: Clone + Send + Sync + Debug + Eq + Hash,
{
    perform(BooleanOp::Intersection, lhs, rhs, config)
}
