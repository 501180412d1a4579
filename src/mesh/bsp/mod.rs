//! Binary Space Partitioning (BSP) tree implementation
//!
//! The algorithms live behind the [`BspOps`] trait with a serial and a
//! rayon-backed implementation; [`Node`]'s inherent methods pick one based on
//! the `parallel` feature.

pub mod node;
pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use node::Node;
pub use serial::SerialBspOps;
pub use traits::BspOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelBspOps;

use crate::float_types::Real;
use crate::mesh::polygon::Polygon;
use std::fmt::Debug;

#[cfg(not(feature = "parallel"))]
const fn ops(epsilon: Real) -> SerialBspOps {
    SerialBspOps::new(epsilon)
}

#[cfg(feature = "parallel")]
const fn ops(epsilon: Real) -> ParallelBspOps {
    ParallelBspOps::new(epsilon)
}

impl<S: Clone + Send + Sync + Debug> Node<S> {
    /// Creates a new BSP tree from polygons
    pub fn from_polygons(polygons: &[Polygon<S>], epsilon: Real) -> Self {
        let mut node = Self::new();
        node.build(polygons, epsilon);
        node
    }

    /// Build a BSP tree out of `polygons`. On an existing tree the polygons
    /// filter down to the leaves and become new nodes there. Each node splits
    /// on the plane of the first polygon it receives.
    pub fn build(&mut self, polygons: &[Polygon<S>], epsilon: Real) {
        ops(epsilon).build(self, polygons);
    }

    /// Convert solid space to empty space and empty space to solid space
    pub fn invert(&mut self) {
        // flipping does not classify anything; the epsilon is unused
        BspOps::<S>::invert(&ops(0.0), self);
    }

    /// Recursively remove all polygons in `polygons` that are inside this BSP tree
    pub fn clip_polygons(&self, polygons: &[Polygon<S>], epsilon: Real) -> Vec<Polygon<S>> {
        ops(epsilon).clip_polygons(self, polygons)
    }

    /// Remove all polygons in this BSP tree that are inside the other BSP tree
    pub fn clip_to(&mut self, other: &Node<S>, epsilon: Real) {
        ops(epsilon).clip_to(self, other);
    }

    /// Return all polygons in this BSP tree
    pub fn all_polygons(&self) -> Vec<Polygon<S>> {
        BspOps::<S>::all_polygons(&ops(0.0), self)
    }

    /// Consume the tree, returning its polygons in the same order as [`Node::all_polygons`]
    pub fn into_polygons(self) -> Vec<Polygon<S>> {
        let mut result = Vec::new();
        let mut stack = vec![self];

        while let Some(mut current) = stack.pop() {
            result.append(&mut current.polygons);
            if let Some(back) = current.back.take() {
                stack.push(*back);
            }
            if let Some(front) = current.front.take() {
                stack.push(*front);
            }
        }
        result
    }

    /// Tree of the space in either `a` or `b`
    pub fn union(a: &Node<S>, b: &Node<S>, epsilon: Real) -> Node<S> {
        ops(epsilon).union(a, b)
    }

    /// Tree of the space in `a` but not in `b`
    pub fn subtract(a: &Node<S>, b: &Node<S>, epsilon: Real) -> Node<S> {
        ops(epsilon).subtract(a, b)
    }

    /// Tree of the space in both `a` and `b`
    pub fn intersect(a: &Node<S>, b: &Node<S>, epsilon: Real) -> Node<S> {
        ops(epsilon).intersect(a, b)
    }
}
