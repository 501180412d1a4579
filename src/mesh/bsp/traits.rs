//! Traits defining BSP tree operations for dependency inversion

use crate::float_types::Real;
use crate::mesh::bsp::node::Node;
use crate::mesh::polygon::Polygon;
use log::debug;
use std::fmt::Debug;

/// Core BSP operations trait - implements algorithms on BSP nodes.
///
/// Implementations carry the classification epsilon, so every plane test made
/// while executing one operation uses the same tolerance.
pub trait BspOps<S: Clone + Send + Sync + Debug> {
    /// Tolerance used for every point/plane classification.
    fn epsilon(&self) -> Real;

    /// Convert solid space to empty space and vice versa for the whole subtree
    fn invert(&self, node: &mut Node<S>);

    /// Remove the parts of `polygons` that lie inside the solid of this tree
    fn clip_polygons(&self, node: &Node<S>, polygons: &[Polygon<S>]) -> Vec<Polygon<S>>;

    /// Remove all polygons in this BSP tree that are inside the other BSP tree
    fn clip_to(&self, node: &mut Node<S>, other: &Node<S>);

    /// Build (or grow) a BSP tree from the given polygons
    fn build(&self, node: &mut Node<S>, polygons: &[Polygon<S>]);

    /// Return all polygons in this BSP tree, pre-order: node, front, back
    fn all_polygons(&self, node: &Node<S>) -> Vec<Polygon<S>> {
        let mut result = Vec::new();
        let mut stack = vec![node];

        while let Some(current) = stack.pop() {
            result.extend_from_slice(&current.polygons);

            // back first so the front subtree is emitted before it
            if let Some(back) = &current.back {
                stack.push(back.as_ref());
            }
            if let Some(front) = &current.front {
                stack.push(front.as_ref());
            }
        }
        result
    }

    /// Space in either `a` or `b`. Neither input is modified.
    fn union(&self, a: &Node<S>, b: &Node<S>) -> Node<S> {
        let mut a = a.clone();
        let mut b = b.clone();

        self.clip_to(&mut a, &b);
        self.clip_to(&mut b, &a);
        self.invert(&mut b);
        self.clip_to(&mut b, &a);
        self.invert(&mut b);
        self.build(&mut a, &self.all_polygons(&b));

        self.rebuild(&a, "union")
    }

    /// Space in `a` but not in `b`. Neither input is modified.
    fn subtract(&self, a: &Node<S>, b: &Node<S>) -> Node<S> {
        let mut a = a.clone();
        let mut b = b.clone();

        self.invert(&mut a);
        self.clip_to(&mut a, &b);
        self.clip_to(&mut b, &a);
        self.invert(&mut b);
        self.clip_to(&mut b, &a);
        self.invert(&mut b);
        self.build(&mut a, &self.all_polygons(&b));
        self.invert(&mut a);

        self.rebuild(&a, "subtract")
    }

    /// Space in both `a` and `b`. Neither input is modified.
    fn intersect(&self, a: &Node<S>, b: &Node<S>) -> Node<S> {
        let mut a = a.clone();
        let mut b = b.clone();

        self.invert(&mut a);
        self.clip_to(&mut b, &a);
        self.invert(&mut b);
        self.clip_to(&mut a, &b);
        self.clip_to(&mut b, &a);
        self.build(&mut a, &self.all_polygons(&b));
        self.invert(&mut a);

        self.rebuild(&a, "intersect")
    }

    /// Flatten `node` into a freshly built tree.
    fn rebuild(&self, node: &Node<S>, operation: &str) -> Node<S> {
        let polygons = self.all_polygons(node);
        debug!("{operation}: {} polygons in result", polygons.len());

        let mut result = Node::new();
        self.build(&mut result, &polygons);
        result
    }
}
