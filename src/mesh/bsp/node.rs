//! BSP tree node data structure

use crate::mesh::plane::Plane;
use crate::mesh::polygon::Polygon;
use std::fmt::Debug;

/// A BSP tree node, containing polygons plus optional front/back subtrees.
///
/// Children are owned exclusively; there are no parent links. `Clone` is a
/// deep copy, so a cloned tree can be mutated without touching the original.
/// Cloning and dropping walk the tree with an explicit stack, since trees
/// built from convex solids are as deep as their polygon count.
#[derive(Debug)]
pub struct Node<S: Clone> {
    /// Splitting plane for this node *or* **None** for a node that has not
    /// been built yet.
    pub plane: Option<Plane>,

    /// Subtree in the *front* half‑space.
    pub front: Option<Box<Node<S>>>,

    /// Subtree in the *back* half‑space.
    pub back: Option<Box<Node<S>>>,

    /// Polygons coplanar with `plane`.
    pub polygons: Vec<Polygon<S>>,
}

impl<S: Clone + Send + Sync + Debug> Default for Node<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Send + Sync + Debug> Node<S> {
    /// Create a new empty BSP node
    pub const fn new() -> Self {
        Self {
            plane: None,
            front: None,
            back: None,
            polygons: Vec::new(),
        }
    }

    /// The splitting plane, if this node has one that can actually split.
    pub fn splitting_plane(&self) -> Option<Plane> {
        self.plane.filter(Plane::is_valid)
    }
}

impl<S: Clone> Node<S> {
    /// This node's plane and polygons without its children.
    fn detached(&self) -> Self {
        Node {
            plane: self.plane,
            front: None,
            back: None,
            polygons: self.polygons.clone(),
        }
    }
}

impl<S: Clone> Clone for Node<S> {
    fn clone(&self) -> Self {
        let mut root = self.detached();
        let mut stack = vec![(self, &mut root)];

        while let Some((source, target)) = stack.pop() {
            if let Some(front) = &source.front {
                let child = target.front.insert(Box::new(front.detached()));
                stack.push((front.as_ref(), child.as_mut()));
            }
            if let Some(back) = &source.back {
                let child = target.back.insert(Box::new(back.detached()));
                stack.push((back.as_ref(), child.as_mut()));
            }
        }

        root
    }
}

impl<S: Clone> Drop for Node<S> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<S>>> = self.front.take().into_iter().collect();
        stack.extend(self.back.take());

        // each popped node is dropped with its children already detached
        while let Some(mut node) = stack.pop() {
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }
    }
}
