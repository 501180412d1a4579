//! Serial implementation of BSP operations

use crate::float_types::Real;
use crate::mesh::bsp::node::Node;
use crate::mesh::bsp::traits::BspOps;
use crate::mesh::plane::{BACK, FRONT, Plane};
use crate::mesh::polygon::Polygon;
use log::trace;
use std::fmt::Debug;

/// Serial implementation of BSP operations
#[derive(Debug, Clone, Copy)]
pub struct SerialBspOps {
    epsilon: Real,
}

impl SerialBspOps {
    pub const fn new(epsilon: Real) -> Self {
        Self { epsilon }
    }
}

impl<S: Clone + Send + Sync + Debug> BspOps<S> for SerialBspOps {
    fn epsilon(&self) -> Real {
        self.epsilon
    }

    fn invert(&self, node: &mut Node<S>) {
        // Use iterative approach with a stack
        let mut stack = vec![node];

        while let Some(current) = stack.pop() {
            current.polygons.iter_mut().for_each(|p| p.flip());
            if let Some(ref mut plane) = current.plane {
                plane.flip();
            }

            std::mem::swap(&mut current.front, &mut current.back);

            if let Some(ref mut front) = current.front {
                stack.push(front.as_mut());
            }
            if let Some(ref mut back) = current.back {
                stack.push(back.as_mut());
            }
        }
    }

    fn clip_polygons(&self, node: &Node<S>, polygons: &[Polygon<S>]) -> Vec<Polygon<S>> {
        let mut result = Vec::with_capacity(polygons.len());

        // Front work sits above back work on the stack, so kept polygons come
        // out front subtree first.
        let mut stack = vec![(node, polygons.to_vec())];
        while let Some((current, polygons)) = stack.pop() {
            if polygons.is_empty() {
                continue;
            }
            let Some(plane) = current.splitting_plane() else {
                result.extend(polygons);
                continue;
            };

            let mut front_polys = Vec::with_capacity(polygons.len());
            let mut back_polys = Vec::with_capacity(polygons.len());

            // Coplanar polygons follow their orientation into front/back.
            for polygon in &polygons {
                let (coplanar_front, coplanar_back, front_parts, back_parts) =
                    plane.split_polygon(polygon, self.epsilon);
                front_polys.extend(coplanar_front);
                front_polys.extend(front_parts);
                back_polys.extend(coplanar_back);
                back_polys.extend(back_parts);
            }

            // No back child means solid: whatever fell behind is dropped.
            if let Some(back) = &current.back {
                stack.push((back.as_ref(), back_polys));
            }
            match &current.front {
                Some(front) => stack.push((front.as_ref(), front_polys)),
                None => result.extend(front_polys),
            }
        }

        result
    }

    fn clip_to(&self, node: &mut Node<S>, other: &Node<S>) {
        let mut stack = vec![node];

        while let Some(current) = stack.pop() {
            current.polygons = self.clip_polygons(other, &current.polygons);

            if let Some(ref mut front) = current.front {
                stack.push(front.as_mut());
            }
            if let Some(ref mut back) = current.back {
                stack.push(back.as_mut());
            }
        }
    }

    fn build(&self, node: &mut Node<S>, polygons: &[Polygon<S>]) {
        // A convex solid builds a tree about as deep as its polygon count, so
        // pending subtrees go on a heap stack instead of the call stack.
        let mut stack = vec![(node, polygons.to_vec())];

        while let Some((current, polygons)) = stack.pop() {
            if polygons.is_empty() {
                continue;
            }

            let (plane, new_plane) = adopt_plane(current, &polygons);

            let mut front = Vec::with_capacity(polygons.len() / 2);
            let mut back = Vec::with_capacity(polygons.len() / 2);

            for polygon in &polygons {
                let (coplanar_front, coplanar_back, front_parts, back_parts) =
                    plane.split_polygon(polygon, self.epsilon);
                current.polygons.extend(coplanar_front);
                current.polygons.extend(coplanar_back);
                front.extend(front_parts);
                back.extend(back_parts);
            }

            if new_plane {
                keep_unseparated(current, &plane, &polygons, &mut front, FRONT, self.epsilon);
                keep_unseparated(current, &plane, &polygons, &mut back, BACK, self.epsilon);
            }

            if !back.is_empty() {
                let child = current.back.get_or_insert_with(|| Box::new(Node::new()));
                stack.push((child.as_mut(), back));
            }
            if !front.is_empty() {
                let child = current.front.get_or_insert_with(|| Box::new(Node::new()));
                stack.push((child.as_mut(), front));
            }
        }
    }
}

/// If a freshly adopted plane sent every polygon whole to `side`, recursing
/// would adopt the same plane again forever. Keep them at `node` instead.
pub(crate) fn keep_unseparated<S: Clone + Send + Sync + Debug>(
    node: &mut Node<S>,
    plane: &Plane,
    polygons: &[Polygon<S>],
    side_polygons: &mut Vec<Polygon<S>>,
    side: i8,
    epsilon: Real,
) {
    if !side_polygons.is_empty() && passed_through(plane, polygons, side_polygons, side, epsilon) {
        trace!("build: {} polygons not separated, kept at node", side_polygons.len());
        node.polygons.append(side_polygons);
    }
}

/// Give `node` the plane of the first polygon unless it already has a valid
/// one. Returns the plane and whether it was adopted just now.
pub(crate) fn adopt_plane<S: Clone + Send + Sync + Debug>(
    node: &mut Node<S>,
    polygons: &[Polygon<S>],
) -> (Plane, bool) {
    match node.splitting_plane() {
        Some(plane) => (plane, false),
        None => {
            let plane = polygons[0].plane;
            node.plane = Some(plane);
            (plane, true)
        },
    }
}

/// True when every input polygon landed, whole and in order, on one `side`.
///
/// Each input contributes at most one piece per side, so a side holding as
/// many polygons as the input can only be the input itself if none of them
/// was split or routed elsewhere.
pub(crate) fn passed_through<S: Clone + Send + Sync + Debug>(
    plane: &Plane,
    polygons: &[Polygon<S>],
    side_polygons: &[Polygon<S>],
    side: i8,
    epsilon: Real,
) -> bool {
    side_polygons.len() == polygons.len()
        && polygons
            .iter()
            .all(|p| plane.classify_polygon(p, epsilon) == side)
}
