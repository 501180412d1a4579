//! Parallel implementation of BSP operations

use rayon::prelude::*;

use crate::float_types::Real;
use crate::mesh::bsp::node::Node;
use crate::mesh::bsp::serial::{adopt_plane, keep_unseparated};
use crate::mesh::bsp::traits::BspOps;
use crate::mesh::plane::{BACK, FRONT, Plane};
use crate::mesh::polygon::Polygon;
use std::fmt::Debug;

/// Parallel implementation of BSP operations.
///
/// Only the per-polygon splitting is spread over the rayon pool. Results are
/// gathered in input order, so the trees it builds match [`super::SerialBspOps`].
#[derive(Debug, Clone, Copy)]
pub struct ParallelBspOps {
    epsilon: Real,
}

impl ParallelBspOps {
    pub const fn new(epsilon: Real) -> Self {
        Self { epsilon }
    }

    #[allow(clippy::type_complexity)]
    fn split_all<S: Clone + Send + Sync + Debug>(
        &self,
        plane: &Plane,
        polygons: &[Polygon<S>],
    ) -> Vec<(
        Vec<Polygon<S>>,
        Vec<Polygon<S>>,
        Vec<Polygon<S>>,
        Vec<Polygon<S>>,
    )> {
        polygons
            .par_iter()
            .map(|p| plane.split_polygon(p, self.epsilon))
            .collect()
    }
}

impl<S: Clone + Send + Sync + Debug> BspOps<S> for ParallelBspOps {
    fn epsilon(&self) -> Real {
        self.epsilon
    }

    fn invert(&self, node: &mut Node<S>) {
        // Use iterative approach with a stack to avoid stack overflow
        let mut stack = vec![node];

        while let Some(current) = stack.pop() {
            current.polygons.par_iter_mut().for_each(|p| p.flip());
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

        let mut stack = vec![(node, polygons.to_vec())];
        while let Some((current, polygons)) = stack.pop() {
            if polygons.is_empty() {
                continue;
            }
            let Some(plane) = current.splitting_plane() else {
                result.extend(polygons);
                continue;
            };

            let mut front = Vec::with_capacity(polygons.len());
            let mut back = Vec::with_capacity(polygons.len());
            for (coplanar_front, coplanar_back, front_parts, back_parts) in
                self.split_all(&plane, &polygons)
            {
                front.extend(coplanar_front);
                front.extend(front_parts);
                back.extend(coplanar_back);
                back.extend(back_parts);
            }

            if let Some(b) = &current.back {
                stack.push((b.as_ref(), back));
            }
            match &current.front {
                Some(f) => stack.push((f.as_ref(), front)),
                None => result.extend(front),
            }
        }

        result
    }

    fn clip_to(&self, node: &mut Node<S>, other: &Node<S>) {
        // Use iterative approach with a stack to avoid recursive stack overflow
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
        let mut stack = vec![(node, polygons.to_vec())];

        while let Some((current, polygons)) = stack.pop() {
            if polygons.is_empty() {
                continue;
            }

            let (plane, new_plane) = adopt_plane(current, &polygons);

            let mut front = Vec::new();
            let mut back = Vec::new();
            for (coplanar_front, coplanar_back, front_parts, back_parts) in
                self.split_all(&plane, &polygons)
            {
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
