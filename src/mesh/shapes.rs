//! Primitive solids, all wound counter-clockwise when seen from outside.

use crate::float_types::{PI, Real, TAU};
use crate::mesh::Mesh;
use crate::mesh::polygon::Polygon;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};
use std::fmt::Debug;

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Axis-aligned box spanning `[0, width] × [0, length] × [0, height]`,
    /// one quad per face.
    pub fn cuboid(width: Real, length: Real, height: Real, metadata: Option<S>) -> Mesh<S> {
        let corners = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(width, 0.0, 0.0),
            Point3::new(width, length, 0.0),
            Point3::new(0.0, length, 0.0),
            Point3::new(0.0, 0.0, height),
            Point3::new(width, 0.0, height),
            Point3::new(width, length, height),
            Point3::new(0.0, length, height),
        ];

        let faces = [
            ([0, 3, 2, 1], -Vector3::z()), // bottom
            ([4, 5, 6, 7], Vector3::z()),  // top
            ([0, 1, 5, 4], -Vector3::y()), // front
            ([3, 7, 6, 2], Vector3::y()),  // back
            ([0, 4, 7, 3], -Vector3::x()), // left
            ([1, 2, 6, 5], Vector3::x()),  // right
        ];

        let polygons = faces
            .iter()
            .map(|(indices, normal)| {
                let vertices = indices
                    .iter()
                    .map(|&i| Vertex::new(corners[i], *normal))
                    .collect();
                Polygon::from_split(vertices, metadata.clone())
            })
            .collect::<Vec<_>>();

        Mesh::from_polygons(&polygons)
    }

    /// Cube with edge `size`, corner at the origin.
    pub fn cube(size: Real, metadata: Option<S>) -> Mesh<S> {
        Self::cuboid(size, size, size, metadata)
    }

    /// UV sphere centered at the origin with poles on ±Y, built from triangles.
    ///
    /// `segments` is clamped to at least 3 and `stacks` to at least 2.
    pub fn sphere(radius: Real, segments: usize, stacks: usize, metadata: Option<S>) -> Mesh<S> {
        let segments = segments.max(3);
        let stacks = stacks.max(2);

        let point = |i: usize, j: usize| -> Vertex {
            let dir = if j == 0 {
                Vector3::y()
            } else if j == stacks {
                -Vector3::y()
            } else {
                let theta = (i % segments) as Real / segments as Real * TAU;
                let phi = j as Real / stacks as Real * PI;
                Vector3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin())
            };
            Vertex::new(Point3::from(dir * radius), dir)
        };

        let mut polygons = Vec::with_capacity(segments * stacks * 2);
        for j in 0..stacks {
            for i in 0..segments {
                let upper = point(i, j);
                let upper_next = point(i + 1, j);
                let lower = point(i, j + 1);
                let lower_next = point(i + 1, j + 1);

                if j == 0 {
                    polygons.push(Polygon::from_split(
                        vec![upper, lower_next, lower],
                        metadata.clone(),
                    ));
                } else if j == stacks - 1 {
                    polygons.push(Polygon::from_split(
                        vec![upper, upper_next, lower],
                        metadata.clone(),
                    ));
                } else {
                    polygons.push(Polygon::from_split(
                        vec![upper, upper_next, lower_next],
                        metadata.clone(),
                    ));
                    polygons.push(Polygon::from_split(
                        vec![upper, lower_next, lower],
                        metadata.clone(),
                    ));
                }
            }
        }

        Mesh::from_polygons(&polygons)
    }
}
