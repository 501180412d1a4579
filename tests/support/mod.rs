//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use csgbsp::{
    float_types::Real,
    mesh::{polygon::Polygon, vertex::Vertex},
};
use nalgebra::{Point3, Vector3};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Helper to make a simple Polygon in 3D with given vertices.
pub fn make_polygon_3d(points: &[[Real; 3]]) -> Polygon<()> {
    let verts = points
        .iter()
        .map(|p| Vertex::new(Point3::new(p[0], p[1], p[2]), Vector3::z()))
        .collect();
    Polygon::new(verts, None).expect("test polygon must be valid")
}

/// Returns `[min_x, min_y, min_z, max_x, max_y, max_z]` for a set of polygons.
pub fn bounding_box<S: Clone>(polygons: &[Polygon<S>]) -> [Real; 6] {
    let mut bb = [Real::MAX, Real::MAX, Real::MAX, Real::MIN, Real::MIN, Real::MIN];
    for v in polygons.iter().flat_map(|p| p.vertices.iter()) {
        for axis in 0..3 {
            bb[axis] = bb[axis].min(v.pos[axis]);
            bb[axis + 3] = bb[axis + 3].max(v.pos[axis]);
        }
    }
    bb
}

/// Vertex loops of every polygon, for order-sensitive comparisons.
pub fn vertex_loops<S: Clone>(polygons: &[Polygon<S>]) -> Vec<Vec<Vertex>> {
    polygons.iter().map(|p| p.vertices.clone()).collect()
}
