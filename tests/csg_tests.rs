mod support;

use csgbsp::{
    CSGOps, CsgConfig, Mesh, Vertex,
    float_types::Real,
    mesh::{plane::Plane, polygon::Polygon},
};
use nalgebra::{Point3, Vector3};

use crate::support::{approx_eq, bounding_box};

const VOLUME_TOL: Real = 1e-6;

fn cube_pair() -> (Mesh<()>, Mesh<()>) {
    let a = Mesh::cube(1.0, None);
    let b = Mesh::cube(1.0, None).translate(0.5, 0.0, 0.0);
    (a, b)
}

/// Unit cube at the origin and a 16×8 UV sphere of radius 1 centered on the
/// cube's corner. The sphere is mirror-symmetric about all three coordinate
/// planes, so exactly one eighth of it lies inside the cube.
fn cube_and_sphere() -> (Mesh<()>, Mesh<()>) {
    (Mesh::cube(1.0, None), Mesh::sphere(1.0, 16, 8, None))
}

#[test]
fn primitives_enclose_expected_volume() {
    assert!(approx_eq(Mesh::<()>::cube(2.0, None).volume(), 8.0, VOLUME_TOL));
    assert!(approx_eq(
        Mesh::<()>::cuboid(1.0, 2.0, 3.0, None).volume(),
        6.0,
        VOLUME_TOL
    ));

    let sphere = Mesh::<()>::sphere(1.0, 32, 16, None).volume();
    let exact = 4.0 / 3.0 * csgbsp::float_types::PI;
    assert!(sphere > 0.9 * exact && sphere < exact);
}

#[test]
fn union_of_overlapping_cubes() {
    let (a, b) = cube_pair();
    let union = a.union(&b);
    assert!(approx_eq(union.volume(), 1.5, VOLUME_TOL), "volume {}", union.volume());

    let bb = bounding_box(&union.polygons);
    assert!(approx_eq(bb[0], 0.0, 1e-8));
    assert!(approx_eq(bb[3], 1.5, 1e-8));
}

#[test]
fn intersection_of_overlapping_cubes() {
    let (a, b) = cube_pair();
    let isect = a.intersection(&b);
    assert!(approx_eq(isect.volume(), 0.5, VOLUME_TOL), "volume {}", isect.volume());

    let bb = bounding_box(&isect.polygons);
    assert!(approx_eq(bb[0], 0.5, 1e-8));
    assert!(approx_eq(bb[3], 1.0, 1e-8));
}

#[test]
fn difference_of_overlapping_cubes() {
    let (a, b) = cube_pair();
    let diff = a.difference(&b);
    assert!(approx_eq(diff.volume(), 0.5, VOLUME_TOL), "volume {}", diff.volume());

    // only the part of `a` that `b` does not cover is left
    let bb = bounding_box(&diff.polygons);
    assert!(approx_eq(bb[0], 0.0, 1e-8));
    assert!(approx_eq(bb[3], 0.5, 1e-8));
}

#[test]
fn subtract_self_is_empty() {
    let cube = Mesh::<()>::cube(1.0, None);
    let empty = cube.difference(&cube);
    assert!(approx_eq(empty.volume(), 0.0, VOLUME_TOL));

    let sphere = Mesh::<()>::sphere(1.0, 12, 6, None);
    assert!(approx_eq(sphere.difference(&sphere).volume(), 0.0, VOLUME_TOL));
}

#[test]
fn union_is_commutative_in_volume() {
    let (cube, sphere) = cube_and_sphere();
    let ab = cube.union(&sphere).volume();
    let ba = sphere.union(&cube).volume();
    assert!(approx_eq(ab, ba, VOLUME_TOL), "{ab} vs {ba}");

    let expected = cube.volume() + sphere.volume() * 7.0 / 8.0;
    assert!(approx_eq(ab, expected, VOLUME_TOL), "{ab} vs {expected}");
}

#[test]
fn intersection_is_commutative_in_volume() {
    let (cube, sphere) = cube_and_sphere();
    let ab = cube.intersection(&sphere).volume();
    let ba = sphere.intersection(&cube).volume();
    assert!(approx_eq(ab, ba, VOLUME_TOL), "{ab} vs {ba}");
    assert!(approx_eq(ab, sphere.volume() / 8.0, VOLUME_TOL));
}

#[test]
fn subtraction_is_not_commutative() {
    let (cube, sphere) = cube_and_sphere();
    let cube_minus_sphere = cube.difference(&sphere).volume();
    let sphere_minus_cube = sphere.difference(&cube).volume();

    assert!(approx_eq(
        cube_minus_sphere,
        1.0 - sphere.volume() / 8.0,
        VOLUME_TOL
    ));
    assert!(approx_eq(
        sphere_minus_cube,
        sphere.volume() * 7.0 / 8.0,
        VOLUME_TOL
    ));
    assert!((cube_minus_sphere - sphere_minus_cube).abs() > 0.1);
}

#[test]
fn disjoint_operands() {
    let a = Mesh::<()>::cube(1.0, None);
    let b = Mesh::<()>::cube(1.0, None).translate(5.0, 0.0, 0.0);

    assert!(approx_eq(a.union(&b).volume(), 2.0, VOLUME_TOL));
    assert!(a.intersection(&b).polygons.is_empty());
    assert!(approx_eq(a.difference(&b).volume(), 1.0, VOLUME_TOL));
}

#[test]
fn inverse_negates_volume() {
    let cube = Mesh::<()>::cube(1.0, None);
    assert!(approx_eq(cube.inverse().volume(), -1.0, VOLUME_TOL));
    assert!(approx_eq(cube.inverse().inverse().volume(), 1.0, VOLUME_TOL));
}

#[test]
fn transform_moves_and_scales() {
    let cube = Mesh::<()>::cube(1.0, None).scale(2.0, 1.0, 1.0).translate(-1.0, 0.0, 0.0);
    assert!(approx_eq(cube.volume(), 2.0, VOLUME_TOL));

    let (min, max) = cube.bounding_box().unwrap();
    assert!(approx_eq(min.x, -1.0, 1e-12));
    assert!(approx_eq(max.x, 1.0, 1e-12));

    // planes follow the vertices
    for poly in &cube.polygons {
        for v in &poly.vertices {
            let t = poly.plane.normal().dot(&v.pos.coords) - poly.plane.offset();
            assert!(t.abs() < 1e-9);
        }
    }
}

#[test]
fn rotate_keeps_volume() {
    let cube = Mesh::<()>::cube(1.0, None).rotate(30.0, 45.0, 60.0);
    assert!(approx_eq(cube.volume(), 1.0, VOLUME_TOL));
}

#[test]
fn triangulate_keeps_volume() {
    let (a, b) = cube_pair();
    let union = a.union(&b);
    let tris = union.triangulate();
    assert!(tris.polygons.iter().all(|p| p.vertices.len() == 3));
    assert!(approx_eq(tris.volume(), union.volume(), VOLUME_TOL));
}

#[test]
fn custom_epsilon_is_used() {
    let (a, b) = cube_pair();
    let a = a.with_config(CsgConfig::with_epsilon(1e-7));
    let union = a.union(&b);
    assert_eq!(union.config.epsilon, 1e-7);
    assert!(approx_eq(union.volume(), 1.5, VOLUME_TOL));
}

#[test]
fn transform_leaves_short_polygons_alone() {
    let mut mesh = Mesh::<()>::cube(1.0, None);
    mesh.polygons.push(Polygon {
        vertices: vec![
            Vertex::new(Point3::origin(), Vector3::z()),
            Vertex::new(Point3::new(1.0, 0.0, 0.0), Vector3::z()),
        ],
        plane: Plane::default(),
        metadata: None,
    });

    let moved = mesh.translate(0.0, 0.0, 2.0);
    let segment = &moved.polygons[6];
    assert_eq!(segment.vertices[1].pos, Point3::new(1.0, 0.0, 2.0));
    assert_eq!(segment.plane, Plane::default());
    assert!(approx_eq(moved.volume(), 1.0, VOLUME_TOL));
}

/// Every face of a convex solid lies behind the others, so its tree is a
/// single chain as long as the polygon count.
#[test]
fn dense_sphere_does_not_exhaust_the_stack() {
    let sphere = Mesh::<()>::sphere(1.0, 64, 32, None);
    assert_eq!(sphere.polygons.len(), 64 * 2 + 64 * 30 * 2);

    let tree = csgbsp::mesh::bsp::Node::from_polygons(&sphere.polygons, 1e-5);
    assert_eq!(tree.all_polygons().len(), sphere.polygons.len());

    let cube = Mesh::<()>::cube(1.0, None);
    let union = sphere.union(&cube);
    let expected = sphere.volume() * 7.0 / 8.0 + 1.0;
    assert!(approx_eq(union.volume(), expected, 1e-5), "{} vs {expected}", union.volume());
}
