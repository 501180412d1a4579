#![cfg(feature = "parallel")]

mod support;

use csgbsp::{
    CSGOps, Mesh,
    float_types::{DEFAULT_EPSILON, Real},
    mesh::bsp::{BspOps, Node, ParallelBspOps, SerialBspOps},
};

use crate::support::vertex_loops;

const EPS: Real = DEFAULT_EPSILON;

fn operands() -> (Node<()>, Node<()>) {
    let cube = Mesh::<()>::cube(1.0, None);
    let sphere = Mesh::<()>::sphere(0.8, 16, 8, None).translate(0.5, 0.5, 0.5);
    (
        Node::from_polygons(&cube.polygons, EPS),
        Node::from_polygons(&sphere.polygons, EPS),
    )
}

#[test]
fn parallel_build_matches_serial() {
    let polygons = Mesh::<()>::sphere(1.0, 24, 12, None)
        .union(&Mesh::cube(1.0, None))
        .polygons;

    let mut serial = Node::new();
    BspOps::build(&SerialBspOps::new(EPS), &mut serial, &polygons);
    let mut parallel = Node::new();
    BspOps::build(&ParallelBspOps::new(EPS), &mut parallel, &polygons);

    assert_eq!(
        vertex_loops(&serial.all_polygons()),
        vertex_loops(&parallel.all_polygons())
    );
}

#[test]
fn parallel_boolean_ops_match_serial() {
    let (a, b) = operands();
    let serial = SerialBspOps::new(EPS);
    let parallel = ParallelBspOps::new(EPS);

    let pairs = [
        (BspOps::union(&serial, &a, &b), BspOps::union(&parallel, &a, &b)),
        (BspOps::subtract(&serial, &a, &b), BspOps::subtract(&parallel, &a, &b)),
        (BspOps::intersect(&serial, &a, &b), BspOps::intersect(&parallel, &a, &b)),
    ];
    for (expected, actual) in &pairs {
        let expected = vertex_loops(&expected.all_polygons());
        assert!(!expected.is_empty());
        assert_eq!(expected, vertex_loops(&actual.all_polygons()));
    }
}

#[test]
fn parallel_clip_matches_serial() {
    let (a, b) = operands();
    let polygons = b.all_polygons();

    let serial = BspOps::clip_polygons(&SerialBspOps::new(EPS), &a, &polygons);
    let parallel = BspOps::clip_polygons(&ParallelBspOps::new(EPS), &a, &polygons);
    assert_eq!(vertex_loops(&serial), vertex_loops(&parallel));
}
