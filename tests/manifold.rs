mod util;

use mesh3mf::prelude::*;
use util::{TETRA_FACES, TETRA_NODES, mesh_from};

#[test]
fn tetrahedron_is_closed_and_oriented() {
    let mesh = mesh_from(&TETRA_NODES, &TETRA_FACES);
    assert!(mesh.check_sanity());
    assert!(mesh.is_manifold_and_oriented());
}

#[test]
fn reversed_winding_breaks_orientation() {
    let mut faces = TETRA_FACES;
    faces[3] = [1, 2, 3];
    let mesh = mesh_from(&TETRA_NODES, &faces);
    assert!(mesh.check_sanity());
    assert!(!mesh.is_manifold_and_oriented());
}

#[test]
fn flipping_every_face_keeps_orientation_consistent() {
    let mut mesh = mesh_from(&TETRA_NODES, &TETRA_FACES);
    for i in 0..4 {
        mesh.flip_face(i).unwrap();
    }
    assert!(mesh.is_manifold_and_oriented());
}

#[test]
fn same_direction_duplicates_are_rejected() {
    let faces = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];
    let mesh = mesh_from(&TETRA_NODES, &faces);
    assert!(!mesh.is_manifold_and_oriented());
}

#[test]
fn edge_shared_by_three_faces_is_rejected() {
    // two tetrahedra glued along edge 0-1 plus an extra fin
    let nodes = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, -1.0, 0.0],
    ];
    let mut faces = TETRA_FACES.to_vec();
    faces.push([1, 0, 4]);
    let mesh = mesh_from(&nodes, &faces);
    assert!(mesh.check_sanity());
    assert!(!mesh.is_manifold_and_oriented());
}

#[test]
fn small_meshes_are_never_manifold() {
    let mut mesh = Mesh::new();
    mesh.add_node(Point3D::default());
    mesh.add_node(Point3D::default());
    assert!(!mesh.is_manifold_and_oriented());

    let mesh = mesh_from(&TETRA_NODES, &TETRA_FACES[..2]);
    assert!(!mesh.is_manifold_and_oriented());
}

#[test]
fn insane_meshes_fail_both_predicates() {
    let mut mesh = mesh_from(&TETRA_NODES, &TETRA_FACES);
    mesh.add_face(0, 1, 9).unwrap();
    assert!(!mesh.check_sanity());
    assert!(!mesh.is_manifold_and_oriented());

    let mut mesh = mesh_from(&TETRA_NODES, &TETRA_FACES);
    mesh.add_beam(2, 4, BeamProperties::default());
    assert!(!mesh.check_sanity());
}

#[test]
fn face_nodes_dereference_in_order() {
    let mesh = mesh_from(&TETRA_NODES, &TETRA_FACES);
    for (i, face) in mesh.faces().iter().enumerate() {
        let (a, b, c) = mesh.face_nodes(i as u32);
        let want = face.node_indices.map(|n| mesh.node(n).unwrap().position);
        assert_eq!([*a, *b, *c], want);
    }
}
