#![allow(dead_code)]
use mesh3mf::prelude::*;

pub const CUBE_NODES: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [100.0, 0.0, 0.0],
    [100.0, 100.0, 0.0],
    [0.0, 100.0, 0.0],
    [0.0, 0.0, 100.0],
    [100.0, 0.0, 100.0],
    [100.0, 100.0, 100.0],
    [0.0, 100.0, 100.0],
];

/// Two outward-facing triangles per cube side.
pub const CUBE_FACES: [[u32; 3]; 12] = [
    [3, 2, 1],
    [1, 0, 3],
    [4, 5, 6],
    [6, 7, 4],
    [0, 1, 5],
    [5, 4, 0],
    [1, 2, 6],
    [6, 5, 1],
    [2, 3, 7],
    [7, 6, 2],
    [3, 0, 4],
    [4, 7, 3],
];

pub const TETRA_NODES: [[f32; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

pub const TETRA_FACES: [[u32; 3]; 4] = [[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]];

/// Build an indexed mesh directly, without connectivity.
pub fn mesh_from(nodes: &[[f32; 3]], faces: &[[u32; 3]]) -> Mesh {
    let mut m = Mesh::new();
    for &n in nodes {
        m.add_node(Point3D::from(n));
    }
    for &[a, b, c] in faces {
        m.add_face(a, b, c).expect("no planes registered");
    }
    m
}

/// Feed the mesh as a triangle soup (three fresh vertices per face), the way
/// a triangle-file importer does.
pub fn import_soup(mesh: &mut Mesh, nodes: &[[f32; 3]], faces: &[[u32; 3]]) -> Result<(), MeshError> {
    let mut m = mesh.creation(CreationOptions::with_connectivity());
    for face in faces {
        let [a, b, c] = face.map(|i| m.add_node(Point3D::from(nodes[i as usize])));
        m.add_face(a, b, c)?;
    }
    Ok(())
}
