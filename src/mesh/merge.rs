//! Importing one mesh into another.

use crate::mesh::Mesh;
use crate::mesh_error::MeshError;
use crate::topology::point::Point3D;

impl Mesh {
    /// Appends the nodes, faces, beams and metadata of `other`.
    ///
    /// See [`merge_with`](Self::merge_with).
    pub fn merge(&mut self, other: &Mesh) -> Result<Vec<u32>, MeshError> {
        self.merge_with(other, |p| p)
    }

    /// Appends `other`, mapping every node position through `transform`.
    ///
    /// Metadata types this mesh lacks are adopted from `other` first; types it
    /// already carries keep their records. Nodes go through
    /// [`add_node`](Self::add_node), so an open connectivity window merges
    /// them with coincident nodes. Each imported face gets a copy of its
    /// source metadata.
    ///
    /// Returns, for every node of `other`, its index in this mesh. `other`
    /// must reference only nodes it has, and both meshes must have planes in
    /// step with their faces. All of this is checked before anything is
    /// modified, so on error this mesh is unchanged.
    pub fn merge_with<F>(&mut self, other: &Mesh, transform: F) -> Result<Vec<u32>, MeshError>
    where
        F: Fn(Point3D) -> Point3D,
    {
        check_references(other)?;
        self.information_handler
            .validate_face_count(self.faces.len() as u32)?;
        other
            .information_handler
            .validate_face_count(other.faces.len() as u32)?;

        // past this point no step can fail
        self.information_handler
            .add_info_from_table(&other.information_handler, self.faces.len() as u32)?;

        let remap: Vec<u32> = other
            .nodes
            .iter()
            .map(|node| self.add_node(transform(node.position)))
            .collect();
        if remap.is_empty() {
            return Ok(remap);
        }

        for (source_index, face) in other.faces.iter().enumerate() {
            let [a, b, c] = face.node_indices.map(|n| remap[n as usize]);
            let index = self.add_face(a, b, c)?;
            self.information_handler.clone_face_infos_from(
                index,
                &other.information_handler,
                source_index as u32,
            )?;
        }

        for beam in other.beams() {
            let [a, b] = beam.node_indices.map(|n| remap[n as usize]);
            self.add_beam(a, b, beam.properties());
        }

        log::debug!(
            "merged {} nodes, {} faces, {} beams",
            other.nodes.len(),
            other.faces.len(),
            other.beams().len()
        );
        Ok(remap)
    }
}

fn check_references(mesh: &Mesh) -> Result<(), MeshError> {
    let node_count = mesh.nodes.len() as u32;
    let indices = mesh
        .faces
        .iter()
        .flat_map(|f| f.node_indices)
        .chain(mesh.beams().iter().flat_map(|b| b.node_indices));
    for index in indices {
        if index >= node_count {
            return Err(MeshError::NodeIndexOutOfRange { index, node_count });
        }
    }
    Ok(())
}
