//! The mesh aggregate: nodes, faces, beams and their per-face metadata.
//!
//! A [`Mesh`] is built by appending nodes, faces and beams. Indices are
//! stable: nothing is ever removed except by [`Mesh::clear`]. Insertion does
//! not validate node references; run [`Mesh::check_sanity`] once the mesh is
//! complete.
//!
//! ```rust
//! use mesh3mf::prelude::*;
//!
//! let mut mesh = Mesh::new();
//! {
//!     let mut m = mesh.creation(CreationOptions::with_connectivity());
//!     let a = m.add_node(Point3D::new(0.0, 0.0, 0.0));
//!     let b = m.add_node(Point3D::new(1.0, 0.0, 0.0));
//!     let c = m.add_node(Point3D::new(0.0, 1.0, 0.0));
//!     // coincident with `a`
//!     assert_eq!(m.add_node(Point3D::new(0.0, 0.0, 0.0)), a);
//!     m.add_face(a, b, c).unwrap();
//! }
//! assert!(mesh.check_sanity());
//! assert_eq!(mesh.node_count(), 3);
//! ```

pub mod beam;
pub mod creation;
pub mod face;
mod merge;
pub mod node;

pub use beam::{Beam, BeamLattice, BeamProperties, CapMode};
pub use creation::{CreationGuard, CreationOptions};
pub use face::Face;
pub use node::Node;

use crate::data::handler::InformationHandler;
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;
use crate::topology::point::Point3D;
use crate::topology::validation;
use crate::topology::vector_tree::VectorTree;

/// Triangle mesh with an optional beam lattice and per-face metadata.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    nodes: Vec<Node>,
    faces: Vec<Face>,
    beam_lattice: BeamLattice,
    information_handler: InformationHandler,
    creating: bool,
    vector_tree: Option<VectorTree>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Creation window
    // -------------------------------------------------------------------------

    /// Opens a creation window.
    ///
    /// With `calculate_connectivity`, nodes added until [`end_creation`](Self::end_creation)
    /// are merged with coincident existing nodes. Only one window may be open at a
    /// time; reopening replaces the spatial index of the previous window.
    pub fn start_creation(&mut self, options: CreationOptions) {
        if self.creating {
            log::warn!("start_creation called while a creation window is already open");
        }
        self.creating = true;
        self.vector_tree = options.calculate_connectivity.then(|| {
            let mut tree = VectorTree::new();
            for node in &self.nodes {
                tree.add(node.position, node.index);
            }
            tree
        });
        log::debug!(
            "creation window opened (connectivity={}, nodes={})",
            options.calculate_connectivity,
            self.nodes.len()
        );
    }

    /// Closes the creation window and drops the spatial index. Idempotent.
    pub fn end_creation(&mut self) {
        if self.creating {
            log::debug!(
                "creation window closed (nodes={}, faces={}, beams={})",
                self.nodes.len(),
                self.faces.len(),
                self.beam_lattice.beams.len()
            );
        }
        self.creating = false;
        self.vector_tree = None;
        self.debug_assert_invariants();
    }

    /// Opens a creation window that closes when the returned guard is dropped.
    pub fn creation(&mut self, options: CreationOptions) -> CreationGuard<'_> {
        self.start_creation(options);
        CreationGuard::new(self)
    }

    /// True between [`start_creation`](Self::start_creation) and [`end_creation`](Self::end_creation).
    pub fn is_creating(&self) -> bool {
        self.creating
    }

    /// True while coincident nodes are being merged.
    pub fn is_calculating_connectivity(&self) -> bool {
        self.vector_tree.is_some()
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Adds a node and returns its index.
    ///
    /// While connectivity is being calculated, a node within tolerance of an
    /// existing one is not created; the existing index is returned instead.
    pub fn add_node(&mut self, position: Point3D) -> u32 {
        if let Some(existing) = self.vector_tree.as_ref().and_then(|t| t.find(position)) {
            log::trace!("node {position} merged into {existing}");
            return existing;
        }
        let index = self.nodes.len() as u32;
        self.nodes.push(Node::new(index, position));
        if let Some(tree) = self.vector_tree.as_mut() {
            tree.add(position, index);
        }
        index
    }

    /// Adds a face over three node indices, kept in the given winding order.
    ///
    /// Every information plane grows by one invalidated record. On
    /// `FaceCountMismatch` the mesh is left unchanged.
    pub fn add_face(&mut self, node1: u32, node2: u32, node3: u32) -> Result<u32, MeshError> {
        let index = self.faces.len() as u32;
        self.information_handler.add_face(index + 1)?;
        self.faces.push(Face::new(index, [node1, node2, node3]));
        Ok(index)
    }

    /// Adds a beam between two node indices.
    pub fn add_beam(&mut self, node1: u32, node2: u32, properties: BeamProperties) -> u32 {
        let beams = &mut self.beam_lattice.beams;
        let index = beams.len() as u32;
        beams.push(Beam::new(index, [node1, node2], properties));
        index
    }

    /// Rewrites face `index` so its corner `k` becomes old corner `slots[k]`.
    ///
    /// `slots` must be a permutation of 0, 1 and 2, else
    /// `InvalidCornerPermutation` is returned and nothing changes.
    ///
    /// Per-corner metadata is permuted the same way, so colors and texture
    /// coordinates stay attached to their geometric corner.
    pub fn permute_face(&mut self, index: u32, slots: [u32; 3]) -> Result<(), MeshError> {
        let face_count = self.face_count() as u32;
        if index >= face_count {
            return Err(MeshError::FaceDataIndex { index, face_count });
        }
        self.information_handler
            .permute_node_information(index, slots[0], slots[1], slots[2])?;
        let face = &mut self.faces[index as usize];
        let old = face.node_indices;
        face.node_indices = slots.map(|s| old[s as usize]);
        Ok(())
    }

    /// Reverses the winding of face `index`, keeping its first corner in place.
    pub fn flip_face(&mut self, index: u32) -> Result<(), MeshError> {
        self.permute_face(index, [0, 2, 1])
    }

    /// Removes all nodes, faces, beams and metadata planes.
    ///
    /// An open creation window stays open with an empty spatial index.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.faces.clear();
        self.beam_lattice.beams.clear();
        self.information_handler.clear();
        if self.vector_tree.is_some() {
            self.vector_tree = Some(VectorTree::new());
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn beam_count(&self) -> usize {
        self.beam_lattice.beams.len()
    }

    pub fn node(&self, index: u32) -> Option<&Node> {
        self.nodes.get(index as usize)
    }

    pub fn face(&self, index: u32) -> Option<&Face> {
        self.faces.get(index as usize)
    }

    pub fn beam(&self, index: u32) -> Option<&Beam> {
        self.beam_lattice.beams.get(index as usize)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn beams(&self) -> &[Beam] {
        &self.beam_lattice.beams
    }

    /// Node positions in index order.
    pub fn positions(&self) -> Vec<Point3D> {
        self.nodes.iter().map(|n| n.position).collect()
    }

    /// Beam lattice with its lattice-wide defaults.
    pub fn beam_lattice(&self) -> &BeamLattice {
        &self.beam_lattice
    }

    /// Mutable access to the lattice defaults (`min_length`, `default_radius`, ...).
    pub fn beam_lattice_mut(&mut self) -> &mut BeamLattice {
        &mut self.beam_lattice
    }

    /// Positions of the three nodes of face `index`, in winding order.
    ///
    /// # Panics
    /// Panics if `index` or one of the face's node indices is out of range.
    pub fn face_nodes(&self, index: u32) -> (&Point3D, &Point3D, &Point3D) {
        let [a, b, c] = self.faces[index as usize].node_indices;
        (
            &self.nodes[a as usize].position,
            &self.nodes[b as usize].position,
            &self.nodes[c as usize].position,
        )
    }

    /// True iff every face and beam references nodes in range and every face
    /// references three distinct nodes. An empty mesh is sane.
    pub fn check_sanity(&self) -> bool {
        let node_count = self.nodes.len();
        validation::check_faces_sanity(&self.faces, node_count)
            && validation::check_beams_sanity(&self.beam_lattice.beams, node_count)
    }

    /// True iff the surface is closed, manifold and consistently oriented.
    ///
    /// Meshes with fewer than 4 nodes or 4 faces, or failing
    /// [`check_sanity`](Self::check_sanity), are never manifold. This is
    /// stricter than the bare half-edge parity test, which only looks at
    /// directed edge usage.
    pub fn is_manifold_and_oriented(&self) -> bool {
        if self.nodes.len() < validation::MIN_MANIFOLD_ELEMENTS
            || self.faces.len() < validation::MIN_MANIFOLD_ELEMENTS
            || !self.check_sanity()
        {
            return false;
        }
        validation::is_manifold_and_oriented(&self.faces, self.nodes.len())
    }

    // -------------------------------------------------------------------------
    // Metadata
    // -------------------------------------------------------------------------

    pub fn information_handler(&self) -> &InformationHandler {
        &self.information_handler
    }

    pub fn information_handler_mut(&mut self) -> &mut InformationHandler {
        &mut self.information_handler
    }

    /// Drops every metadata plane.
    pub fn clear_information_handler(&mut self) {
        self.information_handler.clear();
    }
}

impl Mesh {
    /// Every stored element's `index` equals its position.
    fn validate_indices(&self) -> Result<(), MeshError> {
        for (pos, node) in self.nodes.iter().enumerate() {
            if node.index as usize != pos {
                return Err(MeshError::IndexMismatch {
                    kind: "node",
                    position: pos as u32,
                    index: node.index,
                });
            }
        }
        for (pos, face) in self.faces.iter().enumerate() {
            if face.index as usize != pos {
                return Err(MeshError::IndexMismatch {
                    kind: "face",
                    position: pos as u32,
                    index: face.index,
                });
            }
        }
        for (pos, beam) in self.beam_lattice.beams.iter().enumerate() {
            if beam.index as usize != pos {
                return Err(MeshError::IndexMismatch {
                    kind: "beam",
                    position: pos as u32,
                    index: beam.index,
                });
            }
        }
        Ok(())
    }
}

impl DebugInvariants for Mesh {
    /// Asserts the invariants the mesh maintains on its own (element
    /// indices). Plane desyncs are caller errors reported by
    /// [`Mesh::add_face`]; [`validate_invariants`](Self::validate_invariants)
    /// also covers them.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_indices(), "Mesh");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        self.validate_indices()?;
        self.information_handler
            .validate_face_count(self.faces.len() as u32)?;
        self.information_handler.validate_invariants()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::face_data::{BaseMaterial, FaceData, NodeColor, Rgba, TextureCoords};

    fn p(x: f32, y: f32, z: f32) -> Point3D {
        Point3D::new(x, y, z)
    }

    fn tetrahedron() -> Mesh {
        let mut m = Mesh::new();
        for pos in [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 1.0)] {
            m.add_node(pos);
        }
        for [a, b, c] in [[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]] {
            m.add_face(a, b, c).unwrap();
        }
        m
    }

    #[test]
    fn new_mesh_is_sane_but_not_manifold() {
        let m = Mesh::new();
        assert!(m.check_sanity());
        assert!(!m.is_manifold_and_oriented());
        assert!(!m.is_creating());
    }

    #[test]
    fn start_creation_respects_connectivity_flag() {
        let mut m = Mesh::new();
        m.start_creation(CreationOptions::default());
        assert!(m.is_creating());
        assert!(!m.is_calculating_connectivity());
        m.end_creation();

        m.start_creation(CreationOptions::with_connectivity());
        assert!(m.is_calculating_connectivity());
        m.end_creation();
        assert!(!m.is_calculating_connectivity());
        assert!(!m.is_creating());
        // idempotent
        m.end_creation();
    }

    #[test]
    fn add_node_without_window_always_appends() {
        let mut m = Mesh::new();
        let a = m.add_node(p(1.0, 1.0, 1.0));
        let b = m.add_node(p(1.0, 1.0, 1.0));
        assert_ne!(a, b);
        assert_eq!(m.node_count(), 2);
    }

    #[test]
    fn add_node_with_connectivity_merges() {
        let mut m = Mesh::new();
        m.start_creation(CreationOptions::with_connectivity());
        let a = m.add_node(p(1.0, 1.0, 1.0));
        let b = m.add_node(p(1.0, 1.0, 1.000_001));
        let c = m.add_node(p(2.0, 1.0, 1.0));
        m.end_creation();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(m.node_count(), 2);
        // window closed: no more merging
        assert_eq!(m.add_node(p(1.0, 1.0, 1.0)), 2);
    }

    #[test]
    fn connectivity_window_sees_existing_nodes() {
        let mut m = Mesh::new();
        let a = m.add_node(p(3.0, 0.0, 0.0));
        m.start_creation(CreationOptions::with_connectivity());
        assert_eq!(m.add_node(p(3.0, 0.0, 0.0)), a);
        m.end_creation();
    }

    #[test]
    fn guard_closes_window_on_drop() {
        let mut m = Mesh::new();
        {
            let mut g = m.creation(CreationOptions::with_connectivity());
            g.add_node(p(0.0, 0.0, 0.0));
            assert!(g.is_calculating_connectivity());
        }
        assert!(!m.is_creating());
        assert!(!m.is_calculating_connectivity());
    }

    #[test]
    fn guard_closes_window_on_early_return() {
        fn import(m: &mut Mesh) -> Result<(), MeshError> {
            let mut g = m.creation(CreationOptions::with_connectivity());
            g.information_handler_mut().add_base_material_info(5)?;
            g.add_face(0, 1, 2)?;
            Ok(())
        }
        let mut m = Mesh::new();
        assert!(import(&mut m).is_err());
        assert!(!m.is_calculating_connectivity());
    }

    #[test]
    fn face_nodes_follow_face_order() {
        let mut m = Mesh::new();
        let n1 = m.add_node(p(0.0, 0.0, 0.0));
        let n2 = m.add_node(p(20.0, -20.0, 0.0));
        let n3 = m.add_node(p(0.001_998_901_4, 0.001_998_901_4, 0.0));
        let f = m.add_face(n3, n1, n2).unwrap();
        let (a, b, c) = m.face_nodes(f);
        assert_eq!(*a, m.node(n3).unwrap().position);
        assert_eq!(*b, m.node(n1).unwrap().position);
        assert_eq!(*c, m.node(n2).unwrap().position);
    }

    #[test]
    fn sanity_detects_bad_references() {
        let mut m = Mesh::new();
        m.add_face(0, 0, 0).unwrap();
        m.add_face(0, 0, 0).unwrap();
        assert!(!m.check_sanity());

        let mut m = Mesh::new();
        m.add_beam(0, 1, BeamProperties::default());
        assert!(!m.check_sanity());
        m.add_node(p(0.0, 0.0, 0.0));
        m.add_node(p(1.0, 0.0, 0.0));
        assert!(m.check_sanity());
    }

    #[test]
    fn tetrahedron_is_manifold_until_flipped() {
        let mut m = tetrahedron();
        assert!(m.check_sanity());
        assert!(m.is_manifold_and_oriented());
        m.flip_face(3).unwrap();
        assert_eq!(m.face(3).unwrap().node_indices, [1, 2, 3]);
        assert!(!m.is_manifold_and_oriented());
        m.flip_face(3).unwrap();
        assert!(m.is_manifold_and_oriented());
    }

    #[test]
    fn add_face_keeps_planes_in_lockstep() {
        let mut m = tetrahedron();
        let count = m.face_count() as u32;
        m.information_handler_mut().add_base_material_info(count).unwrap();
        m.add_face(0, 1, 3).unwrap();
        let h = m.information_handler();
        assert_eq!(h.information::<BaseMaterial>().unwrap().face_count(), 5);
        m.validate_invariants().unwrap();
    }

    #[test]
    fn desynchronized_plane_blocks_add_face() {
        let mut m = tetrahedron();
        m.information_handler_mut().add_node_color_info(2).unwrap();
        assert_eq!(
            m.add_face(0, 1, 3),
            Err(MeshError::FaceCountMismatch { current: 2, new: 5 })
        );
        assert_eq!(m.face_count(), 4);
        assert!(m.validate_invariants().is_err());
    }

    #[test]
    fn permute_face_moves_corner_metadata() {
        let mut m = tetrahedron();
        let count = m.face_count() as u32;
        let h = m.information_handler_mut();
        h.add_node_color_info(count).unwrap();
        h.add_texture_coords_info(count).unwrap();
        let (r, g, b) = (Rgba::new(255, 0, 0, 255), Rgba::new(0, 255, 0, 255), Rgba::new(0, 0, 255, 255));
        h.set_face_data(0, NodeColor { colors: [r, g, b] }).unwrap();

        m.permute_face(0, [1, 2, 0]).unwrap();
        assert_eq!(m.face(0).unwrap().node_indices, [1, 2, 0]);
        let colors = m.information_handler().face_data::<NodeColor>(0).unwrap().colors;
        assert_eq!(colors, [g, b, r]);
        assert!(!m.information_handler().face_data::<TextureCoords>(0).unwrap().has_data());
    }

    #[test]
    fn permute_face_rejects_bad_input_untouched() {
        let mut m = tetrahedron();
        assert_eq!(
            m.permute_face(4, [0, 1, 2]),
            Err(MeshError::FaceDataIndex { index: 4, face_count: 4 })
        );
        assert_eq!(
            m.permute_face(0, [0, 1, 3]),
            Err(MeshError::InvalidCornerPermutation([0, 1, 3]))
        );
        assert_eq!(m.face(0).unwrap().node_indices, [0, 1, 2]);
    }

    #[test]
    fn permute_face_rejects_repeated_slots() {
        let mut m = tetrahedron();
        assert_eq!(
            m.permute_face(0, [0, 0, 0]),
            Err(MeshError::InvalidCornerPermutation([0, 0, 0]))
        );
        assert_eq!(m.face(0).unwrap().node_indices, [0, 1, 2]);
        assert!(m.check_sanity());
    }

    #[test]
    fn beams_carry_properties() {
        let mut m = Mesh::new();
        let a = m.add_node(p(0.0, 0.0, 0.0));
        let b = m.add_node(p(0.0, 0.0, 5.0));
        let props = BeamProperties {
            radius: [0.5, 0.25],
            cap_mode: [CapMode::Butt, CapMode::Hemisphere],
        };
        let i = m.add_beam(a, b, props);
        assert_eq!(m.beam_count(), 1);
        let beam = m.beam(i).unwrap();
        assert_eq!(beam.node_indices, [a, b]);
        assert_eq!(beam.properties(), props);
        assert!(m.check_sanity());
    }

    #[test]
    fn clear_resets_everything() {
        let mut m = tetrahedron();
        m.add_beam(0, 1, BeamProperties::default());
        m.information_handler_mut().add_base_material_info(4).unwrap();
        m.clear();
        assert_eq!((m.node_count(), m.face_count(), m.beam_count()), (0, 0, 0));
        assert_eq!(m.information_handler().information_count(), 0);
        m.validate_invariants().unwrap();
    }

    #[test]
    fn positions_in_index_order() {
        let m = tetrahedron();
        let pos = m.positions();
        assert_eq!(pos.len(), 4);
        assert_eq!(pos[3], p(0.0, 0.0, 1.0));
    }
}
