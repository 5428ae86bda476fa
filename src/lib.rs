#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh3mf
//!
//! mesh3mf is the mesh kernel of a 3D-manufacturing package library. It owns
//! the in-memory representation of triangle meshes and beam lattices, checks
//! their structural invariants, computes connectivity while a mesh is being
//! built, answers manifold/orientation queries, and keeps per-face metadata
//! (materials, texture coordinates, corner colors) in step with the faces.
//!
//! ## Features
//! - Append-only [`Mesh`](mesh::Mesh) with stable node, face and beam indices
//! - Creation windows that merge coincident nodes through a spatial index
//! - Sanity and half-edge parity (manifold + oriented) checks
//! - Type-keyed per-face metadata planes that grow, copy, merge and permute
//!   together with the faces
//!
//! Package readers, model markup decoders and triangle-file codecs are built
//! on top of this crate and are not part of it.
//!
//! ## Invariant checking
//! Debug builds, or builds with the `check-invariants` feature, assert the
//! internal invariants of [`Mesh`](mesh::Mesh) when a creation window closes.
//! [`DebugInvariants::validate_invariants`] runs the full check on demand.
//!
//! ## Threading
//! Everything is synchronous and lock-free. A mesh may be moved between
//! threads, but mutation of one mesh must be serialized by the caller.

pub mod data;
pub mod debug_invariants;
pub mod mesh;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::data::face_data::{BaseMaterial, FaceData, InfoType, NodeColor, Rgba, TextureCoords};
    pub use crate::data::handler::InformationHandler;
    pub use crate::data::information::{FaceInformation, InformationPlane};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mesh::{
        Beam, BeamLattice, BeamProperties, CapMode, CreationGuard, CreationOptions, Face, Mesh,
        Node,
    };
    pub use crate::mesh_error::MeshError;
    pub use crate::topology::pair_match::PairMatch;
    pub use crate::topology::point::Point3D;
    pub use crate::topology::vector_tree::{VECTOR_TREE_TOLERANCE, VectorTree};
}
