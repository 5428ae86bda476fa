//! MeshError: unified error type for mesh3mf public APIs
//!
//! Structural faults (out-of-range or repeated node indices) are never
//! reported here; they are detected by [`Mesh::check_sanity`](crate::mesh::Mesh::check_sanity).
//! Every variant below is returned to the immediate caller and nothing is
//! retried internally.

use thiserror::Error;

use crate::data::face_data::InfoType;

/// Unified error type for mesh3mf operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The handler's internal plane identifier space is exhausted.
    #[error("information handler overflow: no internal identifiers left")]
    HandlerOverflow,
    /// A plane's record count drifted away from the mesh face count.
    #[error(
        "mesh information face count ({current}) does not match with mesh face count ({new})"
    )]
    FaceCountMismatch {
        /// Records currently stored by the plane.
        current: u32,
        /// Face count the plane was asked to grow to.
        new: u32,
    },
    /// Metadata accessed with a face index past the end of the plane.
    #[error("could not access face data ({index} >= {face_count})")]
    FaceDataIndex {
        /// Requested face index.
        index: u32,
        /// Number of records in the plane.
        face_count: u32,
    },
    /// Typed access to a plane that is not registered.
    #[error("no information plane of type {0} registered")]
    MissingInformation(InfoType),
    /// Corner slots were not a permutation of 0, 1 and 2.
    #[error("invalid corner permutation {0:?}: slots must be 0, 1 and 2 in some order")]
    InvalidCornerPermutation([u32; 3]),
    /// A registered plane carries an identifier the handler never issued.
    #[error("plane identifier {id} is not below the handler counter {counter}")]
    InternalIdOutOfRange {
        /// Identifier stored in the plane.
        id: u64,
        /// Next identifier the handler would issue.
        counter: u64,
    },
    /// A mesh being merged references a node it does not have.
    #[error("node index {index} out of range (node count {node_count})")]
    NodeIndexOutOfRange {
        /// Offending node index.
        index: u32,
        /// Nodes available in the source mesh.
        node_count: u32,
    },
    /// A stored element's index disagrees with its position.
    #[error("{kind} at position {position} carries index {index}")]
    IndexMismatch {
        /// Element collection: "node", "face" or "beam".
        kind: &'static str,
        /// Position in the collection.
        position: u32,
        /// Index stored in the element.
        index: u32,
    },
}
