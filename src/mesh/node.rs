//! Mesh nodes.

use crate::topology::point::Point3D;

/// A vertex of the mesh: its position plus its stable index.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    /// Position in the node collection; never changes after insertion.
    pub index: u32,
    /// Position in model units.
    pub position: Point3D,
}

impl Node {
    pub fn new(index: u32, position: Point3D) -> Self {
        Node { index, position }
    }
}
