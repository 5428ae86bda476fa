//! Triangular faces.

/// A triangle referencing three nodes by index.
///
/// The order of `node_indices` is the face orientation (counter-clockwise
/// seen from outside) and is kept as given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Face {
    /// Position in the face collection.
    pub index: u32,
    /// Node indices in winding order.
    pub node_indices: [u32; 3],
}

impl Face {
    pub fn new(index: u32, node_indices: [u32; 3]) -> Self {
        Face {
            index,
            node_indices,
        }
    }

    /// The three directed edges `(from, to)` in winding order.
    pub fn edges(&self) -> [(u32, u32); 3] {
        let [a, b, c] = self.node_indices;
        [(a, b), (b, c), (c, a)]
    }
}
