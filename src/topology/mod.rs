//! Topology primitives shared by the mesh kernel.
//!
//! - [`point::Point3D`]: node positions
//! - [`pair_match::PairMatch`]: unordered index pair lookup used for edge bookkeeping
//! - [`vector_tree::VectorTree`]: spatial merge index for coincident nodes
//! - [`validation`]: sanity and manifold/orientation predicates

pub mod pair_match;
pub mod point;
pub mod validation;
pub mod vector_tree;

pub use pair_match::{PairEntry, PairMatch};
pub use point::Point3D;
pub use vector_tree::{VECTOR_TREE_TOLERANCE, VectorTree};
