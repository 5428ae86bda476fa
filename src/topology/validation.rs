//! Topology validation helpers.
//!
//! Both checks are total predicates: any face/beam list, however malformed,
//! yields `true` or `false` and never an error or a panic.

use crate::mesh::beam::Beam;
use crate::mesh::face::Face;
use crate::topology::pair_match::PairMatch;

/// Smallest closed triangulated solid (a tetrahedron) has this many nodes and faces.
pub const MIN_MANIFOLD_ELEMENTS: usize = 4;

/// True iff every face references three distinct nodes below `node_count`.
pub fn check_faces_sanity(faces: &[Face], node_count: usize) -> bool {
    faces.iter().all(|face| {
        let [i0, i1, i2] = face.node_indices;
        i0 != i1
            && i0 != i2
            && i1 != i2
            && in_range(i0, node_count)
            && in_range(i1, node_count)
            && in_range(i2, node_count)
    })
}

/// True iff every beam references two nodes below `node_count`.
pub fn check_beams_sanity(beams: &[Beam], node_count: usize) -> bool {
    beams.iter().all(|beam| {
        let [i0, i1] = beam.node_indices;
        in_range(i0, node_count) && in_range(i1, node_count)
    })
}

/// Half-edge parity test for a closed, consistently oriented, manifold surface.
///
/// Every undirected edge must be traversed exactly once in each direction.
/// Callers are expected to have run [`check_faces_sanity`] first; indices are
/// only used as keys here, so malformed input just fails the test.
pub fn is_manifold_and_oriented(faces: &[Face], node_count: usize) -> bool {
    if node_count < MIN_MANIFOLD_ELEMENTS || faces.len() < MIN_MANIFOLD_ELEMENTS {
        return false;
    }

    let mut edges = PairMatch::with_capacity(faces.len() * 3 / 2);
    // [forward (low → high), backward (high → low)] traversal counts per edge id
    let mut usage: Vec<[u8; 2]> = Vec::with_capacity(faces.len() * 3 / 2);

    for face in faces {
        for (n1, n2) in face.edges() {
            if n1 == n2 {
                return false;
            }
            let edge = match edges.check_match(n1, n2) {
                Some(edge) => edge as usize,
                None => {
                    let edge = usage.len();
                    edges.add_match(n1, n2, edge as u32);
                    usage.push([0, 0]);
                    edge
                }
            };
            let slot = usize::from(n1 > n2);
            if usage[edge][slot] > 0 {
                log::trace!("edge ({n1}, {n2}) traversed twice in the same direction");
                return false;
            }
            usage[edge][slot] = 1;
        }
    }

    // every edge has at most one use per direction here; open edges have only one
    usage.iter().all(|&[fwd, bwd]| fwd == 1 && bwd == 1)
}

#[inline]
fn in_range(index: u32, node_count: usize) -> bool {
    (index as usize) < node_count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces(list: &[[u32; 3]]) -> Vec<Face> {
        list.iter()
            .enumerate()
            .map(|(i, &n)| Face::new(i as u32, n))
            .collect()
    }

    const TETRA: [[u32; 3]; 4] = [[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]];

    #[test]
    fn empty_lists_are_sane() {
        assert!(check_faces_sanity(&[], 0));
        assert!(check_beams_sanity(&[], 0));
    }

    #[test]
    fn zeroed_faces_fail_sanity() {
        assert!(!check_faces_sanity(&faces(&[[0, 0, 0], [0, 0, 0]]), 0));
        assert!(!check_faces_sanity(&faces(&[[0, 1, 1]]), 3));
        assert!(!check_faces_sanity(&faces(&[[0, 1, 3]]), 3));
        assert!(check_faces_sanity(&faces(&[[0, 1, 2]]), 3));
    }

    #[test]
    fn beam_bounds() {
        let ok = Beam::new(0, [0, 1], Default::default());
        let bad = Beam::new(1, [0, 2], Default::default());
        assert!(check_beams_sanity(&[ok.clone()], 2));
        assert!(!check_beams_sanity(&[ok, bad], 2));
    }

    #[test]
    fn tetrahedron_is_manifold() {
        assert!(is_manifold_and_oriented(&faces(&TETRA), 4));
    }

    #[test]
    fn same_direction_edges_fail() {
        let list = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];
        assert!(!is_manifold_and_oriented(&faces(&list), 4));
    }

    #[test]
    fn one_flipped_face_fails() {
        let mut list = TETRA;
        list[3] = [1, 2, 3];
        assert!(!is_manifold_and_oriented(&faces(&list), 4));
    }

    #[test]
    fn open_surface_fails() {
        // a repeated face walks its edges twice in the same direction
        let list = [[0, 1, 2], [0, 3, 1], [0, 2, 3], [0, 2, 3]];
        assert!(!is_manifold_and_oriented(&faces(&list), 4));
        // open fan: rim edges are used once
        let fan = [[0, 1, 2], [0, 2, 3], [0, 3, 4], [0, 4, 5]];
        assert!(!is_manifold_and_oriented(&faces(&fan), 6));
    }

    #[test]
    fn too_small_fails() {
        assert!(!is_manifold_and_oriented(&[], 0));
        assert!(!is_manifold_and_oriented(&faces(&TETRA[..3]), 4));
        assert!(!is_manifold_and_oriented(&faces(&TETRA), 3));
    }

    #[test]
    fn degenerate_face_fails_without_panicking() {
        let list = [[0, 0, 1], [0, 3, 1], [0, 2, 3], [1, 3, 2]];
        assert!(!is_manifold_and_oriented(&faces(&list), 4));
    }
}
