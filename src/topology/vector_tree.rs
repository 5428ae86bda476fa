//! Spatial merge index used while a mesh is being built with connectivity.
//!
//! Positions are bucketed into a hash grid whose cell edge equals the merge
//! tolerance. A lookup probes the 3×3×3 block of cells around the query, so
//! two points closer than the tolerance on every axis always find each other
//! even when they straddle a cell boundary.
//!
//! The index only grows. It is dropped as a whole when the creation window
//! closes and never affects nodes already stored in the mesh.

use hashbrown::HashMap;
use itertools::iproduct;

use crate::topology::point::Point3D;

/// Per-axis distance under which two positions are the same node, in model units.
pub const VECTOR_TREE_TOLERANCE: f32 = 1.0e-5;

type CellKey = (i64, i64, i64);

/// Hash grid mapping positions to node indices.
#[derive(Clone, Debug)]
pub struct VectorTree {
    tolerance: f32,
    cells: HashMap<CellKey, Vec<(Point3D, u32)>>,
    len: usize,
}

impl Default for VectorTree {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorTree {
    /// Creates an empty index with [`VECTOR_TREE_TOLERANCE`].
    pub fn new() -> Self {
        Self::with_tolerance(VECTOR_TREE_TOLERANCE)
    }

    /// Creates an empty index merging points within `tolerance` per axis.
    ///
    /// # Panics
    /// Panics if `tolerance` is not a positive finite number.
    pub fn with_tolerance(tolerance: f32) -> Self {
        assert!(
            tolerance.is_finite() && tolerance > 0.0,
            "vector tree tolerance must be positive and finite"
        );
        VectorTree {
            tolerance,
            cells: HashMap::new(),
            len: 0,
        }
    }

    /// Merge tolerance of this index.
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Number of indexed positions.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been indexed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the index of the closest stored position within tolerance of `point`.
    ///
    /// Ties are broken by the lower node index.
    pub fn find(&self, point: Point3D) -> Option<u32> {
        let (cx, cy, cz) = self.cell_of(point);
        let mut best: Option<(f32, u32)> = None;
        for (dx, dy, dz) in iproduct!(-1i64..=1, -1i64..=1, -1i64..=1) {
            let key = (
                cx.saturating_add(dx),
                cy.saturating_add(dy),
                cz.saturating_add(dz),
            );
            let Some(bucket) = self.cells.get(&key) else {
                continue;
            };
            for &(stored, index) in bucket {
                let dist = stored.max_axis_distance(&point);
                if dist > self.tolerance {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some((best_dist, best_index)) => {
                        dist < best_dist || (dist == best_dist && index < best_index)
                    }
                };
                if better {
                    best = Some((dist, index));
                }
            }
        }
        best.map(|(_, index)| index)
    }

    /// Records `index` as the node living at `point`.
    pub fn add(&mut self, point: Point3D, index: u32) {
        let key = self.cell_of(point);
        self.cells.entry(key).or_default().push((point, index));
        self.len += 1;
    }

    fn cell_of(&self, point: Point3D) -> CellKey {
        // float-to-int casts saturate, so huge or NaN coordinates still land in a cell
        let q = |v: f32| (f64::from(v) / f64::from(self.tolerance)).floor() as i64;
        (q(point.x()), q(point.y()), q(point.z()))
    }
}
