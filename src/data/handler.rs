//! InformationHandler: registry of per-face metadata planes.
//!
//! The handler owns at most one [`InformationPlane`] per [`InfoType`] and keeps
//! every plane's record count equal to the owning mesh's face count. Each
//! registered plane receives an identifier from a counter owned by the
//! handler instance, so independent meshes never share identifier state.
//!
//! Planes are never lent out mutably; callers read records through
//! [`face_data`](InformationHandler::face_data) and write them through
//! [`set_face_data`](InformationHandler::set_face_data) or the broadcast
//! operations.

use std::collections::BTreeMap;

use crate::data::face_data::{BaseMaterial, FaceData, InfoType, NodeColor, TextureCoords};
use crate::data::information::{FaceInformation, InformationPlane};
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;

/// Exclusive upper bound of plane identifiers.
pub const MAX_INTERNAL_ID: u64 = u64::MAX;

/// Registry of information planes keyed by record type.
#[derive(Clone, Debug, PartialEq)]
pub struct InformationHandler {
    internal_id_counter: u64,
    lookup: BTreeMap<InfoType, InformationPlane>,
}

impl Default for InformationHandler {
    fn default() -> Self {
        InformationHandler {
            internal_id_counter: 1,
            lookup: BTreeMap::new(),
        }
    }
}

impl InformationHandler {
    /// Creates an empty handler; the first registered plane gets identifier 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `plane`, assigning it the next internal identifier.
    ///
    /// A plane of the same type already present is replaced.
    pub fn add_information_plane(&mut self, mut plane: InformationPlane) -> Result<(), MeshError> {
        if self.internal_id_counter >= MAX_INTERNAL_ID {
            return Err(MeshError::HandlerOverflow);
        }
        let id = self.internal_id_counter;
        plane.set_internal_id(id);
        self.internal_id_counter += 1;
        let info_type = plane.info_type();
        log::debug!(
            "registering {info_type} plane id={id} with {} records",
            plane.face_count()
        );
        if let Some(old) = self.lookup.insert(info_type, plane) {
            log::warn!(
                "replaced {info_type} plane id={} holding {} records",
                old.internal_id(),
                old.face_count()
            );
        }
        Ok(())
    }

    /// Registers a plane of `T` with `current_face_count` invalidated records.
    pub fn add_information<T: FaceData>(&mut self, current_face_count: u32) -> Result<(), MeshError> {
        self.add_information_plane(T::wrap(FaceInformation::new(current_face_count)))
    }

    /// Registers a base-material plane.
    pub fn add_base_material_info(&mut self, current_face_count: u32) -> Result<(), MeshError> {
        self.add_information::<BaseMaterial>(current_face_count)
    }

    /// Registers a texture-coordinate plane.
    pub fn add_texture_coords_info(&mut self, current_face_count: u32) -> Result<(), MeshError> {
        self.add_information::<TextureCoords>(current_face_count)
    }

    /// Registers a per-corner color plane.
    pub fn add_node_color_info(&mut self, current_face_count: u32) -> Result<(), MeshError> {
        self.add_information::<NodeColor>(current_face_count)
    }

    /// Grows every plane to `new_face_count` records.
    ///
    /// All planes are checked before any of them grows, so on
    /// `FaceCountMismatch` nothing has changed.
    pub fn add_face(&mut self, new_face_count: u32) -> Result<(), MeshError> {
        for plane in self.lookup.values() {
            plane.check_add_face(new_face_count)?;
        }
        for plane in self.lookup.values_mut() {
            plane.add_face_data(new_face_count)?;
        }
        Ok(())
    }

    /// Adopts the plane types of `other` that this handler lacks.
    ///
    /// Types already present keep their own data. Adopted planes hold
    /// `current_face_count` invalidated records and a fresh identifier. If
    /// the identifiers run out nothing is adopted.
    pub fn add_info_from_table(
        &mut self,
        other: &InformationHandler,
        current_face_count: u32,
    ) -> Result<(), MeshError> {
        let missing: Vec<&InformationPlane> = other
            .lookup
            .iter()
            .filter(|(info_type, _)| !self.lookup.contains_key(*info_type))
            .map(|(_, plane)| plane)
            .collect();
        // identifiers for every adopted plane must be available up front
        match self.internal_id_counter.checked_add(missing.len() as u64) {
            Some(end) if end <= MAX_INTERNAL_ID => {}
            _ => return Err(MeshError::HandlerOverflow),
        }
        for plane in missing {
            self.add_information_plane(plane.clone_with_face_count(current_face_count))?;
        }
        Ok(())
    }

    /// Copies the record of `other_face_index` in `other` into `face_index`,
    /// for every plane type both handlers own.
    pub fn clone_face_infos_from(
        &mut self,
        face_index: u32,
        other: &InformationHandler,
        other_face_index: u32,
    ) -> Result<(), MeshError> {
        for (info_type, plane) in self.lookup.iter_mut() {
            if let Some(source) = other.lookup.get(info_type) {
                plane.clone_face_info_from(face_index, source, other_face_index)?;
            }
        }
        Ok(())
    }

    /// Invalidates the record of `face_index` in every plane.
    pub fn reset_face_information(&mut self, face_index: u32) -> Result<(), MeshError> {
        for plane in self.lookup.values_mut() {
            plane.reset_face_information(face_index)?;
        }
        Ok(())
    }

    /// Unregisters the plane of `info_type`; absent types are ignored.
    pub fn remove_information(&mut self, info_type: InfoType) {
        if self.lookup.remove(&info_type).is_some() {
            log::debug!("removed {info_type} plane");
        }
    }

    /// Unregisters every plane. The identifier counter keeps running.
    pub fn clear(&mut self) {
        self.lookup.clear();
    }

    /// Reorders per-corner data of `face_index` so corner `k` takes old corner `slots[k]`.
    ///
    /// The slots must be a permutation of 0, 1 and 2.
    pub fn permute_node_information(
        &mut self,
        face_index: u32,
        slot1: u32,
        slot2: u32,
        slot3: u32,
    ) -> Result<(), MeshError> {
        let slots = [slot1, slot2, slot3];
        let mut sorted = slots;
        sorted.sort_unstable();
        if sorted != [0, 1, 2] {
            return Err(MeshError::InvalidCornerPermutation(slots));
        }
        let order = slots.map(|s| s as usize);
        for plane in self.lookup.values_mut() {
            plane.permute_node_information(face_index, order)?;
        }
        Ok(())
    }

    /// Registered plane types in ascending tag order.
    pub fn info_types(&self) -> Vec<InfoType> {
        self.lookup.keys().copied().collect()
    }

    /// Number of registered planes.
    pub fn information_count(&self) -> usize {
        self.lookup.len()
    }

    /// Returns true if a plane of `info_type` is registered.
    pub fn has_information(&self, info_type: InfoType) -> bool {
        self.lookup.contains_key(&info_type)
    }

    /// Borrow the tagged plane of `info_type`.
    pub fn information_by_type(&self, info_type: InfoType) -> Option<&InformationPlane> {
        self.lookup.get(&info_type)
    }

    /// Borrow the typed plane of `T`.
    pub fn information<T: FaceData>(&self) -> Option<&FaceInformation<T>> {
        self.lookup.get(&T::INFO_TYPE).and_then(T::unwrap)
    }

    /// Record of `T` for `face_index`.
    pub fn face_data<T: FaceData>(&self, face_index: u32) -> Result<&T, MeshError> {
        self.information::<T>()
            .ok_or(MeshError::MissingInformation(T::INFO_TYPE))?
            .face_data(face_index)
    }

    /// Overwrites the record of `T` for `face_index`.
    pub fn set_face_data<T: FaceData>(&mut self, face_index: u32, record: T) -> Result<(), MeshError> {
        let info = self
            .lookup
            .get_mut(&T::INFO_TYPE)
            .and_then(T::unwrap_mut)
            .ok_or(MeshError::MissingInformation(T::INFO_TYPE))?;
        *info.face_data_mut(face_index)? = record;
        Ok(())
    }

    /// Checks that every plane holds exactly `face_count` records.
    pub fn validate_face_count(&self, face_count: u32) -> Result<(), MeshError> {
        for plane in self.lookup.values() {
            if plane.face_count() != face_count {
                return Err(MeshError::FaceCountMismatch {
                    current: plane.face_count(),
                    new: face_count,
                });
            }
        }
        Ok(())
    }
}

impl DebugInvariants for InformationHandler {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "InformationHandler");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        // all planes describe the same face set
        if let Some(first) = self.lookup.values().next() {
            self.validate_face_count(first.face_count())?;
        }
        for plane in self.lookup.values() {
            if plane.internal_id() >= self.internal_id_counter {
                return Err(MeshError::InternalIdOutOfRange {
                    id: plane.internal_id(),
                    counter: self.internal_id_counter,
                });
            }
        }
        Ok(())
    }
}
