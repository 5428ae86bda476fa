//! Information planes: one metadata record per face.
//!
//! [`FaceInformation<T>`] is the typed storage for a single record type.
//! [`InformationPlane`] is the tagged container the handler keeps, exposing
//! the uniform capability set (grow, reset, permute, copy, clone) without the
//! caller knowing the concrete record type.

use crate::data::face_data::{BaseMaterial, FaceData, InfoType, NodeColor, TextureCoords};
use crate::mesh_error::MeshError;

/// Typed per-face record storage.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FaceInformation<T> {
    internal_id: u64,
    faces: Vec<T>,
}

impl<T: FaceData> FaceInformation<T> {
    /// Creates a plane holding `face_count` invalidated records.
    ///
    /// The internal identifier stays 0 until a handler registers the plane.
    pub fn new(face_count: u32) -> Self {
        FaceInformation {
            internal_id: 0,
            faces: vec![T::default(); face_count as usize],
        }
    }

    /// Identifier assigned by the owning handler.
    pub fn internal_id(&self) -> u64 {
        self.internal_id
    }

    pub(crate) fn set_internal_id(&mut self, id: u64) {
        self.internal_id = id;
    }

    /// Number of stored records.
    pub fn face_count(&self) -> u32 {
        self.faces.len() as u32
    }

    /// Record for face `index`.
    pub fn face_data(&self, index: u32) -> Result<&T, MeshError> {
        let face_count = self.face_count();
        self.faces
            .get(index as usize)
            .ok_or(MeshError::FaceDataIndex { index, face_count })
    }

    pub(crate) fn face_data_mut(&mut self, index: u32) -> Result<&mut T, MeshError> {
        let face_count = self.face_count();
        self.faces
            .get_mut(index as usize)
            .ok_or(MeshError::FaceDataIndex { index, face_count })
    }

    /// Iterate over all records in face order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.faces.iter()
    }

    /// Checks that growing to `new_face_count` adds exactly one record.
    pub fn check_add_face(&self, new_face_count: u32) -> Result<(), MeshError> {
        let current = self.face_count();
        if current.checked_add(1) != Some(new_face_count) {
            return Err(MeshError::FaceCountMismatch {
                current,
                new: new_face_count,
            });
        }
        Ok(())
    }

    /// Appends one record for the face that brings the mesh to `new_face_count`.
    ///
    /// The returned record is in its default state; the handler invalidates it.
    pub fn add_face_data(&mut self, new_face_count: u32) -> Result<&mut T, MeshError> {
        self.check_add_face(new_face_count)?;
        let slot = self.faces.len();
        self.faces.push(T::default());
        Ok(&mut self.faces[slot])
    }

    /// Copies the record at `other_index` of `other` into `index`.
    pub fn clone_face_info_from(
        &mut self,
        index: u32,
        other: &FaceInformation<T>,
        other_index: u32,
    ) -> Result<(), MeshError> {
        let source = other.face_data(other_index)?.clone();
        *self.face_data_mut(index)? = source;
        Ok(())
    }

    /// Puts the record at `index` back into its invalidated state.
    pub fn reset_face_information(&mut self, index: u32) -> Result<(), MeshError> {
        self.face_data_mut(index)?.invalidate();
        Ok(())
    }

    /// Reorders the per-corner data of the record at `index`.
    pub fn permute_node_information(
        &mut self,
        index: u32,
        order: [usize; 3],
    ) -> Result<(), MeshError> {
        self.face_data_mut(index)?.permute(order);
        Ok(())
    }

    /// A fresh plane of the same record type with `face_count` invalidated records.
    ///
    /// Record contents are not copied; use [`clone_face_info_from`](Self::clone_face_info_from)
    /// for that.
    pub fn clone_with_face_count(&self, face_count: u32) -> Self {
        Self::new(face_count)
    }
}

/// Tagged, type-erased information plane.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum InformationPlane {
    BaseMaterial(FaceInformation<BaseMaterial>),
    TextureCoords(FaceInformation<TextureCoords>),
    NodeColor(FaceInformation<NodeColor>),
}

macro_rules! dispatch {
    ($plane:expr, $info:ident => $body:expr) => {
        match $plane {
            InformationPlane::BaseMaterial($info) => $body,
            InformationPlane::TextureCoords($info) => $body,
            InformationPlane::NodeColor($info) => $body,
        }
    };
}

impl InformationPlane {
    /// Tag of the record type stored in this plane.
    pub fn info_type(&self) -> InfoType {
        match self {
            InformationPlane::BaseMaterial(_) => InfoType::BaseMaterial,
            InformationPlane::TextureCoords(_) => InfoType::TextureCoords,
            InformationPlane::NodeColor(_) => InfoType::NodeColor,
        }
    }

    /// Identifier assigned by the owning handler.
    pub fn internal_id(&self) -> u64 {
        dispatch!(self, info => info.internal_id())
    }

    pub(crate) fn set_internal_id(&mut self, id: u64) {
        dispatch!(self, info => info.set_internal_id(id))
    }

    /// Number of stored records.
    pub fn face_count(&self) -> u32 {
        dispatch!(self, info => info.face_count())
    }

    /// Checks that growing to `new_face_count` adds exactly one record.
    pub fn check_add_face(&self, new_face_count: u32) -> Result<(), MeshError> {
        dispatch!(self, info => info.check_add_face(new_face_count))
    }

    /// Appends one invalidated record.
    pub fn add_face_data(&mut self, new_face_count: u32) -> Result<(), MeshError> {
        dispatch!(self, info => {
            info.add_face_data(new_face_count)?.invalidate();
            Ok(())
        })
    }

    /// Invalidates the record at `index`.
    pub fn reset_face_information(&mut self, index: u32) -> Result<(), MeshError> {
        dispatch!(self, info => info.reset_face_information(index))
    }

    /// Reorders the per-corner data of the record at `index`.
    pub fn permute_node_information(
        &mut self,
        index: u32,
        order: [usize; 3],
    ) -> Result<(), MeshError> {
        dispatch!(self, info => info.permute_node_information(index, order))
    }

    /// A fresh plane of the same type with `face_count` invalidated records.
    pub fn clone_with_face_count(&self, face_count: u32) -> InformationPlane {
        match self {
            InformationPlane::BaseMaterial(info) => {
                InformationPlane::BaseMaterial(info.clone_with_face_count(face_count))
            }
            InformationPlane::TextureCoords(info) => {
                InformationPlane::TextureCoords(info.clone_with_face_count(face_count))
            }
            InformationPlane::NodeColor(info) => {
                InformationPlane::NodeColor(info.clone_with_face_count(face_count))
            }
        }
    }

    /// Copies one record from a plane of the same type.
    ///
    /// Planes of different types have nothing in common; the call is a no-op.
    pub fn clone_face_info_from(
        &mut self,
        index: u32,
        other: &InformationPlane,
        other_index: u32,
    ) -> Result<(), MeshError> {
        match (self, other) {
            (InformationPlane::BaseMaterial(own), InformationPlane::BaseMaterial(src)) => {
                own.clone_face_info_from(index, src, other_index)
            }
            (InformationPlane::TextureCoords(own), InformationPlane::TextureCoords(src)) => {
                own.clone_face_info_from(index, src, other_index)
            }
            (InformationPlane::NodeColor(own), InformationPlane::NodeColor(src)) => {
                own.clone_face_info_from(index, src, other_index)
            }
            _ => Ok(()),
        }
    }
}
