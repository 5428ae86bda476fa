//! Per-face metadata records and their stable type tags.
//!
//! Each record type implements [`FaceData`], which ties it to one
//! [`InfoType`] tag and one [`InformationPlane`] variant. The handler keys
//! planes by that tag; no runtime type inspection is involved.

use std::fmt;

use crate::data::information::{FaceInformation, InformationPlane};

/// Stable identifier of a metadata record type.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum InfoType {
    /// Reference into a base-material group.
    BaseMaterial,
    /// Per-corner texture coordinates.
    TextureCoords,
    /// Per-corner colors.
    NodeColor,
}

impl InfoType {
    /// All known tags, in registry order.
    pub const ALL: [InfoType; 3] = [
        InfoType::BaseMaterial,
        InfoType::TextureCoords,
        InfoType::NodeColor,
    ];

    /// Returns a stable string label for the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            InfoType::BaseMaterial => "base-material",
            InfoType::TextureCoords => "texture-coords",
            InfoType::NodeColor => "node-color",
        }
    }

    /// Parse a tag from its string label.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "base-material" => Some(InfoType::BaseMaterial),
            "texture-coords" => Some(InfoType::TextureCoords),
            "node-color" => Some(InfoType::NodeColor),
            _ => None,
        }
    }
}

impl fmt::Display for InfoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed-size metadata record stored once per face.
pub trait FaceData: Clone + Default + fmt::Debug + PartialEq + Sized + 'static {
    /// Tag for this record type.
    const INFO_TYPE: InfoType;

    /// Reset to the invalidated state new faces start in.
    fn invalidate(&mut self) {
        *self = Self::default();
    }

    /// True once the record has been populated.
    fn has_data(&self) -> bool;

    /// Reorder per-corner sub-fields so corner `k` takes the old value at `order[k]`.
    ///
    /// Records without per-corner data keep the default no-op. `order` entries
    /// are already checked to be below 3.
    fn permute(&mut self, _order: [usize; 3]) {}

    /// Wrap a typed plane into the tagged container.
    fn wrap(info: FaceInformation<Self>) -> InformationPlane;
    /// Borrow a typed plane if the tag matches.
    fn unwrap(plane: &InformationPlane) -> Option<&FaceInformation<Self>>;
    /// Mutably borrow a typed plane if the tag matches.
    fn unwrap_mut(plane: &mut InformationPlane) -> Option<&mut FaceInformation<Self>>;
}

#[inline]
fn permute_corners<T: Copy>(corners: &mut [T; 3], order: [usize; 3]) {
    *corners = [corners[order[0]], corners[order[1]], corners[order[2]]];
}

/// Reference to one material of a base-material group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BaseMaterial {
    /// Resource id of the base-material group; 0 means unset.
    pub group_id: u32,
    /// Material index inside the group.
    pub index: u32,
}

impl FaceData for BaseMaterial {
    const INFO_TYPE: InfoType = InfoType::BaseMaterial;

    fn has_data(&self) -> bool {
        self.group_id != 0
    }

    fn wrap(info: FaceInformation<Self>) -> InformationPlane {
        InformationPlane::BaseMaterial(info)
    }

    fn unwrap(plane: &InformationPlane) -> Option<&FaceInformation<Self>> {
        if let InformationPlane::BaseMaterial(info) = plane {
            Some(info)
        } else {
            None
        }
    }

    fn unwrap_mut(plane: &mut InformationPlane) -> Option<&mut FaceInformation<Self>> {
        if let InformationPlane::BaseMaterial(info) = plane {
            Some(info)
        } else {
            None
        }
    }
}

/// Texture coordinates for the three corners of a face.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextureCoords {
    /// Resource id of the texture; 0 means unset.
    pub texture_id: u32,
    /// `(u, v)` per corner, in face node order.
    pub coords: [[f32; 2]; 3],
}

impl FaceData for TextureCoords {
    const INFO_TYPE: InfoType = InfoType::TextureCoords;

    fn has_data(&self) -> bool {
        self.texture_id != 0
    }

    fn permute(&mut self, order: [usize; 3]) {
        permute_corners(&mut self.coords, order);
    }

    fn wrap(info: FaceInformation<Self>) -> InformationPlane {
        InformationPlane::TextureCoords(info)
    }

    fn unwrap(plane: &InformationPlane) -> Option<&FaceInformation<Self>> {
        if let InformationPlane::TextureCoords(info) = plane {
            Some(info)
        } else {
            None
        }
    }

    fn unwrap_mut(plane: &mut InformationPlane) -> Option<&mut FaceInformation<Self>> {
        if let InformationPlane::TextureCoords(info) = plane {
            Some(info)
        } else {
            None
        }
    }
}

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// `#rrggbbaa`, lowercase, zero padded.
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Colors for the three corners of a face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct NodeColor {
    /// One color per corner, in face node order.
    pub colors: [Rgba; 3],
}

impl FaceData for NodeColor {
    const INFO_TYPE: InfoType = InfoType::NodeColor;

    fn has_data(&self) -> bool {
        self.colors.iter().any(|c| *c != Rgba::default())
    }

    fn permute(&mut self, order: [usize; 3]) {
        permute_corners(&mut self.colors, order);
    }

    fn wrap(info: FaceInformation<Self>) -> InformationPlane {
        InformationPlane::NodeColor(info)
    }

    fn unwrap(plane: &InformationPlane) -> Option<&FaceInformation<Self>> {
        if let InformationPlane::NodeColor(info) = plane {
            Some(info)
        } else {
            None
        }
    }

    fn unwrap_mut(plane: &mut InformationPlane) -> Option<&mut FaceInformation<Self>> {
        if let InformationPlane::NodeColor(info) = plane {
            Some(info)
        } else {
            None
        }
    }
}
