//! Data module: per-face metadata planes and their registry

pub mod face_data;
pub mod handler;
pub mod information;

pub use face_data::{BaseMaterial, FaceData, InfoType, NodeColor, Rgba, TextureCoords};
pub use handler::InformationHandler;
pub use information::{FaceInformation, InformationPlane};
