//! Creation window: options and the scoped guard that closes it.

use std::ops::{Deref, DerefMut};

use crate::mesh::Mesh;

/// Options recognized when opening a creation window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreationOptions {
    /// Merge coincident nodes through a spatial index while the window is open.
    pub calculate_connectivity: bool,
}

impl CreationOptions {
    /// Options with node merging enabled.
    pub fn with_connectivity() -> Self {
        CreationOptions {
            calculate_connectivity: true,
        }
    }
}

/// An open creation window on a mesh.
///
/// Derefs to the mesh. Dropping the guard calls [`Mesh::end_creation`], so the
/// spatial index is released on every exit path, `?` and panics included.
#[derive(Debug)]
pub struct CreationGuard<'a> {
    mesh: &'a mut Mesh,
}

impl<'a> CreationGuard<'a> {
    pub(crate) fn new(mesh: &'a mut Mesh) -> Self {
        CreationGuard { mesh }
    }
}

impl Deref for CreationGuard<'_> {
    type Target = Mesh;

    fn deref(&self) -> &Mesh {
        self.mesh
    }
}

impl DerefMut for CreationGuard<'_> {
    fn deref_mut(&mut self) -> &mut Mesh {
        self.mesh
    }
}

impl Drop for CreationGuard<'_> {
    fn drop(&mut self) {
        self.mesh.end_creation();
    }
}
