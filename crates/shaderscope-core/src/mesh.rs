//! Meshes that reference a shader program.

use std::fmt;

/// Handle to a mesh held by the [`ProgramStore`](crate::store::ProgramStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub u32);

impl fmt::Display for MeshId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A renderable mesh.
///
/// `visible` and `wireframe` are the two visual flags the inspector drives.
/// They are written only through
/// [`ProgramStore::apply_intent`](crate::store::ProgramStore::apply_intent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mesh {
    pub name: String,
    /// Geometry type name, e.g. `BoxGeometry`.
    pub geometry_type: String,
    pub visible: bool,
    /// Wireframe override on the mesh's material.
    pub wireframe: bool,
}

impl Mesh {
    /// Creates a visible, filled mesh.
    pub fn new(name: impl Into<String>, geometry_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            geometry_type: geometry_type.into(),
            visible: true,
            wireframe: false,
        }
    }
}
