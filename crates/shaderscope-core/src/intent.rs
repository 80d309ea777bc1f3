//! Per-program display intent.
//!
//! Expanding a row, hovering its visibility toggle, and clicking that toggle
//! all affect the same mesh flags. Instead of each handler writing to the
//! meshes, every handler edits the program's [`DisplayIntent`] and the store
//! derives the mesh flags from it in one place.

/// What the user currently wants to see for one program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayIntent {
    /// Whether the row's details are expanded.
    pub expanded: bool,
    /// Whether the program's meshes are drawn.
    pub visible: bool,
    /// Whether the program's meshes are highlighted in wireframe.
    pub highlighted: bool,
}

impl Default for DisplayIntent {
    fn default() -> Self {
        Self {
            expanded: false,
            visible: true,
            highlighted: false,
        }
    }
}

impl DisplayIntent {
    /// Flips the expansion flag. Any hover highlight is dropped.
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
        self.highlighted = false;
    }

    /// Flips the visibility flag.
    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    /// Mesh flags implied by this intent.
    #[must_use]
    pub fn mesh_flags(&self) -> MeshFlags {
        MeshFlags {
            visible: self.visible,
            wireframe: self.highlighted,
        }
    }
}

/// The visual flags written to every mesh of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshFlags {
    pub visible: bool,
    pub wireframe: bool,
}
