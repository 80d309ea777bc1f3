//! Shader programs and the records that tie them to materials and meshes.

use crate::intent::DisplayIntent;
use crate::material::Material;
use crate::mesh::MeshId;
use crate::uniform::UniformDescriptor;

/// A compiled shader program handle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShaderProgram {
    /// Engine-assigned program id.
    pub id: u32,
    pub name: String,
    /// Active uniforms in the order the driver reports them.
    pub uniforms: Vec<UniformDescriptor>,
}

impl ShaderProgram {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            uniforms: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_uniform(mut self, uniform: UniformDescriptor) -> Self {
        self.uniforms.push(uniform);
        self
    }
}

/// The association between one program, its material, and the meshes using it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramRecord {
    /// `None` while the program is still compiling or after a failed link.
    pub program: Option<ShaderProgram>,
    pub material: Material,
    pub meshes: Vec<MeshId>,
    pub intent: DisplayIntent,
}

impl ProgramRecord {
    pub fn new(program: ShaderProgram, material: Material) -> Self {
        Self {
            program: Some(program),
            material,
            meshes: Vec::new(),
            intent: DisplayIntent::default(),
        }
    }

    #[must_use]
    pub fn with_meshes(mut self, meshes: impl IntoIterator<Item = MeshId>) -> Self {
        self.meshes.extend(meshes);
        self
    }

    /// Key of this record: the material uuid.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.material.uuid
    }

    /// Number of meshes using the program.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.meshes.len()
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.intent.expanded
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.intent.visible
    }
}

/// Label for the user count: singular only for exactly one user.
#[must_use]
pub fn users_label(count: usize) -> &'static str {
    if count == 1 {
        "user"
    } else {
        "users"
    }
}

/// The one-line summary shown in a program row header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSummary {
    pub title: String,
    pub user_count: usize,
    pub texture_count: usize,
    pub glsl3: bool,
}

impl ProgramSummary {
    /// Summarizes a record. Returns `None` when the record has no program.
    #[must_use]
    pub fn new(record: &ProgramRecord, texture_count: usize) -> Option<Self> {
        let program = record.program.as_ref()?;
        Some(Self {
            title: program.name.clone(),
            user_count: record.user_count(),
            texture_count,
            glsl3: record.material.is_glsl3(),
        })
    }

    /// e.g. `3 users`.
    #[must_use]
    pub fn users_text(&self) -> String {
        format!("{} {}", self.user_count, users_label(self.user_count))
    }

    /// e.g. `2 tex`, or `None` when the program samples no textures.
    #[must_use]
    pub fn textures_text(&self) -> Option<String> {
        (self.texture_count > 0).then(|| format!("{} tex", self.texture_count))
    }
}
