//! The program store.
//!
//! The store is the render engine's side of the inspector: it holds the
//! program records, the meshes they reference, and a generation counter that
//! changes whenever the program collection does. It is handed to the UI as a
//! [`SharedStore`] rather than reached through global state.

use std::sync::{Arc, RwLock};

use crate::error::{Result, ShaderscopeError};
use crate::intent::DisplayIntent;
use crate::mesh::{Mesh, MeshId};
use crate::program::ProgramRecord;

/// A store shared between the render engine and the inspector.
pub type SharedStore = Arc<RwLock<ProgramStore>>;

/// Identifies the active renderer. Uniform inspection only runs while one is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererInfo {
    /// Graphics backend, e.g. `Vulkan`.
    pub backend: String,
    /// Adapter name as reported by the driver.
    pub adapter: String,
}

/// Program records, meshes, and the change counter.
#[derive(Debug, Default)]
pub struct ProgramStore {
    renderer: Option<RendererInfo>,
    /// Disposed programs leave an empty slot until [`ProgramStore::compact`].
    slots: Vec<Option<ProgramRecord>>,
    meshes: Vec<Mesh>,
    generation: u64,
}

impl ProgramStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the store for sharing with the inspector.
    #[must_use]
    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    /// Current change counter. Never decreases.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Signals that the program collection changed without a structural edit,
    /// e.g. after the engine recompiled a program in place.
    pub fn trigger_update(&mut self) {
        self.generation += 1;
    }

    #[must_use]
    pub fn renderer(&self) -> Option<&RendererInfo> {
        self.renderer.as_ref()
    }

    pub fn set_renderer(&mut self, renderer: Option<RendererInfo>) {
        self.renderer = renderer;
        self.trigger_update();
    }

    /// Adds a mesh and returns its handle.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshId {
        let id = MeshId(self.meshes.len() as u32);
        self.meshes.push(mesh);
        id
    }

    #[must_use]
    pub fn mesh(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id.0 as usize)
    }

    /// Iterates over the meshes of a record, skipping stale handles.
    pub fn meshes_of<'a>(&'a self, record: &'a ProgramRecord) -> impl Iterator<Item = &'a Mesh> {
        record.meshes.iter().filter_map(|id| self.mesh(*id))
    }

    /// Registers a program record.
    ///
    /// A record whose material uuid is already present replaces the old one in
    /// place and keeps the old record's display intent. Meshes the replacement
    /// no longer uses are released. The record's meshes are brought in line
    /// with its intent.
    pub fn insert_program(&mut self, mut record: ProgramRecord) -> Result<()> {
        if let Some(missing) = record.meshes.iter().find(|id| self.mesh(**id).is_none()) {
            return Err(ShaderscopeError::MeshNotFound(missing.0));
        }

        let key = record.key().to_string();
        let existing = self
            .slots
            .iter_mut()
            .flatten()
            .find(|slot| slot.key() == key);
        let released = match existing {
            Some(slot) => {
                log::debug!("replacing program record for material '{key}'");
                record.intent = slot.intent;
                let released: Vec<MeshId> = slot
                    .meshes
                    .iter()
                    .filter(|id| !record.meshes.contains(*id))
                    .copied()
                    .collect();
                *slot = record;
                released
            }
            None => {
                log::debug!("registering program record for material '{key}'");
                self.slots.push(Some(record));
                Vec::new()
            }
        };

        self.apply_intent(&key)?;
        self.release_meshes(&released);
        self.trigger_update();
        Ok(())
    }

    /// Disposes of a program, leaving its slot empty. Its meshes are released.
    pub fn dispose_program(&mut self, key: &str) -> Option<ProgramRecord> {
        let record = self
            .slots
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|record| record.key() == key))?
            .take()?;
        log::debug!("disposed program record for material '{key}'");
        self.release_meshes(&record.meshes);
        self.trigger_update();
        Some(record)
    }

    /// Hands meshes that left a program back to whichever program still uses
    /// them, or restores them to a plain visible, filled state.
    fn release_meshes(&mut self, ids: &[MeshId]) {
        for id in ids {
            let flags = self
                .programs()
                .find(|record| record.meshes.contains(id))
                .map_or_else(
                    || DisplayIntent::default().mesh_flags(),
                    |record| record.intent.mesh_flags(),
                );
            if let Some(mesh) = self.meshes.get_mut(id.0 as usize) {
                mesh.visible = flags.visible;
                mesh.wireframe = flags.wireframe;
            }
        }
    }

    /// Drops empty slots left behind by disposed programs.
    pub fn compact(&mut self) {
        let before = self.slots.len();
        self.slots.retain(Option::is_some);
        if self.slots.len() != before {
            self.trigger_update();
        }
    }

    /// Looks up a record by material uuid.
    #[must_use]
    pub fn program(&self, key: &str) -> Option<&ProgramRecord> {
        self.programs().find(|record| record.key() == key)
    }

    /// All slots, including empty ones.
    #[must_use]
    pub fn slots(&self) -> &[Option<ProgramRecord>] {
        &self.slots
    }

    /// Iterates over the registered records in registration order.
    pub fn programs(&self) -> impl Iterator<Item = &ProgramRecord> {
        self.slots.iter().flatten()
    }

    /// Number of registered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.programs().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Edits a program's display intent and pushes the result to its meshes.
    pub fn update_intent(&mut self, key: &str, edit: impl FnOnce(&mut DisplayIntent)) -> Result<()> {
        let record = self
            .slots
            .iter_mut()
            .flatten()
            .find(|record| record.key() == key)
            .ok_or_else(|| ShaderscopeError::ProgramNotFound(key.to_string()))?;
        edit(&mut record.intent);
        self.apply_intent(key)
    }

    /// Writes a program's intent to every mesh that uses it.
    ///
    /// Together with mesh release on replace and dispose, this is the only
    /// place mesh visibility and wireframe flags are written.
    pub fn apply_intent(&mut self, key: &str) -> Result<()> {
        let record = self
            .slots
            .iter()
            .flatten()
            .find(|record| record.key() == key)
            .ok_or_else(|| ShaderscopeError::ProgramNotFound(key.to_string()))?;
        let flags = record.intent.mesh_flags();
        for id in &record.meshes {
            let mesh = self
                .meshes
                .get_mut(id.0 as usize)
                .ok_or(ShaderscopeError::MeshNotFound(id.0))?;
            mesh.visible = flags.visible;
            mesh.wireframe = flags.wireframe;
        }
        Ok(())
    }
}
