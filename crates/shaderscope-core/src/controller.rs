//! Program row actions.
//!
//! The UI reports what the user did as [`ProgramAction`]s; the store applies
//! them. Every action that affects meshes goes through
//! [`ProgramStore::update_intent`].

use crate::error::{Result, ShaderscopeError};
use crate::intent::DisplayIntent;
use crate::store::ProgramStore;

/// A user interaction with one program row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramAction {
    /// Header clicked: expand or collapse the details.
    ToggleExpand,
    /// Eye toggle clicked: show or hide the program's meshes.
    ToggleVisibility,
    /// Pointer entered the eye toggle: highlight meshes in wireframe.
    HoverEnter,
    /// Pointer left the eye toggle.
    HoverLeave,
    /// Dump the material to the log.
    LogMaterial,
    /// Dump one uniform's raw value to the log.
    LogUniform(String),
}

/// Returns the hover action needed to bring `intent` in line with the
/// pointer, if any.
#[must_use]
pub fn hover_action(hovered: bool, intent: &DisplayIntent) -> Option<ProgramAction> {
    match (hovered, intent.highlighted) {
        (true, false) => Some(ProgramAction::HoverEnter),
        (false, true) => Some(ProgramAction::HoverLeave),
        _ => None,
    }
}

impl ProgramStore {
    /// Applies a row action to the program keyed by `key`.
    pub fn apply_action(&mut self, key: &str, action: &ProgramAction) -> Result<()> {
        match action {
            ProgramAction::ToggleExpand => self.update_intent(key, DisplayIntent::toggle_expanded),
            ProgramAction::ToggleVisibility => {
                self.update_intent(key, DisplayIntent::toggle_visible)
            }
            ProgramAction::HoverEnter => self.update_intent(key, |intent| intent.set_highlighted(true)),
            ProgramAction::HoverLeave => {
                self.update_intent(key, |intent| intent.set_highlighted(false))
            }
            ProgramAction::LogMaterial => {
                let record = self
                    .program(key)
                    .ok_or_else(|| ShaderscopeError::ProgramNotFound(key.to_string()))?;
                log::info!("{}: {:#?}", record.material.type_name, record.material);
                Ok(())
            }
            ProgramAction::LogUniform(name) => {
                let record = self
                    .program(key)
                    .ok_or_else(|| ShaderscopeError::ProgramNotFound(key.to_string()))?;
                let material = &record.material;
                if let Some(texture) = material.texture(name) {
                    log::info!("{name}: {texture:#?}");
                } else if let Some(value) = material.uniform(name) {
                    log::info!("{name}: {value:#?}");
                } else {
                    log::info!("{name}: undefined");
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::mesh::{Mesh, MeshId};
    use crate::program::{ProgramRecord, ShaderProgram};

    fn store_with_meshes(count: usize) -> (ProgramStore, Vec<MeshId>) {
        let mut store = ProgramStore::new();
        let ids: Vec<MeshId> = (0..count)
            .map(|i| store.add_mesh(Mesh::new(format!("mesh{i}"), "BoxGeometry")))
            .collect();
        let record = ProgramRecord::new(
            ShaderProgram::new(1, "MeshPhongMaterial"),
            Material::new("m-1", "MeshPhongMaterial"),
        )
        .with_meshes(ids.iter().copied());
        store.insert_program(record).unwrap();
        (store, ids)
    }

    #[test]
    fn test_toggle_visibility_keeps_flags_in_sync() {
        let (mut store, ids) = store_with_meshes(3);
        for expected in [false, true, false] {
            store
                .apply_action("m-1", &ProgramAction::ToggleVisibility)
                .unwrap();
            assert_eq!(store.program("m-1").unwrap().is_visible(), expected);
            for id in &ids {
                assert_eq!(store.mesh(*id).unwrap().visible, expected);
            }
        }
    }

    #[test]
    fn test_hover_highlights_meshes() {
        let (mut store, ids) = store_with_meshes(2);
        store.apply_action("m-1", &ProgramAction::HoverEnter).unwrap();
        assert!(ids.iter().all(|id| store.mesh(*id).unwrap().wireframe));
        store.apply_action("m-1", &ProgramAction::HoverLeave).unwrap();
        assert!(ids.iter().all(|id| !store.mesh(*id).unwrap().wireframe));
    }

    #[test]
    fn test_expand_resets_wireframe() {
        let (mut store, ids) = store_with_meshes(2);
        store.apply_action("m-1", &ProgramAction::HoverEnter).unwrap();
        store.apply_action("m-1", &ProgramAction::ToggleExpand).unwrap();

        assert!(store.program("m-1").unwrap().is_expanded());
        assert!(ids.iter().all(|id| !store.mesh(*id).unwrap().wireframe));
    }

    #[test]
    fn test_interleaved_hover_and_click_converge() {
        let (mut store, ids) = store_with_meshes(1);
        let actions = [
            ProgramAction::HoverEnter,
            ProgramAction::ToggleExpand,
            ProgramAction::HoverEnter,
            ProgramAction::ToggleVisibility,
            ProgramAction::HoverLeave,
            ProgramAction::ToggleExpand,
        ];
        for action in &actions {
            store.apply_action("m-1", action).unwrap();
            let record = store.program("m-1").unwrap();
            let mesh = store.mesh(ids[0]).unwrap();
            assert_eq!(mesh.wireframe, record.intent.highlighted);
            assert_eq!(mesh.visible, record.intent.visible);
        }
    }

    #[test]
    fn test_hover_action() {
        let mut intent = DisplayIntent::default();
        assert_eq!(hover_action(true, &intent), Some(ProgramAction::HoverEnter));
        assert_eq!(hover_action(false, &intent), None);
        intent.set_highlighted(true);
        assert_eq!(hover_action(true, &intent), None);
        assert_eq!(hover_action(false, &intent), Some(ProgramAction::HoverLeave));
    }

    #[test]
    fn test_log_actions() {
        let (mut store, _) = store_with_meshes(0);
        store.apply_action("m-1", &ProgramAction::LogMaterial).unwrap();
        store
            .apply_action("m-1", &ProgramAction::LogUniform("missing".into()))
            .unwrap();
        assert!(store
            .apply_action("m-9", &ProgramAction::LogMaterial)
            .is_err());
    }
}
