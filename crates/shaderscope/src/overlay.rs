//! The inspector overlay.

use egui::{Context, Ui};
use shaderscope_core::{
    PanelOptions, ProgramAction, ProgramList, Result, ShaderscopeError, SharedStore,
};
use shaderscope_ui::{build_programs_panel, build_programs_section, TexturePreviews};

/// Lists the programs of a [`SharedStore`] and applies the user's actions back
/// to it.
///
/// The overlay holds only UI state. Every frame it takes a read lock to draw,
/// releases it, then takes a write lock for the actions the frame produced.
pub struct Overlay {
    store: SharedStore,
    list: ProgramList,
    options: PanelOptions,
    previews: TexturePreviews,
}

impl Overlay {
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            list: ProgramList::new(),
            options: PanelOptions::default(),
            previews: TexturePreviews::new(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: PanelOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    #[must_use]
    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut PanelOptions {
        &mut self.options
    }

    /// Keys of the programs listed as of the last frame.
    #[must_use]
    pub fn listed_keys(&self) -> &[String] {
        self.list.keys()
    }

    /// Shows the overlay as a docked side panel.
    pub fn show(&mut self, ctx: &Context) {
        let options = self.options.clone();
        build_programs_panel(ctx, &options, |ui| self.ui(ui));
    }

    /// Builds the program list into an existing `ui`.
    pub fn ui(&mut self, ui: &mut Ui) {
        let actions = {
            let Ok(store) = self.store.read() else {
                log::warn!("program store lock poisoned, skipping frame");
                return;
            };
            if self.list.sync(&store) {
                log::debug!("program list resynced: {} programs", self.list.keys().len());
            }
            build_programs_section(ui, &store, &self.list, &self.options, &mut self.previews)
        };

        if let Err(err) = self.apply(&actions) {
            log::warn!("{err}");
        }
    }

    /// Applies row actions to the store.
    ///
    /// An action whose program was disposed in the meantime is logged and
    /// skipped; the remaining actions still apply.
    pub fn apply(&self, actions: &[(String, ProgramAction)]) -> Result<()> {
        if actions.is_empty() {
            return Ok(());
        }
        let mut store = self
            .store
            .write()
            .map_err(|_| ShaderscopeError::StorePoisoned)?;
        for (key, action) in actions {
            if let Err(err) = store.apply_action(key, action) {
                log::warn!("dropping {action:?}: {err}");
            }
        }
        Ok(())
    }
}
