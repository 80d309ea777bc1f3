//! Panel builders.

use egui::{Context, ScrollArea, SidePanel, Ui};
use shaderscope_core::{PanelOptions, ProgramAction, ProgramList, ProgramStore};

use crate::preview::TexturePreviews;
use crate::program_ui::build_program_row;

/// Builds the docked inspector panel.
pub fn build_programs_panel(ctx: &Context, options: &PanelOptions, build_contents: impl FnOnce(&mut Ui)) {
    let panel = if options.anchor_right {
        SidePanel::right("shaderscope_programs_panel")
    } else {
        SidePanel::left("shaderscope_programs_panel")
    };
    panel
        .default_width(options.default_width)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading(&options.title);
            ui.separator();
            ScrollArea::vertical().show(ui, build_contents);
        });
}

/// Builds one row per listed program.
///
/// Returns the triggered actions paired with the material uuid of their row.
pub fn build_programs_section(
    ui: &mut Ui,
    store: &ProgramStore,
    list: &ProgramList,
    options: &PanelOptions,
    previews: &mut TexturePreviews,
) -> Vec<(String, ProgramAction)> {
    let mut actions = Vec::new();

    if store.renderer().is_none() {
        ui.weak("no renderer attached");
    }

    for record in list.rows(store) {
        ui.push_id(record.key(), |ui| {
            for action in build_program_row(ui, store, record, options, previews) {
                actions.push((record.key().to_string(), action));
            }
        });
    }

    actions
}
