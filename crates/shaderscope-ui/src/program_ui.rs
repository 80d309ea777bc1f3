//! Program row UI.

use egui::{RichText, Ui};
use shaderscope_core::{
    hover_action, inspect_uniforms, PanelOptions, ProgramAction, ProgramRecord, ProgramStore,
    ProgramSummary, UniformReport,
};

use crate::preview::TexturePreviews;
use crate::uniform_ui::build_uniform_list;

/// Inspects a record's uniforms, or returns an empty report when there is no
/// renderer or no compiled program yet.
#[must_use]
pub fn record_report(store: &ProgramStore, record: &ProgramRecord) -> UniformReport {
    match (store.renderer(), &record.program) {
        (Some(_), Some(program)) => inspect_uniforms(program, &record.material),
        _ => UniformReport::default(),
    }
}

/// Builds the summary header: expand arrow, title, and badges.
/// Returns true if the header was clicked.
fn build_header(ui: &mut Ui, summary: Option<&ProgramSummary>, expanded: bool) -> bool {
    let arrow = if expanded { "▼" } else { "▶" };
    let title = summary.map_or_else(String::new, |summary| summary.title.clone());
    let mut clicked = ui
        .add(egui::Button::new(RichText::new(format!("{arrow} {title}")).strong()).frame(false))
        .clicked();

    if let Some(summary) = summary {
        let users = ui.add(egui::Label::new(RichText::new(summary.users_text()).small()).sense(egui::Sense::click()));
        clicked |= users.clicked();
        if let Some(textures) = summary.textures_text() {
            ui.label(RichText::new(textures).small());
        }
        if summary.glsl3 {
            ui.label(RichText::new("GLSL 300 es").small().monospace())
                .on_hover_text("GLSL ES 3.00 shader");
        }
    }

    clicked
}

/// Builds one program row.
///
/// Returns the actions the user triggered this frame. Hover actions are only
/// emitted when the pointer disagrees with the record's current intent.
pub fn build_program_row(
    ui: &mut Ui,
    store: &ProgramStore,
    record: &ProgramRecord,
    options: &PanelOptions,
    previews: &mut TexturePreviews,
) -> Vec<ProgramAction> {
    let mut actions = Vec::new();
    let report = record_report(store, record);
    let summary = ProgramSummary::new(record, report.texture_count());

    ui.horizontal(|ui| {
        if build_header(ui, summary.as_ref(), record.is_expanded()) {
            actions.push(ProgramAction::ToggleExpand);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if record.is_visible() { "hide" } else { "show" };
            let toggle = ui
                .small_button(label)
                .on_hover_text("Toggle visibility; hover to highlight in wireframe");
            if let Some(action) = hover_action(toggle.hovered(), &record.intent) {
                actions.push(action);
            }
            if toggle.clicked() {
                actions.push(ProgramAction::ToggleVisibility);
            }
        });
    });

    if record.is_expanded() {
        ui.indent(("program_body", record.key()), |ui| {
            ui.label(RichText::new("Uniforms:").strong());
            if let Some(name) = build_uniform_list(ui, &report, options, previews) {
                actions.push(ProgramAction::LogUniform(name));
            }

            if options.show_geometries {
                ui.label(RichText::new("Geometries:").strong());
                for mesh in store.meshes_of(record) {
                    ui.label(&mesh.geometry_type);
                }
            }

            if ui
                .small_button(format!("log {}", record.material.type_name))
                .clicked()
            {
                actions.push(ProgramAction::LogMaterial);
            }
        });
    }

    ui.separator();
    actions
}
