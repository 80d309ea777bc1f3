//! Uniform inspector UI.

use egui::{RichText, Ui};
use shaderscope_core::{
    truncate_display, PanelOptions, TextureDescriptor, UniformDisplay, UniformReport,
};

use crate::preview::TexturePreviews;

/// Builds the uniform list of one program.
///
/// Returns the name of the uniform whose "log" button was clicked, if any.
pub fn build_uniform_list(
    ui: &mut Ui,
    report: &UniformReport,
    options: &PanelOptions,
    previews: &mut TexturePreviews,
) -> Option<String> {
    let mut logged = None;

    if report.is_empty() {
        ui.weak("no uniforms");
        return None;
    }

    for entry in report.entries() {
        match &entry.display {
            UniformDisplay::Scalar(value) => {
                let shown = truncate_display(value, options.max_value_chars);
                ui.horizontal(|ui| {
                    ui.label(format!("{} :", entry.name));
                    ui.label(RichText::new(&*shown).strong().monospace())
                        .on_hover_text(value.as_str());
                });
            }
            UniformDisplay::Texture(desc) => {
                if build_texture_descriptor(ui, desc, options, previews) {
                    logged = Some(desc.name.clone());
                }
            }
        }
    }

    logged
}

/// Builds the block for one texture uniform.
/// Returns true if its "log" button was clicked.
fn build_texture_descriptor(
    ui: &mut Ui,
    desc: &TextureDescriptor,
    options: &PanelOptions,
    previews: &mut TexturePreviews,
) -> bool {
    ui.label(RichText::new(format!("{}:", desc.name)).strong());

    let mut clicked = false;
    ui.indent(("texture", desc.name.as_str()), |ui| {
        if let Some(url) = &desc.url {
            if options.show_texture_previews {
                previews.show(ui, url, options.preview_size);
            }
            ui.hyperlink_to(truncate_display(url, options.max_value_chars).into_owned(), url);
        }

        egui::Grid::new(("texture_props", desc.name.as_str()))
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("encoding:");
                ui.strong(desc.encoding);
                ui.end_row();

                ui.label("wrap:");
                ui.strong(desc.wrap);
                ui.end_row();

                ui.label("flipY:");
                ui.strong(desc.flip_y.to_string());
                ui.end_row();
            });

        if ui.small_button(format!("log {}", desc.name)).clicked() {
            clicked = true;
        }
    });

    clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;
    use shaderscope_core::{inspect_uniforms, Material, ShaderProgram, Texture, UniformDescriptor};

    fn run_list(report: &UniformReport) -> Option<String> {
        let ctx = egui::Context::default();
        let options = PanelOptions::default();
        let mut previews = TexturePreviews::new();
        let mut logged = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                logged = build_uniform_list(ui, report, &options, &mut previews);
            });
        });
        logged
    }

    #[test]
    fn test_empty_report() {
        assert!(run_list(&UniformReport::default()).is_none());
    }

    #[test]
    fn test_mixed_report_without_clicks() {
        let program = ShaderProgram::new(1, "standard")
            .with_uniform(UniformDescriptor::cached("opacity", [1.0]))
            .with_uniform(UniformDescriptor::cached("map", [0.0]));
        let material = Material::new("m-1", "MeshStandardMaterial")
            .with_texture(
                "map",
                Texture::new("t-1").with_image("https://example.com/wood.jpg", 8, 8),
            )
            .with_uniform("label", "x".repeat(64));

        let report = inspect_uniforms(&program, &material);
        assert_eq!(report.texture_count(), 1);
        assert!(run_list(&report).is_none());
    }

    fn textured_report() -> UniformReport {
        let program = ShaderProgram::new(1, "standard")
            .with_uniform(UniformDescriptor::cached("opacity", [0.75]))
            .with_uniform(UniformDescriptor::cached("map", [0.0]));
        let material = Material::new("m-1", "MeshStandardMaterial")
            .with_texture("map", Texture::new("t-1").with_image("https://example.com/wood.jpg", 8, 8))
            .with_uniform("label", "x".repeat(64));
        inspect_uniforms(&program, &material)
    }

    #[test]
    fn test_texture_log_button() {
        let report = textured_report();
        let options = PanelOptions::default();
        let mut previews = TexturePreviews::new();
        let mut logged = Vec::new();
        let mut build = |ui: &mut Ui| {
            if let Some(name) = build_uniform_list(ui, &report, &options, &mut previews) {
                logged.push(name);
            }
        };

        let mut harness = Harness::new();
        harness.frame(&mut build);
        harness.frame(&mut build);
        assert!(harness.texts().any(|text| text == "ClampToEdge"));

        harness.click(|text| text == "log map", &mut build);
        assert_eq!(logged, ["map"]);
    }

    #[test]
    fn test_values_truncated_to_panel_option() {
        let report = textured_report();
        let options = PanelOptions {
            max_value_chars: 8,
            ..PanelOptions::default()
        };
        let mut previews = TexturePreviews::new();

        let mut harness = Harness::new();
        harness.frame(|ui| {
            build_uniform_list(ui, &report, &options, &mut previews);
        });

        let texts: Vec<&str> = harness.texts().collect();
        assert!(texts.contains(&"0.75"));
        assert!(texts.contains(&"\"xxxxxxx..."));
        assert!(texts.contains(&"https://..."));
        assert!(!texts.iter().any(|text| text.contains(&"x".repeat(20))));
    }
}
