//! Uniform inspection.
//!
//! [`inspect_uniforms`] merges what the compiled program reports with what the
//! material declares into one name-keyed list of display entries. It is a pure
//! function of its inputs and is meant to be re-run every frame, so the
//! inspector always shows the current values.

use std::borrow::Cow;

use crate::material::Material;
use crate::program::ShaderProgram;
use crate::texture::TextureDescriptor;
use crate::uniform::{is_excluded, UniformValue};

/// Default number of characters shown before a value is cut off.
pub const DEFAULT_MAX_CHARS: usize = 30;

/// Appended to values that were cut off.
pub const ELLIPSIS: &str = "...";

/// Characters kept from each cached value.
const CACHE_TOKEN_CHARS: usize = 4;

/// How a uniform is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UniformDisplay {
    /// A formatted scalar, vector, or serialized value.
    Scalar(String),
    /// A texture binding.
    Texture(TextureDescriptor),
}

impl UniformDisplay {
    #[must_use]
    pub fn is_texture(&self) -> bool {
        matches!(self, Self::Texture(_))
    }
}

/// One displayed uniform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformEntry {
    pub name: String,
    pub display: UniformDisplay,
}

/// Result of inspecting one program/material pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniformReport {
    entries: Vec<UniformEntry>,
}

impl UniformReport {
    /// Entries in first-seen order.
    #[must_use]
    pub fn entries(&self) -> &[UniformEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&UniformEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of texture-valued entries.
    #[must_use]
    pub fn texture_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.display.is_texture())
            .count()
    }

    /// Inserts an entry, or replaces the display of an existing one in place.
    fn upsert(&mut self, name: &str, display: UniformDisplay) {
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.display = display,
            None => self.entries.push(UniformEntry {
                name: name.to_string(),
                display,
            }),
        }
    }
}

/// Formats one cached value: its display form cut to four characters.
#[must_use]
pub fn cache_token(value: f32) -> String {
    value.to_string().chars().take(CACHE_TOKEN_CHARS).collect()
}

/// Joins a value cache into one display string.
#[must_use]
pub fn join_cache(values: &[f32]) -> String {
    values
        .iter()
        .map(|v| cache_token(*v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Cuts `value` to `max_chars` characters and appends [`ELLIPSIS`] if anything
/// was removed.
#[must_use]
pub fn truncate_display(value: &str, max_chars: usize) -> Cow<'_, str> {
    match value.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &value[..cut])),
        None => Cow::Borrowed(value),
    }
}

/// Formats a material-declared value. Falls back to the value's `Display`
/// form when it cannot be serialized.
fn format_declared(name: &str, value: &UniformValue) -> String {
    match value.to_json() {
        Ok(json) => json,
        Err(err) => {
            log::debug!("uniform '{name}' not serializable ({err}), using display form");
            value.to_string()
        }
    }
}

/// Builds the display list for a program and its material.
///
/// 1. Program uniforms with a value cache are listed in driver order, minus the
///    engine-internal ones. A uniform whose same-named material property is a
///    texture with an image is shown as that texture.
/// 2. Non-empty uniforms declared on the material are listed next. A declared
///    uniform replaces a program uniform of the same name.
///
/// Engine-internal names are dropped from both sources.
#[must_use]
pub fn inspect_uniforms(program: &ShaderProgram, material: &Material) -> UniformReport {
    let mut report = UniformReport::default();

    for uniform in &program.uniforms {
        if is_excluded(&uniform.id) {
            continue;
        }
        let Some(cache) = &uniform.cache else {
            continue;
        };
        let display = match material.image_texture(&uniform.id) {
            Some(texture) => UniformDisplay::Texture(texture.describe(&uniform.id)),
            None => UniformDisplay::Scalar(join_cache(cache)),
        };
        report.upsert(&uniform.id, display);
    }

    for (name, value) in material.uniforms() {
        if is_excluded(name) || value.is_empty() {
            continue;
        }
        let display = match value.as_texture() {
            Some(texture) => UniformDisplay::Texture(texture.describe(name)),
            None => UniformDisplay::Scalar(format_declared(name, value)),
        };
        report.upsert(name, display);
    }

    log::debug!(
        "inspected program '{}': {} uniforms, {} textures",
        program.name,
        report.len(),
        report.texture_count()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Texture;
    use crate::uniform::{UniformDescriptor, EXCLUDED_UNIFORMS};
    use proptest::prelude::*;

    fn scalar(report: &UniformReport, name: &str) -> Option<String> {
        match &report.get(name)?.display {
            UniformDisplay::Scalar(s) => Some(s.clone()),
            UniformDisplay::Texture(_) => None,
        }
    }

    #[test]
    fn test_cache_tokens() {
        assert_eq!(cache_token(1.0), "1");
        assert_eq!(cache_token(0.333_333), "0.33");
        assert_eq!(cache_token(-12.5), "-12.");
        assert_eq!(join_cache(&[1.0, 0.5, 0.123_45]), "1,0.5,0.12");
        assert_eq!(join_cache(&[]), "");
    }

    #[test]
    fn test_truncate_display() {
        assert_eq!(truncate_display("short", 30), "short");
        let exact = "a".repeat(30);
        assert_eq!(truncate_display(&exact, 30), exact.as_str());
        let long = "b".repeat(31);
        assert_eq!(truncate_display(&long, 30), format!("{}...", "b".repeat(30)));
    }

    #[test]
    fn test_truncate_multibyte() {
        let value = "é".repeat(40);
        let shown = truncate_display(&value, 30);
        assert_eq!(shown.chars().count(), 33);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_program_uniforms() {
        let program = ShaderProgram::new(1, "basic")
            .with_uniform(UniformDescriptor::cached("opacity", [1.0]))
            .with_uniform(UniformDescriptor::cached("diffuse", [1.0, 0.5, 0.25]))
            .with_uniform(UniformDescriptor::new("uncached"))
            .with_uniform(UniformDescriptor::cached("modelViewMatrix", [1.0; 16]));
        let material = Material::new("m-1", "MeshBasicMaterial");

        let report = inspect_uniforms(&program, &material);
        assert_eq!(report.len(), 2);
        assert_eq!(scalar(&report, "opacity").as_deref(), Some("1"));
        assert_eq!(scalar(&report, "diffuse").as_deref(), Some("1,0.5,0.25"));
        assert!(report.get("uncached").is_none());
        assert!(report.get("modelViewMatrix").is_none());
        assert_eq!(report.texture_count(), 0);
    }

    #[test]
    fn test_program_uniform_backed_by_texture() {
        let program = ShaderProgram::new(1, "standard")
            .with_uniform(UniformDescriptor::cached("map", [3.0]))
            .with_uniform(UniformDescriptor::cached("alphaMap", [4.0]));
        let material = Material::new("m-1", "MeshStandardMaterial")
            .with_texture(
                "map",
                Texture::new("t-1")
                    .with_image("textures/wood.jpg", 512, 512)
                    .with_wrap(1000)
                    .with_encoding(3001),
            )
            .with_texture("alphaMap", Texture::new("t-2"));

        let report = inspect_uniforms(&program, &material);
        match &report.get("map").unwrap().display {
            UniformDisplay::Texture(desc) => {
                assert_eq!(desc.url.as_deref(), Some("textures/wood.jpg"));
                assert_eq!(desc.wrap, "Repeat");
                assert_eq!(desc.encoding, "sRGB");
            }
            UniformDisplay::Scalar(s) => panic!("expected texture, got {s}"),
        }
        // A texture property without an image stays a plain value.
        assert_eq!(scalar(&report, "alphaMap").as_deref(), Some("4"));
        assert_eq!(report.texture_count(), 1);
    }

    #[test]
    fn test_declared_uniform_only() {
        let program = ShaderProgram::new(1, "custom");
        let material = Material::new("m-1", "ShaderMaterial").with_uniform("color", "#ff0000");

        let report = inspect_uniforms(&program, &material);
        assert_eq!(report.len(), 1);
        assert_eq!(report.entries()[0].name, "color");
        assert_eq!(scalar(&report, "color").as_deref(), Some("\"#ff0000\""));
    }

    #[test]
    fn test_declared_overrides_program_in_place() {
        let program = ShaderProgram::new(1, "custom")
            .with_uniform(UniformDescriptor::cached("time", [0.016]))
            .with_uniform(UniformDescriptor::cached("speed", [2.0]));
        let material = Material::new("m-1", "ShaderMaterial").with_uniform("time", 12.5_f32);

        let report = inspect_uniforms(&program, &material);
        let names: Vec<&str> = report.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["time", "speed"]);
        assert_eq!(scalar(&report, "time").as_deref(), Some("12.5"));
    }

    #[test]
    fn test_declared_texture_counts_once() {
        let texture = Texture::new("t-1").with_image("noise.png", 64, 64);
        let program = ShaderProgram::new(1, "custom")
            .with_uniform(UniformDescriptor::cached("noise", [0.0]));
        let material = Material::new("m-1", "ShaderMaterial")
            .with_texture("noise", texture.clone())
            .with_uniform("noise", texture);

        let report = inspect_uniforms(&program, &material);
        assert_eq!(report.len(), 1);
        assert!(report.get("noise").unwrap().display.is_texture());
        assert_eq!(report.texture_count(), 1);
    }

    #[test]
    fn test_empty_declared_values_skipped() {
        let program = ShaderProgram::new(1, "custom");
        let material = Material::new("m-1", "ShaderMaterial")
            .with_uniform("zero", 0.0_f32)
            .with_uniform("off", false)
            .with_uniform("blank", "")
            .with_uniform("on", true);

        let report = inspect_uniforms(&program, &material);
        assert_eq!(report.len(), 1);
        assert_eq!(scalar(&report, "on").as_deref(), Some("true"));
    }

    #[test]
    fn test_serialization_failure_falls_back() {
        let program = ShaderProgram::new(1, "custom");
        let material = Material::new("m-1", "ShaderMaterial")
            .with_uniform("buffer", UniformValue::Opaque("WebGLBuffer".to_string()));

        let report = inspect_uniforms(&program, &material);
        assert_eq!(scalar(&report, "buffer").as_deref(), Some("<WebGLBuffer>"));
    }

    proptest! {
        #[test]
        fn prop_excluded_never_listed(
            picks in proptest::collection::vec(0usize..EXCLUDED_UNIFORMS.len(), 0..8),
            extra in proptest::collection::vec("[a-z]{1,8}", 0..8),
        ) {
            let mut program = ShaderProgram::new(1, "prop");
            for i in &picks {
                program = program.with_uniform(UniformDescriptor::cached(EXCLUDED_UNIFORMS[*i], [1.0]));
            }
            for name in &extra {
                program = program.with_uniform(UniformDescriptor::cached(name.as_str(), [1.0]));
            }
            let mut material = Material::new("m", "ShaderMaterial");
            for i in &picks {
                material.set_uniform(EXCLUDED_UNIFORMS[*i], 1.0_f32);
            }

            let report = inspect_uniforms(&program, &material);
            for entry in report.entries() {
                prop_assert!(!EXCLUDED_UNIFORMS.contains(&entry.name.as_str()));
            }
            for name in &extra {
                if !EXCLUDED_UNIFORMS.contains(&name.as_str()) {
                    prop_assert!(report.get(name).is_some());
                }
            }
        }

        #[test]
        fn prop_truncation(value in ".{0,60}", max in 1usize..40) {
            let shown = truncate_display(&value, max);
            let len = value.chars().count();
            if len > max {
                prop_assert!(shown.ends_with(ELLIPSIS));
                prop_assert_eq!(shown.chars().count(), max + ELLIPSIS.len());
                let kept: String = value.chars().take(max).collect();
                prop_assert_eq!(&shown[..shown.len() - ELLIPSIS.len()], kept.as_str());
            } else {
                prop_assert_eq!(&*shown, value.as_str());
            }
        }
    }
}
