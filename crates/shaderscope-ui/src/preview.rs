//! Texture previews for texture-valued uniforms.
//!
//! Only local images can be previewed: plain paths and `file://` URLs are
//! decoded with the `image` crate and uploaded once. Anything else is shown
//! as a link by the caller.

use std::collections::HashMap;
use std::path::PathBuf;

use egui::{ColorImage, Context, TextureHandle, TextureOptions, Ui};

/// Cache of uploaded previews, keyed by image source.
///
/// Failed loads are cached too, so a broken source is only tried once.
#[derive(Default)]
pub struct TexturePreviews {
    handles: HashMap<String, Option<TextureHandle>>,
}

impl TexturePreviews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves an image source to a local file path, if it is one.
    #[must_use]
    pub fn local_path(source: &str) -> Option<PathBuf> {
        if let Some(path) = source.strip_prefix("file://") {
            return Some(PathBuf::from(path));
        }
        if source.is_empty() || source.contains("://") || source.starts_with("data:") {
            return None;
        }
        Some(PathBuf::from(source))
    }

    /// Number of sources tried so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Returns true if a preview for `source` was loaded successfully.
    #[must_use]
    pub fn is_loaded(&self, source: &str) -> bool {
        matches!(self.handles.get(source), Some(Some(_)))
    }

    fn load(ctx: &Context, source: &str) -> Option<TextureHandle> {
        let path = Self::local_path(source)?;
        let decoded = match image::open(&path) {
            Ok(decoded) => decoded.to_rgba8(),
            Err(err) => {
                log::debug!("no preview for {}: {err}", path.display());
                return None;
            }
        };
        let (width, height) = decoded.dimensions();
        let image =
            ColorImage::from_rgba_unmultiplied([width as usize, height as usize], decoded.as_raw());
        Some(ctx.load_texture(
            format!("shaderscope-preview:{source}"),
            image,
            TextureOptions::LINEAR,
        ))
    }

    /// Draws a preview of `source` fitted into a `size` x `size` box.
    /// Returns false if no preview could be shown.
    #[allow(clippy::cast_precision_loss)]
    pub fn show(&mut self, ui: &mut Ui, source: &str, size: f32) -> bool {
        let handle = self
            .handles
            .entry(source.to_string())
            .or_insert_with(|| Self::load(ui.ctx(), source));
        let Some(handle) = handle else {
            return false;
        };

        let [width, height] = handle.size();
        let scale = size / width.max(height).max(1) as f32;
        let display_size = egui::vec2(width as f32 * scale, height as f32 * scale);
        ui.add(egui::Image::new(egui::load::SizedTexture::new(
            handle.id(),
            display_size,
        )));
        true
    }
}
