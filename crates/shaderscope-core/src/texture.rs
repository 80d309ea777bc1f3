//! Texture handles and their human-readable descriptors.
//!
//! The render engine reports texture wrapping and color encoding as raw
//! numeric enums. [`WrapMode`] and [`TextureEncoding`] name the known values;
//! [`wrap_label`] and [`encoding_label`] turn any raw value into the label
//! shown in the inspector, including the fallbacks for unknown values.

use serde::Serialize;

/// Label used for any raw value that has no known mapping.
///
/// The encoding table falls back to the wrap-mode label as well. Existing
/// displays match on that exact string, so it is kept as is.
pub const FALLBACK_LABEL: &str = "ClampToEdge";

/// Texture wrapping mode as reported by the render engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Tile the texture (raw value 1000).
    Repeat,
    /// Clamp coordinates to the edge texel (raw value 1001).
    ClampToEdge,
    /// Tile and mirror on every repeat (raw value 1002).
    MirroredRepeat,
}

impl WrapMode {
    /// Maps a raw engine enum to a wrap mode.
    #[must_use]
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            1000 => Some(Self::Repeat),
            1001 => Some(Self::ClampToEdge),
            1002 => Some(Self::MirroredRepeat),
            _ => None,
        }
    }

    /// Returns the raw engine enum value.
    #[must_use]
    pub fn raw(self) -> u32 {
        match self {
            Self::Repeat => 1000,
            Self::ClampToEdge => 1001,
            Self::MirroredRepeat => 1002,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Repeat => "Repeat",
            Self::ClampToEdge => "ClampToEdge",
            Self::MirroredRepeat => "MirroredRepeat",
        }
    }
}

/// Texture color encoding as reported by the render engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureEncoding {
    Linear,
    Srgb,
    Rgbe,
    LogLuv,
    Rgbm7,
    Rgbm16,
    Rgbd,
    Gamma,
}

impl TextureEncoding {
    /// Maps a raw engine enum (3000..=3007) to an encoding.
    #[must_use]
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            3000 => Some(Self::Linear),
            3001 => Some(Self::Srgb),
            3002 => Some(Self::Rgbe),
            3003 => Some(Self::LogLuv),
            3004 => Some(Self::Rgbm7),
            3005 => Some(Self::Rgbm16),
            3006 => Some(Self::Rgbd),
            3007 => Some(Self::Gamma),
            _ => None,
        }
    }

    /// Returns the raw engine enum value.
    #[must_use]
    pub fn raw(self) -> u32 {
        match self {
            Self::Linear => 3000,
            Self::Srgb => 3001,
            Self::Rgbe => 3002,
            Self::LogLuv => 3003,
            Self::Rgbm7 => 3004,
            Self::Rgbm16 => 3005,
            Self::Rgbd => 3006,
            Self::Gamma => 3007,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Srgb => "sRGB",
            Self::Rgbe => "RGBE",
            Self::LogLuv => "LogLuv",
            Self::Rgbm7 => "RGBM7",
            Self::Rgbm16 => "RGBM16",
            Self::Rgbd => "RGBD",
            Self::Gamma => "Gamma",
        }
    }
}

/// Display label for a raw wrap enum.
#[must_use]
pub fn wrap_label(raw: u32) -> &'static str {
    WrapMode::from_raw(raw).map_or(FALLBACK_LABEL, WrapMode::label)
}

/// Display label for a raw encoding enum.
///
/// Unknown values map to [`FALLBACK_LABEL`], the wrap-mode fallback.
#[must_use]
pub fn encoding_label(raw: u32) -> &'static str {
    TextureEncoding::from_raw(raw).map_or(FALLBACK_LABEL, TextureEncoding::label)
}

/// Image data backing a texture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextureImage {
    /// Source the image was loaded from (URL, `file://` URL, or local path).
    pub source: String,
    pub width: u32,
    pub height: u32,
}

/// A texture object owned by the render engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Texture {
    pub uuid: String,
    pub name: String,
    /// Backing image; a texture without one has not been uploaded yet.
    pub image: Option<TextureImage>,
    pub flip_y: bool,
    pub wrap_s: u32,
    pub wrap_t: u32,
    pub encoding: u32,
}

impl Texture {
    /// Creates a texture with the engine's defaults (clamped, linear, flipped).
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: String::new(),
            image: None,
            flip_y: true,
            wrap_s: WrapMode::ClampToEdge.raw(),
            wrap_t: WrapMode::ClampToEdge.raw(),
            encoding: TextureEncoding::Linear.raw(),
        }
    }

    /// Attaches a backing image.
    #[must_use]
    pub fn with_image(mut self, source: impl Into<String>, width: u32, height: u32) -> Self {
        self.image = Some(TextureImage {
            source: source.into(),
            width,
            height,
        });
        self
    }

    /// Sets both wrap enums.
    #[must_use]
    pub fn with_wrap(mut self, wrap: u32) -> Self {
        self.wrap_s = wrap;
        self.wrap_t = wrap;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: u32) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_flip_y(mut self, flip_y: bool) -> Self {
        self.flip_y = flip_y;
        self
    }

    /// Returns true if the texture carries image data.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Builds the descriptor shown for a uniform named `name` bound to this texture.
    #[must_use]
    pub fn describe(&self, name: &str) -> TextureDescriptor {
        TextureDescriptor {
            name: name.to_string(),
            url: self.image.as_ref().map(|image| image.source.clone()),
            encoding: encoding_label(self.encoding),
            wrap: wrap_label(self.wrap_t),
            flip_y: self.flip_y,
        }
    }
}

/// Human-readable representation of a texture-valued uniform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextureDescriptor {
    /// Name of the uniform the texture is bound to.
    pub name: String,
    pub url: Option<String>,
    pub encoding: &'static str,
    pub wrap: &'static str,
    pub flip_y: bool,
}
