//! Uniform values as the render engine exposes them.
//!
//! Two sources feed the inspector:
//! - [`UniformDescriptor`]s introspected from a compiled program, each with an
//!   optional cache of the last uploaded values.
//! - [`UniformValue`]s declared on a material's `uniforms` table.

use std::fmt;

use glam::{Mat4, Vec2, Vec3, Vec4};
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::texture::Texture;

/// Uniforms managed by the engine itself (camera and transform matrices,
/// light probes, UV transforms). These are never shown to the user.
pub const EXCLUDED_UNIFORMS: [&str; 8] = [
    "isOrthographic",
    "uvTransform",
    "lightProbe",
    "projectionMatrix",
    "viewMatrix",
    "normalMatrix",
    "modelMatrix",
    "modelViewMatrix",
];

/// Returns true if the uniform is engine-internal and must not be displayed.
#[must_use]
pub fn is_excluded(id: &str) -> bool {
    EXCLUDED_UNIFORMS.contains(&id)
}

/// One uniform introspected from a compiled shader program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UniformDescriptor {
    /// Uniform identifier as declared in the shader source.
    pub id: String,
    /// Values last uploaded to the GPU. `None` when the engine keeps no cache.
    pub cache: Option<Vec<f32>>,
}

impl UniformDescriptor {
    /// Creates a descriptor without a value cache.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cache: None,
        }
    }

    /// Creates a descriptor with cached values.
    pub fn cached(id: impl Into<String>, values: impl Into<Vec<f32>>) -> Self {
        Self {
            id: id.into(),
            cache: Some(values.into()),
        }
    }
}

/// A value declared in a material's `uniforms` table.
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Vector2(Vec2),
    Vector3(Vec3),
    Vector4(Vec4),
    Matrix4(Mat4),
    /// Linear RGB color, components in `0.0..=1.0`.
    Color(Vec3),
    List(Vec<UniformValue>),
    Record(Vec<(String, UniformValue)>),
    Texture(Texture),
    /// An engine handle with no serializable form; carries its type name.
    Opaque(String),
}

impl UniformValue {
    /// Returns true for values that count as unset: null, `false`, zero,
    /// NaN, and the empty string. Unset uniforms are not listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null | Self::Bool(false) => true,
            Self::Number(n) => *n == 0.0 || n.is_nan(),
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns the texture if this value is one.
    #[must_use]
    pub fn as_texture(&self) -> Option<&Texture> {
        match self {
            Self::Texture(texture) => Some(texture),
            _ => None,
        }
    }

    /// Serializes the value to compact JSON.
    ///
    /// Fails for values that contain an [`UniformValue::Opaque`] handle.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Packs a linear color into a `0xRRGGBB` integer.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pack_color(color: Vec3) -> u32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (channel(color.x) << 16) | (channel(color.y) << 8) | channel(color.z)
}

/// Integral values within the exactly-representable range print without a
/// fractional part.
#[allow(clippy::cast_possible_truncation)]
fn as_integer(n: f64) -> Option<i64> {
    const MAX_EXACT: f64 = 9_007_199_254_740_991.0;
    (n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT).then(|| n as i64)
}

/// A vector or matrix component, serialized with the same integral rule as
/// [`UniformValue::Number`].
struct Component(f32);

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match as_integer(f64::from(self.0)) {
            Some(i) => serializer.serialize_i64(i),
            None => serializer.serialize_f32(self.0),
        }
    }
}

fn format_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if let Some(i) = as_integer(n) {
        write!(f, "{i}")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Display for UniformValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => format_number(f, *n),
            Self::Text(s) => f.write_str(s),
            Self::Vector2(v) => write!(f, "{v}"),
            Self::Vector3(v) => write!(f, "{v}"),
            Self::Vector4(v) => write!(f, "{v}"),
            Self::Matrix4(m) => write!(f, "{m}"),
            Self::Color(c) => write!(f, "#{:06x}", pack_color(*c)),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Record(fields) => {
                f.write_str("{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Texture(texture) => write!(f, "Texture({})", texture.uuid),
            Self::Opaque(type_name) => write!(f, "<{type_name}>"),
        }
    }
}

impl Serialize for UniformValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => match as_integer(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            Self::Text(s) => serializer.serialize_str(s),
            Self::Vector2(v) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("x", &Component(v.x))?;
                map.serialize_entry("y", &Component(v.y))?;
                map.end()
            }
            Self::Vector3(v) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("x", &Component(v.x))?;
                map.serialize_entry("y", &Component(v.y))?;
                map.serialize_entry("z", &Component(v.z))?;
                map.end()
            }
            Self::Vector4(v) => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("x", &Component(v.x))?;
                map.serialize_entry("y", &Component(v.y))?;
                map.serialize_entry("z", &Component(v.z))?;
                map.serialize_entry("w", &Component(v.w))?;
                map.end()
            }
            Self::Matrix4(m) => {
                let elements: Vec<Component> =
                    m.to_cols_array().into_iter().map(Component).collect();
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("elements", &elements)?;
                map.end()
            }
            Self::Color(c) => serializer.serialize_u32(pack_color(*c)),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Record(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Texture(texture) => texture.serialize(serializer),
            Self::Opaque(type_name) => Err(S::Error::custom(format!(
                "{type_name} has no serializable form"
            ))),
        }
    }
}

impl From<bool> for UniformValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for UniformValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for UniformValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for UniformValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec2> for UniformValue {
    fn from(value: Vec2) -> Self {
        Self::Vector2(value)
    }
}

impl From<Vec3> for UniformValue {
    fn from(value: Vec3) -> Self {
        Self::Vector3(value)
    }
}

impl From<Vec4> for UniformValue {
    fn from(value: Vec4) -> Self {
        Self::Vector4(value)
    }
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        Self::Matrix4(value)
    }
}

impl From<Texture> for UniformValue {
    fn from(value: Texture) -> Self {
        Self::Texture(value)
    }
}
