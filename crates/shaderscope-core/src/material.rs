//! Materials as seen by the inspector.

use crate::texture::Texture;
use crate::uniform::UniformValue;

/// GLSL version string that earns the "GLSL 300 es" badge.
pub const GLSL3: &str = "300 es";

/// A material compiled into a shader program.
///
/// Only the parts the inspector reads are modelled: identity, the texture
/// properties (`map`, `normalMap`, ...), and the optional `uniforms` table of
/// custom shader materials.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Unique identifier; program rows are keyed by it.
    pub uuid: String,
    pub name: String,
    /// Engine type name, e.g. `MeshStandardMaterial`.
    pub type_name: String,
    pub glsl_version: Option<String>,
    textures: Vec<(String, Texture)>,
    uniforms: Option<Vec<(String, UniformValue)>>,
}

impl Material {
    /// Creates a material with no textures and no uniforms table.
    pub fn new(uuid: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: String::new(),
            type_name: type_name.into(),
            glsl_version: None,
            textures: Vec::new(),
            uniforms: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_glsl_version(mut self, version: impl Into<String>) -> Self {
        self.glsl_version = Some(version.into());
        self
    }

    /// Binds a texture to a named material property.
    #[must_use]
    pub fn with_texture(mut self, property: impl Into<String>, texture: Texture) -> Self {
        self.set_texture(property, texture);
        self
    }

    /// Declares a uniform, creating the `uniforms` table if needed.
    #[must_use]
    pub fn with_uniform(mut self, name: impl Into<String>, value: impl Into<UniformValue>) -> Self {
        self.set_uniform(name, value);
        self
    }

    /// Binds or replaces the texture of a named property.
    pub fn set_texture(&mut self, property: impl Into<String>, texture: Texture) {
        let property = property.into();
        match self.textures.iter_mut().find(|(name, _)| *name == property) {
            Some((_, slot)) => *slot = texture,
            None => self.textures.push((property, texture)),
        }
    }

    /// Declares or replaces a uniform value. Declaration order is preserved.
    pub fn set_uniform(&mut self, name: impl Into<String>, value: impl Into<UniformValue>) {
        let name = name.into();
        let value = value.into();
        let uniforms = self.uniforms.get_or_insert_with(Vec::new);
        match uniforms.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => uniforms.push((name, value)),
        }
    }

    /// Returns the texture bound to a property, if any.
    #[must_use]
    pub fn texture(&self, property: &str) -> Option<&Texture> {
        self.textures
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, texture)| texture)
    }

    /// Returns the texture bound to a property only if it carries an image.
    #[must_use]
    pub fn image_texture(&self, property: &str) -> Option<&Texture> {
        self.texture(property).filter(|texture| texture.has_image())
    }

    /// Returns true if the material declares a `uniforms` table.
    #[must_use]
    pub fn has_uniforms(&self) -> bool {
        self.uniforms.is_some()
    }

    /// Iterates over declared uniforms in declaration order.
    pub fn uniforms(&self) -> impl Iterator<Item = (&str, &UniformValue)> {
        self.uniforms
            .iter()
            .flatten()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Looks up a declared uniform.
    #[must_use]
    pub fn uniform(&self, name: &str) -> Option<&UniformValue> {
        self.uniforms()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Returns true if the material targets GLSL ES 3.00.
    #[must_use]
    pub fn is_glsl3(&self) -> bool {
        self.glsl_version.as_deref() == Some(GLSL3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_creation() {
        let material = Material::new("m-1", "MeshBasicMaterial");
        assert_eq!(material.uuid, "m-1");
        assert!(!material.has_uniforms());
        assert_eq!(material.uniforms().count(), 0);
        assert!(!material.is_glsl3());
    }

    #[test]
    fn test_uniform_order_and_replace() {
        let mut material = Material::new("m-1", "ShaderMaterial")
            .with_uniform("time", 1.5_f32)
            .with_uniform("color", "#ffffff");
        material.set_uniform("time", 2.0_f32);

        let names: Vec<&str> = material.uniforms().map(|(name, _)| name).collect();
        assert_eq!(names, ["time", "color"]);
        assert_eq!(material.uniform("time"), Some(&UniformValue::Number(2.0)));
    }

    #[test]
    fn test_image_texture() {
        let material = Material::new("m-1", "MeshStandardMaterial")
            .with_texture("map", Texture::new("t-1").with_image("a.png", 4, 4))
            .with_texture("aoMap", Texture::new("t-2"));

        assert!(material.image_texture("map").is_some());
        assert!(material.texture("aoMap").is_some());
        assert!(material.image_texture("aoMap").is_none());
        assert!(material.image_texture("normalMap").is_none());
    }

    #[test]
    fn test_glsl3() {
        let material = Material::new("m-1", "RawShaderMaterial").with_glsl_version("300 es");
        assert!(material.is_glsl3());
        let material = Material::new("m-2", "RawShaderMaterial").with_glsl_version("100");
        assert!(!material.is_glsl3());
    }
}
