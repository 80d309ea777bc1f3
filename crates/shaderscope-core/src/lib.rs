//! Core model for shaderscope.
//!
//! This crate holds everything the shader program inspector knows without
//! drawing anything:
//! - the render-engine objects it reads ([`ShaderProgram`], [`Material`],
//!   [`Mesh`], [`Texture`])
//! - [`inspect_uniforms`], which turns a program and its material into
//!   display entries
//! - [`DisplayIntent`] and [`ProgramStore`], which own every write to mesh
//!   visibility and wireframe flags
//! - [`ProgramList`] and [`ProgramAction`], the list and row controllers

// Internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
#![allow(clippy::struct_excessive_bools)]

pub mod controller;
pub mod error;
pub mod inspect;
pub mod intent;
pub mod list;
pub mod material;
pub mod mesh;
pub mod options;
pub mod program;
pub mod store;
pub mod texture;
pub mod uniform;

pub use controller::{hover_action, ProgramAction};
pub use error::{Result, ShaderscopeError};
pub use inspect::{
    inspect_uniforms, truncate_display, UniformDisplay, UniformEntry, UniformReport,
    DEFAULT_MAX_CHARS,
};
pub use intent::{DisplayIntent, MeshFlags};
pub use list::ProgramList;
pub use material::Material;
pub use mesh::{Mesh, MeshId};
pub use options::PanelOptions;
pub use program::{users_label, ProgramRecord, ProgramSummary, ShaderProgram};
pub use store::{ProgramStore, RendererInfo, SharedStore};
pub use texture::{encoding_label, wrap_label, Texture, TextureDescriptor, TextureEncoding, WrapMode};
pub use uniform::{UniformDescriptor, UniformValue, EXCLUDED_UNIFORMS};

// Re-export glam types for convenience
pub use glam::{Mat4, Vec2, Vec3, Vec4};
