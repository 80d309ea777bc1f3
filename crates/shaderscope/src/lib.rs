//! shaderscope: a debugging overlay that lists the shader programs a renderer
//! has compiled and inspects their uniforms.
//!
//! # Quick Start
//!
//! ```no_run
//! use shaderscope::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let mut store = ProgramStore::new();
//!     let floor = store.add_mesh(Mesh::new("floor", "PlaneGeometry"));
//!     store.insert_program(
//!         ProgramRecord::new(
//!             ShaderProgram::new(1, "MeshBasicMaterial")
//!                 .with_uniform(UniformDescriptor::cached("opacity", [1.0])),
//!             Material::new("basic-1", "MeshBasicMaterial"),
//!         )
//!         .with_meshes([floor]),
//!     )?;
//!
//!     run_viewer(Overlay::new(store.into_shared()), ViewerOptions::default())
//! }
//! ```
//!
//! The host keeps a clone of the [`SharedStore`] and calls
//! [`ProgramStore::trigger_update`] whenever its program collection changes.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod overlay;
mod viewer;

pub use overlay::Overlay;
pub use viewer::{run_viewer, ViewerOptions};

pub use shaderscope_core::*;
pub use shaderscope_ui::{EguiIntegration, TexturePreviews};

/// Initializes logging from `RUST_LOG`. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
