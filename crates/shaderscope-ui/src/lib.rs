//! UI layer for shaderscope using egui.

pub mod integration;
pub mod panels;
pub mod preview;
pub mod program_ui;
pub mod uniform_ui;

pub use integration::EguiIntegration;
pub use panels::*;
pub use preview::TexturePreviews;
pub use program_ui::*;
pub use uniform_ui::*;

#[cfg(test)]
mod testing;
