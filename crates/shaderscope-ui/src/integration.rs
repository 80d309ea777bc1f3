//! egui integration with wgpu and winit.
//!
//! The inspector is drawn as a single overlay pass: the host renders its
//! scene (or just clears) into the frame, then [`EguiIntegration::paint`]
//! loads that frame and draws the panels on top. egui's own upload commands
//! are returned so the host can submit them ahead of its encoder.

use egui::Context;
use egui_wgpu::Renderer as EguiRenderer;
use egui_wgpu::ScreenDescriptor;
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::window::Window;

/// Owns the egui context, its winit input state, and the wgpu painter for one
/// window.
pub struct EguiIntegration {
    pub context: Context,
    pub state: EguiWinitState,
    pub renderer: EguiRenderer,
}

impl EguiIntegration {
    /// Creates the integration for `window`. The painter targets
    /// `output_format`, which must match the surface the overlay is drawn on.
    #[must_use]
    pub fn new(device: &wgpu::Device, output_format: wgpu::TextureFormat, window: &Window) -> Self {
        let context = Context::default();
        context.set_visuals(egui::Visuals::dark());

        let viewport_id = context.viewport_id();
        let state = EguiWinitState::new(context.clone(), viewport_id, window, None, None, None);
        let renderer =
            EguiRenderer::new(device, output_format, egui_wgpu::RendererOptions::default());

        Self {
            context,
            state,
            renderer,
        }
    }

    /// Feeds a winit window event to egui.
    /// Returns true if egui consumed the event.
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Runs one UI frame and handles platform output.
    ///
    /// Texture "url" hyperlinks in the inspector open through the platform
    /// output handled here.
    pub fn run(&mut self, window: &Window, build_ui: impl FnMut(&Context)) -> egui::FullOutput {
        let raw_input = self.state.take_egui_input(window);
        let output = self.context.run(raw_input, build_ui);
        self.state
            .handle_platform_output(window, output.platform_output.clone());
        output
    }

    /// Paints a frame's output on top of `view`, keeping what is already
    /// there. Texture previews uploaded this frame are created before the
    /// pass and freed textures are released after it.
    ///
    /// Returns the command buffers egui needs submitted before `encoder`.
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        screen_descriptor: &ScreenDescriptor,
        output: egui::FullOutput,
    ) -> Vec<wgpu::CommandBuffer> {
        let paint_jobs = self
            .context
            .tessellate(output.shapes, output.pixels_per_point);

        for (id, image_delta) in &output.textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        let commands =
            self.renderer
                .update_buffers(device, queue, encoder, &paint_jobs, screen_descriptor);

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("shaderscope overlay pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            // egui-wgpu requires a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();
            self.renderer
                .render(&mut render_pass, &paint_jobs, screen_descriptor);
        }

        for id in &output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        commands
    }
}
