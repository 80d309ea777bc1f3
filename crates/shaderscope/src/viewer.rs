//! A minimal window hosting the overlay.
//!
//! The viewer clears the window to a background colour and paints the
//! overlay on top. It stands in for the host application's own render loop.

use std::sync::Arc;

use egui_wgpu::ScreenDescriptor;
use pollster::FutureExt;
use shaderscope_core::{RendererInfo, Result, ShaderscopeError};
use shaderscope_ui::EguiIntegration;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use crate::overlay::Overlay;

/// Window settings for [`run_viewer`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Clear colour, linear RGB.
    pub background: [f32; 3],
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            title: "shaderscope".to_string(),
            width: 1280,
            height: 720,
            background: [0.1, 0.1, 0.1],
        }
    }
}

fn render_error(err: impl std::fmt::Display) -> ShaderscopeError {
    ShaderscopeError::RenderError(err.to_string())
}

/// Surface, device, and queue of the viewer window.
struct Gpu {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

impl Gpu {
    async fn new(window: Arc<Window>) -> Result<(Self, RendererInfo)> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..wgpu::InstanceDescriptor::default()
        });

        let surface = instance.create_surface(window.clone()).map_err(render_error)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(render_error)?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("shaderscope device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
            })
            .await
            .map_err(render_error)?;

        let size = window.inner_size();
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first())
            .copied()
            .ok_or_else(|| render_error("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let info = adapter.get_info();
        let renderer = RendererInfo {
            backend: format!("{:?}", info.backend),
            adapter: info.name,
        };

        Ok((
            Self {
                surface,
                device,
                queue,
                config,
            },
            renderer,
        ))
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }
}

struct Viewer {
    overlay: Overlay,
    options: ViewerOptions,
    window: Option<Arc<Window>>,
    gpu: Option<Gpu>,
    egui: Option<EguiIntegration>,
    error: Option<ShaderscopeError>,
}

impl Viewer {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.options.title.clone())
            .with_inner_size(LogicalSize::new(self.options.width, self.options.height));
        let window = Arc::new(event_loop.create_window(attributes).map_err(render_error)?);

        let (gpu, renderer) = Gpu::new(window.clone()).block_on()?;
        log::info!("renderer: {} on {}", renderer.adapter, renderer.backend);
        self.overlay
            .store()
            .write()
            .map_err(|_| ShaderscopeError::StorePoisoned)?
            .set_renderer(Some(renderer));

        self.egui = Some(EguiIntegration::new(&gpu.device, gpu.config.format, &window));
        self.gpu = Some(gpu);
        self.window = Some(window);
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self) -> Result<()> {
        let Self {
            overlay,
            options,
            window: Some(window),
            gpu: Some(gpu),
            egui: Some(egui),
            ..
        } = self
        else {
            return Ok(());
        };

        let frame = match gpu.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.resize(gpu.config.width, gpu.config.height);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("surface timeout");
                return Ok(());
            }
            Err(err) => return Err(render_error(err)),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("shaderscope frame"),
            });

        let [r, g, b] = options.background;
        drop(encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("shaderscope clear pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: f64::from(r),
                        g: f64::from(g),
                        b: f64::from(b),
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            ..Default::default()
        }));

        let output = egui.run(window, |ctx| overlay.show(ctx));
        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: window.scale_factor() as f32,
        };
        let egui_commands = egui.paint(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &view,
            &screen_descriptor,
            output,
        );

        gpu.queue
            .submit(egui_commands.into_iter().chain(std::iter::once(encoder.finish())));
        frame.present();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: ShaderscopeError) {
        log::error!("{err}");
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for Viewer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let (Some(egui), Some(window)) = (&mut self.egui, &self.window) {
            egui.handle_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.render() {
                    self.fail(event_loop, err);
                    return;
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Opens a window showing `overlay` and blocks until it is closed.
///
/// The store's renderer is set once the GPU adapter is known, which enables
/// uniform inspection.
pub fn run_viewer(overlay: Overlay, options: ViewerOptions) -> Result<()> {
    crate::init_logging();
    let event_loop = EventLoop::new().map_err(render_error)?;
    let mut viewer = Viewer {
        overlay,
        options,
        window: None,
        gpu: None,
        egui: None,
        error: None,
    };
    event_loop.run_app(&mut viewer).map_err(render_error)?;
    viewer.error.map_or(Ok(()), Err)
}
