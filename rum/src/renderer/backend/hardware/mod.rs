use std::panic;

use wgpu::util::DeviceExt;
use winit::{
    dpi::PhysicalSize,
    event::Event,
    event_loop::{ControlFlow, EventLoop},
    platform::run_return::EventLoopExtRunReturn,
    window::{Window, WindowBuilder},
};

mod display;
mod texture;

pub use texture::FramebufferTexture;

use crate::{
    config::ContextConfig,
    error::{Error, Result},
    event::InputState,
    renderer::Renderer,
    vertex::{screen_quad, Vertex, QUAD_INDICES},
};

/// Native window with a wgpu surface showing the framebuffer texture.
///
/// Must be created on the main thread.
pub struct HardwareRenderer {
    // Fields drop in order: GPU objects first, then the window and its event loop.
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    texture: FramebufferTexture,
    display: display::Display,

    window: Window,
    event_loop: EventLoop<()>,
}

impl HardwareRenderer {
    pub async fn new(config: &ContextConfig) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(Error::ContextCreationFailed(format!(
                "invalid size {}x{}",
                config.width, config.height
            )));
        }

        let event_loop = create_event_loop()?;
        let window = WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(false)
            .build(&event_loop)
            .map_err(|e| Error::ContextCreationFailed(e.to_string()))?;

        let display = display::Display::new(&window).await?;
        let device = &display.device;

        let texture_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            multisampled: false,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler {
                            comparison: false,
                            filtering: true,
                        },
                        count: None,
                    },
                ],
                label: Some("texture_bind_group_layout"),
            });

        let shader = device.create_shader_module(&wgpu::ShaderModuleDescriptor {
            label: Some("Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Render Pipeline Layout"),
                bind_group_layouts: &[&texture_bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Render Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "main_v",
                buffers: &[Vertex::desc()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "main_f",
                targets: &[wgpu::ColorTargetState {
                    format: display.config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                }],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                clamp_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(&screen_quad(config.width, config.height)),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        // Sampling an sRGB texture into an sRGB target leaves the bytes untouched.
        let texture_format = if display.is_srgb() {
            wgpu::TextureFormat::Rgba8UnormSrgb
        } else {
            wgpu::TextureFormat::Rgba8Unorm
        };
        let texture = FramebufferTexture::new(
            device,
            &texture_bind_group_layout,
            (config.width, config.height),
            texture_format,
            &config.texture,
            Some("Framebuffer Texture"),
        );
        texture.write(&display.queue, &vec![0; texture.byte_len()]);

        log::info!(
            "Opened window \"{}\" {}x{}",
            config.title,
            config.width,
            config.height
        );

        Ok(Self {
            render_pipeline,
            vertex_buffer,
            index_buffer,
            texture,
            display,
            window,
            event_loop,
        })
    }

}

// winit panics instead of failing when no display server is reachable or when called off
// the main thread.
fn create_event_loop() -> Result<EventLoop<()>> {
    panic::catch_unwind(EventLoop::new).map_err(|payload| {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "event loop creation panicked".to_string());
        Error::ContextCreationFailed(reason)
    })
}

impl Renderer for HardwareRenderer {
    fn create(config: &ContextConfig) -> Result<Self> {
        pollster::block_on(Self::new(config))
    }

    fn pump_events(&mut self, input: &mut InputState) {
        let window_id = self.window.id();

        self.event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            match event {
                Event::WindowEvent {
                    ref event,
                    window_id: id,
                } if id == window_id => {
                    input.handle_window_event(event)
                }
                Event::MainEventsCleared => *control_flow = ControlFlow::Exit,
                _ => {}
            }
        });
    }

    fn upload(&mut self, pixels: &[u8]) {
        if pixels.len() != self.texture.byte_len() {
            log::warn!(
                "Ignoring upload of {} bytes into a {} byte texture",
                pixels.len(),
                self.texture.byte_len()
            );
            return;
        }
        log::debug!("Uploading {} bytes to the framebuffer texture", pixels.len());
        self.texture.write(&self.display.queue, pixels);
    }

    fn render(&mut self) -> Result<()> {
        let output = match self.display.surface.get_current_texture() {
            Ok(output) => output,
            // Reconfigure the surface if lost, and try again next frame
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                self.display.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Timed out waiting for the next frame");
                return Ok(());
            }
            Err(e) => {
                log::error!("Render error: {:?}", e);
                return Err(e.into());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.display
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Render Encoder"),
                });

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Render Pass"),
            color_attachments: &[wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: true,
                },
            }],
            depth_stencil_attachment: None,
        });

        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_bind_group(0, &self.texture.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);

        drop(render_pass);
        self.display.queue.submit(std::iter::once(encoder.finish()));

        output.present();

        Ok(())
    }
}

impl Drop for HardwareRenderer {
    fn drop(&mut self) {
        log::info!("Window {:?} closed", self.window.id());
    }
}
