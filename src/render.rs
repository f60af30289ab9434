use crate::core::{
    wireframe_cylinder, SceneSnapshot, TextureSlot, AMBIENT_LIGHT, POINT_LIGHT_COLOR, POINT_LIGHT_POSITION,
    TUNNEL_COLOR, TUNNEL_LENGTH, TUNNEL_LENGTH_SEGMENTS, TUNNEL_RADIAL_SEGMENTS, TUNNEL_RADIUS,
};
use web_sys as web;

mod helpers;
mod sprite;
mod tunnel;

use sprite::{SpriteResources, SpriteUniforms};
use tunnel::{create_tunnel_resources, TunnelResources};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    ambient: [f32; 4],
    point_pos: [f32; 4],
    point_color: [f32; 4],
    tunnel_color: [f32; 4],
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    msaa_tex: wgpu::Texture,
    msaa_view: wgpu::TextureView,

    scene_uniforms: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    tunnel: TunnelResources,
    sprite: SpriteResources,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, tunnel_depths: [f32; 2]) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // The page must show through the canvas
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?} {:?}", width, height, format, alpha_mode);

        let (msaa_tex, msaa_view) = helpers::create_msaa_target(&device, width, height, format);

        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
            )],
        });
        let scene_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniforms.as_entire_binding(),
            }],
        });

        let lines = wireframe_cylinder(
            TUNNEL_RADIUS,
            TUNNEL_LENGTH,
            TUNNEL_RADIAL_SEGMENTS,
            TUNNEL_LENGTH_SEGMENTS,
        );
        let tunnel = create_tunnel_resources(&device, format, &scene_bgl, &lines, &tunnel_depths);
        let sprite = SpriteResources::new(&device, &queue, format, &scene_bgl);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            msaa_tex,
            msaa_view,
            scene_uniforms,
            scene_bind_group,
            tunnel,
            sprite,
            width,
            height,
        })
    }

    pub fn upload_texture(&mut self, slot: TextureSlot, width: u32, height: u32, rgba: &[u8]) {
        self.sprite
            .upload(&self.device, &self.queue, slot, width, height, rgba);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            (self.msaa_tex, self.msaa_view) =
                helpers::create_msaa_target(&self.device, width, height, self.config.format);
        }
    }

    /// Reconfigure the surface after it was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, snapshot: &SceneSnapshot) -> Result<(), wgpu::SurfaceError> {
        let scene = SceneUniforms {
            view_proj: snapshot.view_proj.to_cols_array_2d(),
            ambient: AMBIENT_LIGHT,
            point_pos: POINT_LIGHT_POSITION.extend(1.0).to_array(),
            point_color: POINT_LIGHT_COLOR,
            tunnel_color: TUNNEL_COLOR,
        };
        self.queue
            .write_buffer(&self.scene_uniforms, 0, bytemuck::bytes_of(&scene));
        self.queue.write_buffer(
            &self.tunnel.instance_buffer,
            0,
            bytemuck::cast_slice(&snapshot.tunnel_depths),
        );
        let sprite = SpriteUniforms {
            model: snapshot.sprite_model.to_cols_array_2d(),
            tint: [1.0, 1.0, 1.0, 1.0],
        };
        self.queue
            .write_buffer(&self.sprite.uniform_buffer, 0, bytemuck::bytes_of(&sprite));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);

            // Tunnel first; the sprite always draws over it
            rpass.set_pipeline(&self.tunnel.pipeline);
            rpass.set_vertex_buffer(0, self.tunnel.vertex_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.tunnel.instance_buffer.slice(..));
            rpass.draw(0..self.tunnel.vertex_count, 0..self.tunnel.instance_count);

            rpass.set_pipeline(&self.sprite.pipeline);
            rpass.set_bind_group(1, self.sprite.bind_group(snapshot.sprite_texture), &[]);
            rpass.draw(0..6, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
