use super::helpers;
use crate::core::TextureSlot;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SpriteUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) tint: [f32; 4],
}

/// Mascot plane pipeline plus one bind group per texture slot.
///
/// Every slot starts bound to a 1×1 transparent placeholder; `upload`
/// swaps in the real image once it has loaded.
pub(crate) struct SpriteResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    // Kept alive for the bind groups that reference them
    textures: Vec<wgpu::Texture>,
    slots: [wgpu::BindGroup; 3],
}

impl SpriteResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        color_format: wgpu::TextureFormat,
        scene_bgl: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sprite_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SPRITE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sprite_bgl"),
            entries: &[
                helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sprite_pl"),
            bind_group_layouts: &[scene_bgl, &bgl],
            push_constant_ranges: &[],
        });
        let targets = helpers::premultiplied_target(color_format);
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sprite_pipeline"),
            layout: Some(&pl),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_sprite"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            // Double sided: the plane is seen from behind mid-swap
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: helpers::scene_multisample(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_sprite"),
                targets: &targets,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sprite_uniforms"),
            size: std::mem::size_of::<SpriteUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("sprite_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let (placeholder, placeholder_view) =
            helpers::create_rgba_texture(device, queue, "sprite_placeholder", 1, 1, &[0, 0, 0, 0]);
        let bind = |label: &str| {
            make_bind_group(device, &bgl, &uniform_buffer, &placeholder_view, &sampler, label)
        };
        let slots = [bind("sprite_hero"), bind("sprite_pose"), bind("sprite_thumbs")];

        Self {
            pipeline,
            uniform_buffer,
            bgl,
            sampler,
            textures: vec![placeholder],
            slots,
        }
    }

    /// Upload decoded pixels for `slot` and rebind it.
    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        slot: TextureSlot,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) {
        let expected = (width as usize) * (height as usize) * 4;
        if rgba.len() < expected {
            log::warn!(
                "[texture] {:?}: {} bytes for {}x{}, keeping placeholder",
                slot,
                rgba.len(),
                width,
                height
            );
            return;
        }
        let (tex, view) =
            helpers::create_rgba_texture(device, queue, "sprite_texture", width, height, rgba);
        self.slots[slot.index()] = make_bind_group(
            device,
            &self.bgl,
            &self.uniform_buffer,
            &view,
            &self.sampler,
            "sprite_slot",
        );
        self.textures.push(tex);
    }

    pub(crate) fn bind_group(&self, slot: TextureSlot) -> &wgpu::BindGroup {
        &self.slots[slot.index()]
    }
}

fn make_bind_group(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    uniforms: &wgpu::Buffer,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout: bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
