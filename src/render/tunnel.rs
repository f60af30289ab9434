use super::helpers;
use wgpu::util::DeviceExt;

pub(crate) struct TunnelResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertex_buffer: wgpu::Buffer,
    // One f32 depth per segment instance
    pub(crate) instance_buffer: wgpu::Buffer,
    pub(crate) vertex_count: u32,
    pub(crate) instance_count: u32,
}

pub(crate) fn create_tunnel_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    scene_bgl: &wgpu::BindGroupLayout,
    lines: &[[f32; 3]],
    depths: &[f32],
) -> TunnelResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("tunnel_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::TUNNEL_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("tunnel_pl"),
        bind_group_layouts: &[scene_bgl],
        push_constant_ranges: &[],
    });
    let vertex_layouts = [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3],
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<f32>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &wgpu::vertex_attr_array![1 => Float32],
        },
    ];
    let targets = helpers::premultiplied_target(color_format);
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("tunnel_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_tunnel"),
            buffers: &vertex_layouts,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: helpers::scene_multisample(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_tunnel"),
            targets: &targets,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("tunnel_vertices"),
        contents: bytemuck::cast_slice(lines),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("tunnel_depths"),
        contents: bytemuck::cast_slice(depths),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    });

    TunnelResources {
        pipeline,
        vertex_buffer,
        instance_buffer,
        vertex_count: lines.len() as u32,
        instance_count: depths.len() as u32,
    }
}
