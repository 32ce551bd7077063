use glam::Mat4;
use web_sys as web;

use app_core::{
    geometry, gravity_ring_radii, gravity_ring_segments, group_rotation, Camera, GroupId,
    OrientationRig, ParticleField, SceneFlags, VectorInstance, CLEAR_COLOR_SRGB, CONE_HEIGHT,
    CONE_RADIUS, CONE_SEGMENTS, DOT_RADIUS, DOT_SEGMENTS, EARTH_COLOR, FILL_COLOR,
    GLOBE_OUTLINE_OUTER, GLOBE_RADIUS, GLOBE_SEGMENTS, INK_COLOR, LAT_RING_COLOR, LNG_RING_COLOR,
    MOON_DISTANCE, MOON_OUTLINE_OUTER, MOON_RADIUS, MOON_SEGMENTS, RING_COLOR, RING_COUNT,
};

mod helpers;
use helpers::GpuMesh;

const ALPHA_TEST: f32 = 0.5;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color: [f32; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct VectorUniforms {
    view_proj: [[f32; 4]; 4],
    group: [[f32; 4]; 4],
    color: [f32; 4],
}

/// One uniform-colored scene object: its uniform buffer plus static color
/// and texture parameters.
struct SceneNode {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    color: [f32; 4],
    params: [f32; 4],
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    mesh_pipeline: wgpu::RenderPipeline,
    vector_pipeline: wgpu::RenderPipeline,

    earth_texture: wgpu::BindGroup,
    moon_texture: wgpu::BindGroup,
    white_texture: wgpu::BindGroup,

    globe_mesh: GpuMesh,
    outline_mesh: GpuMesh,
    ring_meshes: Vec<GpuMesh>,
    moon_mesh: GpuMesh,
    moon_outline_mesh: GpuMesh,
    cone_mesh: GpuMesh,
    dot_mesh: GpuMesh,

    globe_node: SceneNode,
    fill_node: SceneNode,
    outline_node: SceneNode,
    rings_node: SceneNode,
    lat_rings_node: SceneNode,
    lng_rings_node: SceneNode,
    moon_node: SceneNode,
    moon_outline_node: SceneNode,

    vectors_uniform: wgpu::Buffer,
    vectors_bind_group: wgpu::BindGroup,
    dots_uniform: wgpu::Buffer,
    dots_bind_group: wgpu::BindGroup,
    instance_vb: wgpu::Buffer,
    dot_instance_vb: wgpu::Buffer,
    instance_count: u32,

    flags: SceneFlags,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        earth_img: image::RgbaImage,
        moon_img: image::RgbaImage,
        field: &ParticleField,
        flags: SceneFlags,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

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
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Bind group layouts: per-node uniforms and the optional texture mask
        let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("texture_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            anisotropy_clamp: 10,
            ..Default::default()
        });

        let earth_texture = helpers::texture_bind_group(
            &device,
            &queue,
            &texture_bgl,
            &sampler,
            "earth_tex",
            earth_img.as_raw(),
            earth_img.width(),
            earth_img.height(),
        );
        let moon_texture = helpers::texture_bind_group(
            &device,
            &queue,
            &texture_bgl,
            &sampler,
            "moon_tex",
            moon_img.as_raw(),
            moon_img.width(),
            moon_img.height(),
        );
        let white_texture = helpers::white_bind_group(&device, &queue, &texture_bgl, &sampler);

        // Static meshes
        let globe_mesh = helpers::upload_mesh(
            &device,
            "globe",
            &geometry::sphere(GLOBE_RADIUS, GLOBE_SEGMENTS, GLOBE_SEGMENTS),
        );
        let outline_mesh = helpers::upload_mesh(
            &device,
            "globe_outline",
            &geometry::ring(GLOBE_RADIUS, GLOBE_OUTLINE_OUTER, 80),
        );
        let ring_meshes = (0..RING_COUNT)
            .map(|i| {
                let (inner, outer) = gravity_ring_radii(i);
                helpers::upload_mesh(
                    &device,
                    "gravity_ring",
                    &geometry::ring(inner, outer, gravity_ring_segments(i)),
                )
            })
            .collect::<Vec<_>>();
        let moon_mesh = helpers::upload_mesh(
            &device,
            "moon",
            &geometry::sphere(MOON_RADIUS, MOON_SEGMENTS, MOON_SEGMENTS),
        );
        let moon_outline_mesh = helpers::upload_mesh(
            &device,
            "moon_outline",
            &geometry::ring(MOON_RADIUS, MOON_OUTLINE_OUTER, 60),
        );
        let cone_mesh = helpers::upload_mesh(
            &device,
            "vector_cone",
            &geometry::cone(CONE_RADIUS, CONE_HEIGHT, CONE_SEGMENTS),
        );
        let dot_mesh = helpers::upload_mesh(
            &device,
            "dot",
            &geometry::sphere(DOT_RADIUS, DOT_SEGMENTS, DOT_SEGMENTS),
        );

        let make_node = |label: &str, color: [f32; 4], textured: bool| {
            let buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: std::mem::size_of::<SceneUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &uniform_bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            });
            SceneNode {
                buffer,
                bind_group,
                color: helpers::srgb_color(color),
                params: [if textured { 1.0 } else { 0.0 }, ALPHA_TEST, 0.0, 0.0],
            }
        };

        let globe_node = make_node("globe_node", EARTH_COLOR, true);
        let fill_node = make_node("fill_node", FILL_COLOR, false);
        let outline_node = make_node("outline_node", INK_COLOR, false);
        let rings_node = make_node("rings_node", RING_COLOR, false);
        let lat_rings_node = make_node("lat_rings_node", LAT_RING_COLOR, false);
        let lng_rings_node = make_node("lng_rings_node", LNG_RING_COLOR, false);
        let moon_node = make_node("moon_node", INK_COLOR, true);
        let moon_outline_node = make_node("moon_outline_node", INK_COLOR, false);

        let make_group_uniform = |label: &str| {
            let buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: std::mem::size_of::<VectorUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &uniform_bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            });
            (buffer, bind_group)
        };
        let (vectors_uniform, vectors_bind_group) = make_group_uniform("vectors_uniform");
        let (dots_uniform, dots_bind_group) = make_group_uniform("dots_uniform");

        let instance_count = field.len() as u32;
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("vector_instances"),
            size: (std::mem::size_of::<VectorInstance>() * field.len()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Dots stay at the origin unless the lattice flag spreads them out.
        let dot_instances: Vec<VectorInstance> = if flags.dot_lattice {
            field
                .particles()
                .iter()
                .map(|p| VectorInstance::at(p.position))
                .collect()
        } else {
            vec![VectorInstance::at(glam::Vec3::ZERO); field.len()]
        };
        use wgpu::util::DeviceExt;
        let dot_instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("dot_instances"),
            contents: bytemuck::cast_slice(&dot_instances),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Pipelines
        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(app_core::SCENE_WGSL.into()),
        });
        let vectors_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("vectors_shader"),
            source: wgpu::ShaderSource::Wgsl(app_core::VECTORS_WGSL.into()),
        });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<geometry::Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 24,
                    shader_location: 2,
                },
            ],
        };
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<VectorInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 0,
                    shader_location: 3,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 4,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 32,
                    shader_location: 5,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 48,
                    shader_location: 6,
                },
            ],
        };

        let mesh_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("mesh_pl"),
                bind_group_layouts: &[&uniform_bgl, &texture_bgl],
                push_constant_ranges: &[],
            });
        // Flat materials, alpha blended, drawn back-to-front; no depth buffer
        let mesh_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh_pipeline"),
            layout: Some(&mesh_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_main"),
                buffers: std::slice::from_ref(&vertex_layout),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let vector_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("vector_pl"),
                bind_group_layouts: &[&uniform_bgl],
                push_constant_ranges: &[],
            });
        let vector_buffers = [vertex_layout.clone(), instance_layout];
        let vector_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("vector_pipeline"),
            layout: Some(&vector_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vectors_shader,
                entry_point: Some("vs_main"),
                buffers: &vector_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &vectors_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let [r, g, b] = CLEAR_COLOR_SRGB;
        let clear_color = wgpu::Color {
            r: helpers::srgb_to_linear(r as f32) as f64,
            g: helpers::srgb_to_linear(g as f32) as f64,
            b: helpers::srgb_to_linear(b as f32) as f64,
            a: 1.0,
        };

        Ok(Self {
            surface,
            device,
            queue,
            config,
            mesh_pipeline,
            vector_pipeline,
            earth_texture,
            moon_texture,
            white_texture,
            globe_mesh,
            outline_mesh,
            ring_meshes,
            moon_mesh,
            moon_outline_mesh,
            cone_mesh,
            dot_mesh,
            globe_node,
            fill_node,
            outline_node,
            rings_node,
            lat_rings_node,
            lng_rings_node,
            moon_node,
            moon_outline_node,
            vectors_uniform,
            vectors_bind_group,
            dots_uniform,
            dots_bind_group,
            instance_vb,
            dot_instance_vb,
            instance_count,
            flags,
            width,
            height,
            clear_color,
        })
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
        }
    }

    pub fn render(
        &mut self,
        field: &ParticleField,
        rig: &OrientationRig,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let camera = Camera::standard(self.width as f32 / self.height.max(1) as f32);
        let view_proj = camera.view_proj().to_cols_array_2d();

        let rot = |id: GroupId| {
            rig.get(id)
                .map(group_rotation)
                .unwrap_or(Mat4::IDENTITY)
        };
        let moon_translation = Mat4::from_translation(glam::Vec3::new(MOON_DISTANCE, 0.0, 0.0));

        let write_node = |queue: &wgpu::Queue, node: &SceneNode, model: Mat4| {
            let u = SceneUniforms {
                view_proj,
                model: model.to_cols_array_2d(),
                color: node.color,
                params: node.params,
            };
            queue.write_buffer(&node.buffer, 0, bytemuck::bytes_of(&u));
        };
        write_node(&self.queue, &self.globe_node, rot(GroupId::Globe));
        write_node(&self.queue, &self.fill_node, Mat4::IDENTITY);
        write_node(&self.queue, &self.outline_node, Mat4::IDENTITY);
        write_node(&self.queue, &self.rings_node, rot(GroupId::Rings));
        write_node(
            &self.queue,
            &self.lat_rings_node,
            rot(GroupId::RingsLat) * Mat4::from_rotation_x(std::f32::consts::FRAC_PI_2),
        );
        write_node(
            &self.queue,
            &self.lng_rings_node,
            rot(GroupId::RingsLng) * Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2),
        );
        write_node(&self.queue, &self.moon_node, moon_translation);
        write_node(&self.queue, &self.moon_outline_node, moon_translation);

        let ink = helpers::srgb_color(INK_COLOR);
        let vectors_u = VectorUniforms {
            view_proj,
            group: rot(GroupId::Vectors).to_cols_array_2d(),
            color: ink,
        };
        self.queue
            .write_buffer(&self.vectors_uniform, 0, bytemuck::bytes_of(&vectors_u));
        let dots_u = VectorUniforms {
            view_proj,
            group: rot(GroupId::Dots).to_cols_array_2d(),
            color: ink,
        };
        self.queue
            .write_buffer(&self.dots_uniform, 0, bytemuck::bytes_of(&dots_u));

        let instances: Vec<VectorInstance> = field
            .particles()
            .iter()
            .map(VectorInstance::from_particle)
            .collect();
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&instances));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.mesh_pipeline);
            let draw_mesh =
                |rpass: &mut wgpu::RenderPass<'_>, mesh: &GpuMesh, node: &SceneNode, texture: &wgpu::BindGroup| {
                    rpass.set_bind_group(0, &node.bind_group, &[]);
                    rpass.set_bind_group(1, texture, &[]);
                    rpass.set_vertex_buffer(0, mesh.vb.slice(..));
                    rpass.set_index_buffer(mesh.ib.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
                };
            // Scene-graph add order doubles as the painter's draw order.
            draw_mesh(&mut rpass, &self.outline_mesh, &self.outline_node, &self.white_texture);
            draw_mesh(&mut rpass, &self.globe_mesh, &self.fill_node, &self.white_texture);
            draw_mesh(&mut rpass, &self.globe_mesh, &self.globe_node, &self.earth_texture);
            for mesh in &self.ring_meshes {
                draw_mesh(&mut rpass, mesh, &self.rings_node, &self.white_texture);
            }
            if self.flags.show_lat_rings {
                for mesh in &self.ring_meshes {
                    draw_mesh(&mut rpass, mesh, &self.lat_rings_node, &self.white_texture);
                }
            }
            if self.flags.show_lng_rings {
                for mesh in &self.ring_meshes {
                    draw_mesh(&mut rpass, mesh, &self.lng_rings_node, &self.white_texture);
                }
            }
            draw_mesh(&mut rpass, &self.moon_outline_mesh, &self.moon_outline_node, &self.white_texture);
            draw_mesh(&mut rpass, &self.moon_mesh, &self.moon_node, &self.moon_texture);

            rpass.set_pipeline(&self.vector_pipeline);
            rpass.set_bind_group(0, &self.dots_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.dot_mesh.vb.slice(..));
            rpass.set_vertex_buffer(1, self.dot_instance_vb.slice(..));
            rpass.set_index_buffer(self.dot_mesh.ib.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.dot_mesh.index_count, 0, 0..self.instance_count);

            rpass.set_bind_group(0, &self.vectors_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.cone_mesh.vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.set_index_buffer(self.cone_mesh.ib.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.cone_mesh.index_count, 0, 0..self.instance_count);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
