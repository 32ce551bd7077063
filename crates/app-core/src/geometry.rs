//! CPU-side mesh builders for the scene primitives.
//!
//! Both frontends upload these as vertex/index buffers; nothing here touches
//! a GPU API.

use glam::Vec3;

/// Interleaved vertex layout shared by every pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// UV sphere centered at the origin.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for y in 0..=h {
        let v = y as f32 / h as f32;
        let phi = v * std::f32::consts::PI;
        for x in 0..=w {
            let u = x as f32 / w as f32;
            let theta = u * std::f32::consts::TAU;
            let dir = Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            vertices.push(Vertex {
                position: (dir * radius).to_array(),
                normal: dir.to_array(),
                uv: [u, 1.0 - v],
            });
        }
    }
    let mut indices = Vec::with_capacity((w * h * 6) as usize);
    for y in 0..h {
        for x in 0..w {
            let a = y * (w + 1) + x;
            let b = a + w + 1;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    MeshData { vertices, indices }
}

/// Flat annulus in the XY plane, facing +Z.
pub fn ring(inner_radius: f32, outer_radius: f32, theta_segments: u32) -> MeshData {
    let s = theta_segments.max(3);
    let mut vertices = Vec::with_capacity(((s + 1) * 2) as usize);
    for i in 0..=s {
        let angle = i as f32 / s as f32 * std::f32::consts::TAU;
        let dir = Vec3::new(angle.cos(), angle.sin(), 0.0);
        for (radius, uv_r) in [(inner_radius, 0.0), (outer_radius, 1.0)] {
            vertices.push(Vertex {
                position: (dir * radius).to_array(),
                normal: [0.0, 0.0, 1.0],
                uv: [i as f32 / s as f32, uv_r],
            });
        }
    }
    let mut indices = Vec::with_capacity((s * 6) as usize);
    for i in 0..s {
        let base = i * 2;
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
    }
    MeshData { vertices, indices }
}

/// Cone centered at the origin with its apex on -Z, so a +Z look-at toward
/// the globe leaves the tip trailing outward.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let s = radial_segments.max(3);
    let half = height * 0.5;
    let apex = Vec3::new(0.0, 0.0, -half);
    let mut vertices = Vec::with_capacity((s + 2) as usize + s as usize);
    // apex + base rim for the sides
    vertices.push(Vertex {
        position: apex.to_array(),
        normal: [0.0, 0.0, -1.0],
        uv: [0.5, 1.0],
    });
    let slant = Vec3::new(height, 0.0, radius).length();
    for i in 0..=s {
        let angle = i as f32 / s as f32 * std::f32::consts::TAU;
        let (sin, cos) = angle.sin_cos();
        let normal = Vec3::new(cos * height / slant, sin * height / slant, -radius / slant);
        vertices.push(Vertex {
            position: [cos * radius, sin * radius, half],
            normal: normal.to_array(),
            uv: [i as f32 / s as f32, 0.0],
        });
    }
    let mut indices = Vec::with_capacity((s * 6) as usize);
    for i in 0..s {
        indices.extend_from_slice(&[0, 1 + i, 2 + i]);
    }
    // base cap
    let center = vertices.len() as u32;
    vertices.push(Vertex {
        position: [0.0, 0.0, half],
        normal: [0.0, 0.0, 1.0],
        uv: [0.5, 0.5],
    });
    let rim_start = 1;
    for i in 0..s {
        indices.extend_from_slice(&[center, rim_start + i + 1, rim_start + i]);
    }
    MeshData { vertices, indices }
}

/// Inner/outer radii of gravity ring `i`.
pub fn gravity_ring_radii(i: usize) -> (f32, f32) {
    let inner = 0.9 + i as f32 / 1.5 + 0.75;
    (inner, inner + 0.009)
}

/// Segment count of gravity ring `i`.
pub fn gravity_ring_segments(i: usize) -> u32 {
    80 + i as u32
}
