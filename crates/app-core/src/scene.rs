//! Visual-side state types shared with the frontends.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for both native and web targets. The frontends consume them to
//! build camera matrices and per-particle instance data.

use glam::{EulerRot, Mat3, Mat4, Vec3};

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z};
use crate::orientation::Orientable;
use crate::particles::Particle;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed scene camera, looking down -Z at the globe.
    pub fn standard(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Rotation matrix of a pointer-tracking group.
pub fn group_rotation(o: &Orientable) -> Mat4 {
    Mat4::from_euler(EulerRot::XYZ, o.pitch, o.yaw, 0.0)
}

/// Orthonormal basis whose +Z axis points from `position` at the origin.
///
/// The gravity field is radial, so the direction to the origin does not
/// change between resets; deriving the basis from the current position is
/// the reset-time orientation.
pub fn face_origin_basis(position: Vec3) -> Mat3 {
    let fwd = (-position).normalize_or_zero();
    if fwd == Vec3::ZERO {
        return Mat3::IDENTITY;
    }
    let up_hint = if fwd.y.abs() > 0.999 { Vec3::Z } else { Vec3::Y };
    let right = up_hint.cross(fwd).normalize();
    let up = fwd.cross(right);
    Mat3::from_cols(right, up, fwd)
}

/// Per-particle GPU instance payload: a column-major 4x4 model matrix.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VectorInstance {
    pub model: [[f32; 4]; 4],
}

impl VectorInstance {
    /// Translation-only instance (used by the dot pool).
    pub fn at(position: Vec3) -> Self {
        Self {
            model: Mat4::from_translation(position).to_cols_array_2d(),
        }
    }

    /// Full cone transform for one particle: translate to the particle,
    /// face the origin, scale by life/speed.
    pub fn from_particle(p: &Particle) -> Self {
        let model = Mat4::from_translation(p.position)
            * Mat4::from_mat3(face_origin_basis(p.position))
            * Mat4::from_scale(p.vector_scale());
        Self {
            model: model.to_cols_array_2d(),
        }
    }
}

/// Optional scene content, all disabled by default. The latitude/longitude
/// ring groups and the dot lattice are built and rig-tracked either way;
/// these flags only control whether they reach the visible scene.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneFlags {
    pub show_lat_rings: bool,
    pub show_lng_rings: bool,
    /// When set, dots spread onto the particle lattice instead of resting
    /// at the origin.
    pub dot_lattice: bool,
}
