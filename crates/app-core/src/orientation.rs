use smallvec::SmallVec;
use std::f32::consts::PI;

use crate::constants::{GLOBE_INITIAL_YAW, GLOBE_YAW_OFFSET, SMOOTHING};

/// Scene-graph subtrees whose rotation follows the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupId {
    Globe,
    Vectors,
    Dots,
    Rings,
    RingsLat,
    RingsLng,
}

/// Current rotation of one tracked group, eased toward a pointer-derived
/// target each frame.
#[derive(Clone, Copy, Debug)]
pub struct Orientable {
    pub id: GroupId,
    pub pitch: f32,
    pub yaw: f32,
    /// Constant angular offset subtracted from the yaw target.
    pub yaw_offset: f32,
}

impl Orientable {
    pub fn new(id: GroupId, yaw_offset: f32) -> Self {
        Self {
            id,
            pitch: 0.0,
            yaw: 0.0,
            yaw_offset,
        }
    }

    pub fn with_initial_yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    /// One first-order smoothing step toward the pointer target. Stable for
    /// any `k` in (0, 1): the rotation decays toward the target without
    /// overshoot and is never cancelled, the target just moves.
    pub fn ease_toward(&mut self, pointer_x: f32, pointer_y: f32, k: f32) {
        self.pitch += k * (pointer_y * PI - self.pitch);
        self.yaw += k * (pointer_x * PI - self.yaw_offset - self.yaw);
    }
}

/// The full set of pointer-tracking groups, stepped uniformly.
pub struct OrientationRig {
    groups: SmallVec<[Orientable; 6]>,
}

impl OrientationRig {
    /// The scene's standard six groups. Only the globe carries a yaw offset
    /// and a non-zero starting yaw (the textured side faces the camera).
    pub fn standard() -> Self {
        let mut groups = SmallVec::new();
        groups.push(
            Orientable::new(GroupId::Globe, GLOBE_YAW_OFFSET).with_initial_yaw(GLOBE_INITIAL_YAW),
        );
        groups.push(Orientable::new(GroupId::Vectors, 0.0));
        groups.push(Orientable::new(GroupId::Dots, 0.0));
        groups.push(Orientable::new(GroupId::Rings, 0.0));
        groups.push(Orientable::new(GroupId::RingsLat, 0.0));
        groups.push(Orientable::new(GroupId::RingsLng, 0.0));
        Self { groups }
    }

    /// Ease every group toward the current pointer target.
    pub fn step(&mut self, pointer_x: f32, pointer_y: f32) {
        for g in &mut self.groups {
            g.ease_toward(pointer_x, pointer_y, SMOOTHING);
        }
    }

    pub fn get(&self, id: GroupId) -> Option<&Orientable> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Orientable> {
        self.groups.iter()
    }
}
