//! Shared voxel data model.
//!
//! The types here are the persisted surface of the editor: everything that
//! crosses the JSON import/export boundary lives in this crate, together with
//! the face-displacement table the rest of the app keys on.

pub mod codec;

use serde::{Deserialize, Serialize};

/// Hard ceiling on the number of voxels in a scene.
pub const MAX_VOXELS: usize = 100;

/// Above this count the UI starts showing remaining capacity.
pub const SOFT_LIMIT: usize = 60;

/// Color of the voxel a fresh (or reset) scene starts with.
pub const DEFAULT_COLOR: &str = "#d5d5d5";

/// Voxels sit on a lattice with this spacing; adjacent voxels differ by
/// exactly this amount along one axis.
pub const LATTICE_STEP: f32 = 2.0;

/// A single placed voxel: a CSS color spec plus a lattice position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voxel {
    pub color: String,
    pub position: [f32; 3],
}

impl Voxel {
    pub fn new(color: impl Into<String>, position: [f32; 3]) -> Self {
        Self {
            color: color.into(),
            position,
        }
    }

    /// The voxel every scene starts from: light gray, at the origin.
    pub fn origin_default() -> Self {
        Self::new(DEFAULT_COLOR, [0.0, 0.0, 0.0])
    }
}

/// One of the six faces of a voxel cube.
///
/// The order matches the face table in the viewport mesh; screen-space Y
/// points down, so `Top` is the face at negative Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Front,
    Right,
    Left,
    Bottom,
    Back,
    Top,
}

/// Displacement to the neighboring lattice position, keyed by face.
/// Indexed by `Face as usize` — keep in sync with the enum order.
const FACE_OFFSETS: [[f32; 3]; 6] = [
    [0.0, 0.0, LATTICE_STEP],  // Front  -> +Z
    [LATTICE_STEP, 0.0, 0.0],  // Right  -> +X
    [-LATTICE_STEP, 0.0, 0.0], // Left   -> -X
    [0.0, LATTICE_STEP, 0.0],  // Bottom -> +Y
    [0.0, 0.0, -LATTICE_STEP], // Back   -> -Z
    [0.0, -LATTICE_STEP, 0.0], // Top    -> -Y
];

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Right,
        Face::Left,
        Face::Bottom,
        Face::Back,
        Face::Top,
    ];

    /// Lattice displacement toward the neighbor across this face.
    pub fn offset(self) -> [f32; 3] {
        FACE_OFFSETS[self as usize]
    }

    /// Position of the voxel that a click on this face would create.
    pub fn next_position(self, position: [f32; 3]) -> [f32; 3] {
        let d = self.offset();
        [position[0] + d[0], position[1] + d[1], position[2] + d[2]]
    }

    /// The face on the opposite side of the cube.
    pub fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Bottom => Face::Top,
            Face::Top => Face::Bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_position_axes() {
        let p = [0.0, 0.0, 0.0];
        assert_eq!(Face::Top.next_position(p), [0.0, -2.0, 0.0]);
        assert_eq!(Face::Bottom.next_position(p), [0.0, 2.0, 0.0]);
        assert_eq!(Face::Left.next_position(p), [-2.0, 0.0, 0.0]);
        assert_eq!(Face::Right.next_position(p), [2.0, 0.0, 0.0]);
        assert_eq!(Face::Front.next_position(p), [0.0, 0.0, 2.0]);
        assert_eq!(Face::Back.next_position(p), [0.0, 0.0, -2.0]);
    }

    #[test]
    fn test_next_position_invertible() {
        let p = [4.0, -2.0, 6.0];
        for face in Face::ALL {
            assert_eq!(face.opposite().next_position(face.next_position(p)), p);
        }
    }

    #[test]
    fn test_offsets_are_single_axis() {
        for face in Face::ALL {
            let d = face.offset();
            let nonzero = d.iter().filter(|c| **c != 0.0).count();
            assert_eq!(nonzero, 1);
            assert_eq!(d.iter().map(|c| c.abs()).sum::<f32>(), LATTICE_STEP);
        }
    }

    #[test]
    fn test_voxel_serde_shape() {
        let v = Voxel::new("#ff0000", [2.0, 0.0, -2.0]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r##"{"color":"#ff0000","position":[2.0,0.0,-2.0]}"##);
        let back: Voxel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
