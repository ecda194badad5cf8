//! Factory functions for creating test data.

use shared::{Voxel, DEFAULT_COLOR, LATTICE_STEP, MAX_VOXELS};

/// A voxel with an explicit color and lattice position.
pub fn voxel(color: &str, x: f32, y: f32, z: f32) -> Voxel {
    Voxel::new(color, [x, y, z])
}

/// A default-gray voxel at a lattice position.
pub fn gray_voxel(x: f32, y: f32, z: f32) -> Voxel {
    voxel(DEFAULT_COLOR, x, y, z)
}

/// `n` voxels stacked upward (negative Y) from the origin.
pub fn column(n: usize) -> Vec<Voxel> {
    (0..n)
        .map(|i| gray_voxel(0.0, -(i as f32) * LATTICE_STEP, 0.0))
        .collect()
}

/// A store filled to the 100-voxel ceiling: a 10x10 slab in the XZ plane.
pub fn full_slab() -> Vec<Voxel> {
    (0..MAX_VOXELS)
        .map(|i| {
            let x = (i % 10) as f32 * LATTICE_STEP;
            let z = (i / 10) as f32 * LATTICE_STEP;
            gray_voxel(x, 0.0, z)
        })
        .collect()
}
