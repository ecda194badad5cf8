//! Mesh projection, painter's-algorithm depth ordering and hit testing.
//!
//! Everything here is a pure function of the store and the camera: projected
//! faces are recomputed each frame and never cached across mutations.

use egui::{Pos2, Rect, Vec2};
use glam::{Mat4, Vec3};
use shared::{Face, Voxel};

use super::camera::OrbitCamera;
use super::mesh;

/// One voxel face projected to screen space.
#[derive(Clone, Debug)]
pub struct ProjectedFace {
    pub points: [Pos2; 4],
    /// Mean view-space depth of the four corners; more negative is farther.
    pub depth: f32,
    /// Index of the owning voxel in the store.
    pub voxel: usize,
    pub face: Face,
}

/// View-space point -> screen position plus depth. Y-down world convention,
/// so view coordinates map to the screen without a flip.
pub fn to_screen(transform: &Mat4, pan: Vec2, rect: Rect, point: Vec3) -> (Pos2, f32) {
    let p = transform.transform_point3(point);
    let center = rect.center();
    (Pos2::new(center.x + pan.x + p.x, center.y + pan.y + p.y), p.z)
}

/// Project every face of every voxel, tagged with its owner so a clicked
/// polygon can be mapped back to a mutation target.
pub fn project_store(voxels: &[Voxel], camera: &OrbitCamera, rect: Rect) -> Vec<ProjectedFace> {
    let transform = camera.view_matrix();
    let mut faces = Vec::with_capacity(voxels.len() * 6);

    for (voxel, v) in voxels.iter().enumerate() {
        let center = Vec3::from_array(v.position);
        for face in Face::ALL {
            let mut points = [Pos2::ZERO; 4];
            let mut depth = 0.0;
            for (i, corner) in mesh::face_quad(face).into_iter().enumerate() {
                let (p, z) = to_screen(&transform, camera.pan, rect, center + corner);
                points[i] = p;
                depth += z;
            }
            faces.push(ProjectedFace {
                points,
                depth: depth / 4.0,
                voxel,
                face,
            });
        }
    }
    faces
}

/// Order faces for the painter's algorithm: ascending mean depth, so farther
/// faces are drawn first and nearer ones overdraw them. The sort is stable —
/// equal depths keep their input order, which keeps rendering flicker-free.
pub fn sort_back_to_front(faces: &mut [ProjectedFace]) {
    faces.sort_by(|a, b| a.depth.total_cmp(&b.depth));
}

/// The topmost (nearest) polygon under the cursor, as the owning voxel index
/// and face. Expects the depth-sorted list; scans it from the near end, which
/// mirrors how overdraw decides what the user actually sees.
pub fn hit_test(sorted: &[ProjectedFace], pos: Pos2) -> Option<(usize, Face)> {
    sorted
        .iter()
        .rev()
        .find(|f| quad_contains(&f.points, pos))
        .map(|f| (f.voxel, f.face))
}

/// Convex-quad containment: the point is inside when all edge cross products
/// share a sign. Projection may mirror the winding, so both signs are allowed
/// as long as they are not mixed.
fn quad_contains(quad: &[Pos2; 4], p: Pos2) -> bool {
    let mut has_pos = false;
    let mut has_neg = false;
    for i in 0..4 {
        let a = quad[i];
        let b = quad[(i + 1) % 4];
        let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
        if cross > 0.0 {
            has_pos = true;
        } else if cross < 0.0 {
            has_neg = true;
        }
    }
    !(has_pos && has_neg)
}
