//! Static geometry of a voxel cube.

use glam::Vec3;
use shared::Face;

/// Eight corners of a voxel cube centered at the origin. Half-extent 1, so
/// with the lattice spacing of 2 neighboring voxels touch exactly.
pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
];

/// Vertex indices of each face quad, in consistent winding.
/// Indexed by `Face as usize` (front, right, left, bottom, back, top).
pub const FACE_QUADS: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // Front  (+Z)
    [1, 5, 6, 2], // Right  (+X)
    [4, 0, 3, 7], // Left   (-X)
    [3, 2, 6, 7], // Bottom (+Y)
    [5, 4, 7, 6], // Back   (-Z)
    [4, 5, 1, 0], // Top    (-Y)
];

/// The four corners of a face, in winding order.
pub fn face_quad(face: Face) -> [Vec3; 4] {
    FACE_QUADS[face as usize].map(|i| CUBE_VERTICES[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_face_is_planar_on_its_axis() {
        for face in Face::ALL {
            let corners = face_quad(face);
            let offset = face.offset();
            // The constant coordinate of the face plane matches the sign of
            // the face's displacement axis.
            let axis = offset.iter().position(|c| *c != 0.0).unwrap();
            let expected = offset[axis].signum();
            for corner in corners {
                assert_eq!(corner.to_array()[axis], expected, "{face:?}");
            }
        }
    }

    #[test]
    fn test_faces_cover_all_vertices() {
        let mut seen = [false; 8];
        for quad in FACE_QUADS {
            for i in quad {
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
