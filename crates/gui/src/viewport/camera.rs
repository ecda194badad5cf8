use egui::Vec2;
use glam::{Mat4, Vec3};

/// Elevation clamp, degrees. Keeps the eye away from the poles where the
/// fixed (0,1,0) up-vector degenerates.
pub const ELEVATION_MIN: f32 = 150.0;
pub const ELEVATION_MAX: f32 = 226.0;

/// Zoom clamp (uniform scale, voxel units to pixels).
pub const SCALE_MIN: f32 = 4.0;
pub const SCALE_MAX: f32 = 100.0;

/// Orbit camera for the voxel viewport.
///
/// The whole scene uses a screen-style Y-down convention: the `Top` face of a
/// voxel sits at negative Y and projects toward the top of the screen.
pub struct OrbitCamera {
    /// Horizontal orbit angle (degrees, unclamped — wraps trigonometrically)
    pub azimuth: f32,
    /// Vertical orbit angle (degrees, clamped)
    pub elevation: f32,
    /// Uniform scale applied after the look-at transform
    pub scale: f32,
    /// Screen-space offset, accumulated from secondary-button drags
    pub pan: Vec2,
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            azimuth: 45.0,
            elevation: 190.0,
            scale: 20.0,
            pan: Vec2::ZERO,
        }
    }

    pub fn rotate(&mut self, d_azimuth: f32, d_elevation: f32) {
        self.azimuth += d_azimuth;
        self.elevation = (self.elevation + d_elevation).clamp(ELEVATION_MIN, ELEVATION_MAX);
    }

    pub fn zoom(&mut self, step: f32) {
        self.scale = (self.scale + step).clamp(SCALE_MIN, SCALE_MAX);
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Eye position on the unit sphere around the origin.
    pub fn eye_position(&self) -> Vec3 {
        let az = self.azimuth.to_radians();
        let el = self.elevation.to_radians();
        Vec3::new(az.sin() * el.cos(), el.sin(), az.cos() * el.cos())
    }

    /// World -> view transform: look-at toward the origin, post-multiplied by
    /// the uniform zoom scale. Pure in (azimuth, elevation, scale).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), Vec3::ZERO, Vec3::Y)
            * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}
