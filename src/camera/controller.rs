//! Interactive orbit camera controller.
//!
//! The camera orbits a focal point at a fixed distance, parameterized
//! by azimuth (rotation about world Y), elevation (tilt toward the
//! poles), and roll (rotation about the viewing axis). Mouse drag
//! adjusts azimuth/elevation, shift-drag pans the focal point, and the
//! scroll wheel dollies in and out.

use glam::{Quat, Vec2, Vec3};
use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform};
use crate::camera::readout::CameraReadout;
use crate::gpu::render_context::RenderContext;
use crate::options::CameraOptions;

/// Dolly distance limits.
const MIN_DISTANCE: f32 = 1.0;
const MAX_DISTANCE: f32 = 100.0;

/// Elevation clamp, in degrees. Keeps the orbit basis away from the
/// pole singularity where the view direction is parallel to world up.
/// The status readout itself stays unguarded.
const MAX_ELEVATION: f32 = 89.0;

/// Camera offset from the focal point for the given orbit angles.
///
/// Y-up spherical coordinates: azimuth rotates about world Y, elevation
/// tilts toward the poles. At azimuth 0 / elevation 0 the camera sits
/// on +Z looking down -Z.
#[must_use]
pub fn orbit_offset(
    azimuth_deg: f32,
    elevation_deg: f32,
    distance: f32,
) -> Vec3 {
    let az = azimuth_deg.to_radians();
    let el = elevation_deg.to_radians();
    Vec3::new(az.sin() * el.cos(), el.sin(), az.cos() * el.cos()) * distance
}

/// Orbit camera with a GPU uniform buffer and bind group.
pub struct CameraController {
    azimuth_deg: f32,
    elevation_deg: f32,
    roll_deg: f32,
    distance: f32,
    focal_point: Vec3,

    // Home pose for recentering.
    home_azimuth_deg: f32,
    home_elevation_deg: f32,
    home_distance: f32,

    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,

    /// The camera this controller drives.
    pub camera: Camera,
    /// CPU copy of the camera uniform.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout for the camera uniform (group 0).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group for the camera uniform.
    pub bind_group: wgpu::BindGroup,
}

impl CameraController {
    /// Create a controller at the initial pose from `options`, with the
    /// GPU uniform buffer and bind group ready for rendering.
    #[must_use]
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let focal_point = Vec3::ZERO;
        let azimuth_deg = options.initial_azimuth;
        let elevation_deg = options.initial_elevation.clamp(
            -MAX_ELEVATION,
            MAX_ELEVATION,
        );
        let distance = options
            .initial_distance
            .clamp(MIN_DISTANCE, MAX_DISTANCE);

        let camera = Camera {
            eye: focal_point
                + orbit_offset(azimuth_deg, elevation_deg, distance),
            target: focal_point,
            up: Vec3::Y,
            aspect: context.aspect(),
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Camera Bind Group"),
                });

        let mut controller = Self {
            azimuth_deg,
            elevation_deg,
            roll_deg: 0.0,
            distance,
            focal_point,
            home_azimuth_deg: azimuth_deg,
            home_elevation_deg: elevation_deg,
            home_distance: distance,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
        };
        controller.update_camera_pose();
        controller
    }

    /// Orthonormal view basis: (direction of projection, right, up
    /// before roll).
    fn view_basis(&self) -> (Vec3, Vec3, Vec3) {
        let offset = orbit_offset(
            self.azimuth_deg,
            self.elevation_deg,
            self.distance,
        );
        let dir = (-offset).normalize();
        let right = dir.cross(Vec3::Y).normalize();
        let up = right.cross(dir);
        (dir, right, up)
    }

    /// Recompute eye, target, and up from the orbit parameters.
    fn update_camera_pose(&mut self) {
        let (dir, _right, up) = self.view_basis();
        self.camera.eye = self.focal_point
            + orbit_offset(self.azimuth_deg, self.elevation_deg, self.distance);
        self.camera.target = self.focal_point;
        self.camera.up =
            Quat::from_axis_angle(dir, self.roll_deg.to_radians()) * up;
    }

    /// Rotate the camera about world Y through the focal point.
    pub fn azimuth(&mut self, delta_deg: f32) {
        self.azimuth_deg = (self.azimuth_deg + delta_deg) % 360.0;
        self.update_camera_pose();
    }

    /// Tilt the camera toward or away from the poles.
    pub fn elevation(&mut self, delta_deg: f32) {
        self.elevation_deg = (self.elevation_deg + delta_deg)
            .clamp(-MAX_ELEVATION, MAX_ELEVATION);
        self.update_camera_pose();
    }

    /// Rotate the camera about its own viewing axis.
    pub fn roll(&mut self, delta_deg: f32) {
        self.roll_deg = (self.roll_deg + delta_deg) % 360.0;
        self.update_camera_pose();
    }

    /// Orbit from a mouse drag delta in physical pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        self.azimuth(-delta.x * self.rotate_speed);
        self.elevation(delta.y * self.rotate_speed);
    }

    /// Pan the focal point in the view plane from a mouse drag delta.
    pub fn pan(&mut self, delta: Vec2) {
        let (_dir, right, up) = self.view_basis();
        let scale = self.distance * self.pan_speed;
        self.focal_point +=
            right * (-delta.x * scale) + up * (delta.y * scale);
        self.update_camera_pose();
    }

    /// Dolly toward (positive delta) or away from the focal point.
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance = self.distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.update_camera_pose();
    }

    /// Set the dolly distance so a bounding sphere of `radius` around
    /// the focal point fits comfortably in view.
    pub fn fit_to_radius(&mut self, radius: f32) {
        let fovy_rad = self.camera.fovy.to_radians();
        let fit_distance = radius / (fovy_rad / 2.0).tan();
        // 1.5x padding for a comfortable view
        self.distance =
            (fit_distance * 1.5).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.home_distance = self.distance;
        self.update_camera_pose();
    }

    /// Restore the home pose (initial angles and fitted distance),
    /// clearing roll and pan offsets.
    pub fn recenter(&mut self) {
        self.azimuth_deg = self.home_azimuth_deg;
        self.elevation_deg = self.home_elevation_deg;
        self.roll_deg = 0.0;
        self.distance = self.home_distance;
        self.focal_point = Vec3::ZERO;
        self.update_camera_pose();
    }

    /// Update the viewport aspect ratio after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Refresh the uniform from the camera and upload it to the GPU.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update_view_proj(&self.camera);
        queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );
    }

    /// Unit vector from the eye toward the focal point.
    #[must_use]
    pub fn direction_of_projection(&self) -> Vec3 {
        (self.camera.target - self.camera.eye).normalize()
    }

    /// Current roll angle in degrees.
    #[must_use]
    pub fn roll_deg(&self) -> f32 {
        self.roll_deg
    }

    /// Current camera-to-focal-point distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Snapshot the current orientation for the status line.
    #[must_use]
    pub fn readout(&self) -> CameraReadout {
        CameraReadout::from_view(
            self.direction_of_projection().as_dvec3(),
            f64::from(self.roll_deg),
            f64::from(self.distance),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_offset_at_rest_sits_on_plus_z() {
        let offset = orbit_offset(0.0, 0.0, 10.0);
        assert!((offset - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-6);
    }

    #[test]
    fn orbit_offset_preserves_distance() {
        for (az, el) in [(30.0, 30.0), (-120.0, 45.0), (200.0, -80.0)] {
            let offset = orbit_offset(az, el, 7.5);
            assert!((offset.length() - 7.5).abs() < 1e-4);
        }
    }

    #[test]
    fn thirty_thirty_offset_matches_readout_angles() {
        // The demo scene's startup pose: the derived direction of
        // projection reads back 30/30 through the status computation.
        let offset = orbit_offset(30.0, 30.0, 10.0);
        let dir = (-offset).normalize();
        let readout = CameraReadout::from_view(dir.as_dvec3(), 0.0, 10.0);
        assert!((readout.azimuth_deg - 30.0).abs() < 1e-4);
        assert!((readout.elevation_deg - 30.0).abs() < 1e-4);
    }
}
