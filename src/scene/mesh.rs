//! Mesh vertex type and cone generation.

use std::f32::consts::TAU;

use glam::Vec3;

/// Vertex layout shared by all mesh pipelines: position, normal, color.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Flat-shaded face normal.
    pub normal: [f32; 3],
    /// Linear RGB color.
    pub color: [f32; 3],
}

impl MeshVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x3,
    ];

    /// Vertex buffer layout for render pipelines.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Generated mesh data: a flat-shaded triangle list.
pub struct MeshData {
    /// Triangle vertices, duplicated per face for flat shading.
    pub vertices: Vec<MeshVertex>,
    /// Triangle-list indices into `vertices`.
    pub indices: Vec<u32>,
    /// Radius of the bounding sphere around the origin.
    pub bounding_radius: f32,
}

/// Generate a cone centered at the origin with its axis along +X: the
/// apex sits at `(height/2, 0, 0)` and the base disc of `radius` at
/// `(-height/2, 0, 0)`. `resolution` is the number of facets around
/// the base circle (minimum 3).
///
/// Faces are flat-shaded: vertices are duplicated per triangle with
/// the face normal.
#[must_use]
pub fn cone_mesh(
    resolution: u32,
    radius: f32,
    height: f32,
    color: [f32; 3],
) -> MeshData {
    let resolution = resolution.max(3);
    let apex = Vec3::new(height / 2.0, 0.0, 0.0);
    let base_x = -height / 2.0;
    let base_center = Vec3::new(base_x, 0.0, 0.0);

    let ring: Vec<Vec3> = (0..resolution)
        .map(|i| {
            let theta = TAU * i as f32 / resolution as f32;
            Vec3::new(base_x, radius * theta.cos(), radius * theta.sin())
        })
        .collect();

    let mut vertices = Vec::with_capacity(resolution as usize * 6);
    let mut push_face = |a: Vec3, b: Vec3, c: Vec3| {
        let normal = (b - a).cross(c - a).normalize().to_array();
        for p in [a, b, c] {
            vertices.push(MeshVertex {
                position: p.to_array(),
                normal,
                color,
            });
        }
    };

    for i in 0..resolution as usize {
        let p0 = ring[i];
        let p1 = ring[(i + 1) % resolution as usize];
        // Side facet and matching base-cap wedge.
        push_face(apex, p0, p1);
        push_face(base_center, p1, p0);
    }

    let indices = (0..vertices.len() as u32).collect();
    let bounding_radius = ((height / 2.0).powi(2) + radius.powi(2)).sqrt();

    MeshData {
        vertices,
        indices,
        bounding_radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cone_has_two_triangles_per_facet() {
        let mesh = cone_mesh(40, 1.5, 3.0, [1.0, 0.894, 0.769]);
        assert_eq!(mesh.vertices.len(), 40 * 2 * 3);
        assert_eq!(mesh.indices.len(), mesh.vertices.len());
    }

    #[test]
    fn cone_resolution_floor_is_three() {
        let mesh = cone_mesh(1, 1.0, 3.0, [1.0, 1.0, 1.0]);
        assert_eq!(mesh.vertices.len(), 3 * 2 * 3);
    }

    #[test]
    fn cone_fits_its_bounding_radius() {
        let mesh = cone_mesh(16, 1.0, 3.0, [1.0, 0.0, 0.0]);
        let limit = mesh.bounding_radius + 1e-5;
        for v in &mesh.vertices {
            assert!(Vec3::from_array(v.position).length() <= limit);
        }
    }

    #[test]
    fn cone_normals_are_unit_length() {
        let mesh = cone_mesh(12, 1.0, 3.0, [1.0, 1.0, 1.0]);
        for v in &mesh.vertices {
            let n = Vec3::from_array(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn base_cap_normals_point_down_the_axis() {
        let mesh = cone_mesh(8, 1.0, 3.0, [1.0, 1.0, 1.0]);
        // Base-cap wedges are every second face; their normal is -X.
        for face in mesh.vertices.chunks(3).skip(1).step_by(2) {
            let n = Vec3::from_array(face[0].normal);
            assert!((n - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
        }
    }
}
