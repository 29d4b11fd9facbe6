//! Render pipelines for scene geometry.

pub mod mesh;

pub use mesh::MeshRenderer;
