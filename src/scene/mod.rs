//! Demo scene geometry.

pub mod mesh;

pub use mesh::{cone_mesh, MeshData, MeshVertex};
