//! GPU resource management: device/surface context and depth textures.

pub mod render_context;
pub mod texture;

pub use render_context::{RenderContext, RenderContextError};
