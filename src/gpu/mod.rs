//! GPU plumbing: device/surface ownership, growable buffers, and shared
//! pipeline boilerplate.

pub mod context;
pub mod dynamic_buffer;
pub mod pipeline;

pub use context::{RenderContext, RenderContextError};
pub use dynamic_buffer::DynamicBuffer;
pub use pipeline::{
    create_depth_texture, depth_stencil_state, uniform_entry, RenderTarget,
    DEPTH_FORMAT,
};
