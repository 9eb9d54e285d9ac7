//! Render passes: lit solid geometry, dashed lines, rain streaks, and
//! snapshot capture.

pub mod flow;
pub mod lighting;
pub mod mesh;
pub mod rain;
pub mod snapshot;

pub use flow::FlowRenderer;
pub use lighting::{Lighting, LightingUniform};
pub use mesh::MeshRenderer;
pub use rain::RainRenderer;
