//! Static scene content: mesh generation, the diorama layout, and the
//! water-flow polylines.

mod flow;
mod mesh;
mod parts;

pub use flow::FlowLine;
pub use mesh::{hex_color, lay_along_x, MeshBuffer, MeshVertex};
pub use parts::{
    grid_color, Diorama, PartGroup, PartInfo, CANOPY_HEIGHT, CANOPY_LENGTH,
    CANOPY_WIDTH,
};
