//! Time-based simulation: the frame scheduler and the rain field.

mod rain;
mod scheduler;

pub use rain::RainField;
pub use scheduler::{FrameScheduler, MAX_STEP};
