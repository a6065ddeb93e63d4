//! Derived axes and the narrative lines built on them

pub mod axes;
pub mod lines;

pub use axes::{derive_axes, normalize, AxisInput, DerivedAxes};
pub use lines::{generate_narrative, Narrative, MAX_LINES};
