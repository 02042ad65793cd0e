/// Ortho Core Library - wireframe model, projection and command grammar
///
/// This library holds the I/O-free parts of the viewer: the cuboid model,
/// integer line interpolation, axis-aligned orthographic projection, the
/// mutable view state and the parser for interactive commands.

pub mod command;
pub mod error;
pub mod geometry;
pub mod line;
pub mod projection;
pub mod state;

// Re-export commonly used types
pub use command::{parse_command, parse_integer, Command};
pub use error::ParseAxisError;
pub use geometry::{Edge, Model, Vertex};
pub use line::{interpolate, GridPoint};
pub use projection::{floor_div, project, Scale, ViewAxis};
pub use state::ViewState;
