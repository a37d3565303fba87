//! Rendering description for the host graphics backend
//!
//! The game builds a [`Frame`] of draw commands each tick and tessellates it
//! into screen-space triangles. Presenting them is the host's job.

pub mod draw;
pub mod shapes;
pub mod vertex;

pub use draw::{Camera2D, DrawCommand, Frame, build_frame};
pub use shapes::{Label, Mesh, tessellate};
pub use vertex::{Vertex, colors};
