//! Dependency graph engine: circular layout, draw-command generation, and a
//! canvas adapter that paints the commands.

mod canvas;
mod component;
mod draw;
mod layout;
mod types;

pub use component::DependencyGraphCanvas;
pub use types::{GraphData, GraphEdge, GraphNode};
