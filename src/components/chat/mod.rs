//! Assistant chat panel.

mod interface;

pub use interface::ChatInterface;
