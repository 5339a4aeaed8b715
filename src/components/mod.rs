//! Reusable UI components.

pub mod chat;
pub mod dashboard;
pub mod dependency_graph;
pub mod layout;
