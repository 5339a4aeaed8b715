//! One module per route.

pub mod chat;
pub mod dependencies;
pub mod home;
pub mod milestones;
pub mod not_found;
pub mod risks_issues;
pub mod workstreams;
