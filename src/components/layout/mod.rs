//! Application shell: sidebar, header and the page layout wrapper.

mod header;
mod main_layout;
mod sidebar;

pub use main_layout::MainLayout;
