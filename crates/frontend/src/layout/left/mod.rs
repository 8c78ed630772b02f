pub mod footer;
pub mod links;
pub mod session_actions;
pub mod sidebar;
pub mod toggle;

pub use sidebar::Sidebar;
