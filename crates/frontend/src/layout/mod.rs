pub mod global_context;
pub mod shell;
pub mod sidebar;

pub use shell::Shell;
