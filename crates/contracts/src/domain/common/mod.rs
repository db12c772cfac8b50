//! Common types shared by all catalog domains

pub mod reference;

// Re-exports
pub use reference::CatalogKind;
pub use reference::ReferenceEntity;
