//! Category Setup UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (fetch, create, delete)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::CategorySetup;
pub use view_model::CategorySetupVm;
