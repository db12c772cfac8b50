//! Product Add UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (fetch reference data, create product)
//! - selection.rs: dependent category chain with stale-response discard
//! - draft.rs: mutable draft aggregate and its pure projection to a request
//! - submit.rs: validate-then-send submission pipeline
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod draft;
mod model;
mod selection;
mod submit;
mod view;
mod view_model;

pub use selection::ChainState;
pub use view::ProductAdd;
pub use view_model::ProductAddVm;
