//! Floating AI analyst chat (MVVM)
//!
//! - model.rs: API call
//! - view_model.rs: ChatWidgetVm with RwSignals
//! - view.rs: ChatWidget component

mod model;
mod view;
mod view_model;

pub use view::ChatWidget;
pub use view_model::ChatWidgetVm;
