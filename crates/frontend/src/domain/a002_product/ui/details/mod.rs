//! Product add/edit form
//!
//! - model.rs: draft type, image handling and save request
//! - view_model.rs: form state and commands
//! - view.rs: Leptos components

mod model;
mod view;
mod view_model;

pub use view::{ProductCreatePage, ProductDetails, ProductEditPage};
pub use view_model::ProductDetailsViewModel;
