//! Add Box UseCase
//!
//! - controller.rs: wizard logic over the [`BoxFormView`] handle
//! - view_model.rs: signals backing the form, implements [`BoxFormView`]
//! - view.rs: Leptos component (pure UI)

mod controller;
mod view;
mod view_model;

pub use controller::{Advance, BoxEntryController, BoxFormView, WizardState};
pub use view::AddBoxForm;
pub use view_model::AddBoxViewModel;
