//! Add Can UseCase
//!
//! - controller.rs: grid collection and submission over [`CanGridView`]
//! - view_model.rs: signals backing the grid, implements [`CanGridView`]
//! - view.rs: Leptos component (pure UI)

mod controller;
mod view;
mod view_model;

pub use controller::{collect_grid, CanEntryController, CanGridView};
pub use view::AddCanForm;
pub use view_model::AddCanViewModel;
