//! Wire contracts shared between the data-entry forms and the backend.

pub mod usecases;
