//! Common types and traits for all UseCases

pub mod submit;
pub mod usecase_metadata;

// Re-exports
pub use submit::SubmitFormRequest;
pub use usecase_metadata::UseCaseMetadata;
