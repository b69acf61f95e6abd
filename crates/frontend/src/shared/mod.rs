pub mod api_utils;
pub mod config;
pub mod error;
pub mod forms_api;
pub mod navigation;
pub mod prompt;

#[cfg(test)]
pub mod test_support;
