//! Command implementations behind the CLI surface

pub mod analyze;
pub mod serve;

pub use analyze::analyze_submission;
pub use serve::serve_api;
