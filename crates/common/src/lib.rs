//! PaperBlog Common Library
//!
//! Shared code for the PaperBlog services including:
//! - Content store models and repository
//! - Error types and handling
//! - Configuration management
//! - Metrics and observability

pub mod config;
pub mod errors;
pub mod metrics;
pub mod store;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use store::{DailyPapers, Paper, PaperStore};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default content directory, relative to the working directory
pub const DEFAULT_CONTENT_DIR: &str = "content/papers";
