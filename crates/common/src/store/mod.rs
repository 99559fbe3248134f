//! Content store for PaperBlog
//!
//! Provides:
//! - Wire models for papers and per-date documents
//! - Repository pattern for data access

pub mod models;
mod repository;

pub use models::{DailyPapers, Paper};
pub use repository::PaperStore;
