//! Content store models
//!
//! Wire types for the per-date paper documents. JSON keys are camelCase,
//! matching the documents written by the daily fetcher; optional fields
//! serialize as explicit `null` so documents round-trip byte-stable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One published research item
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Stable unique identifier, an arXiv-style accession number
    pub id: String,

    pub title: String,

    /// Display order
    pub authors: Vec<String>,

    #[serde(rename = "abstract")]
    pub abstract_text: String,

    /// May be empty; consumers fall back to the abstract
    pub summary: String,

    pub url: String,

    pub pdf_url: Option<String>,

    pub thumbnail_url: Option<String>,

    /// External popularity signal, never recomputed here
    pub upvotes: u32,

    pub published_at: DateTime<Utc>,

    pub fetched_at: DateTime<Utc>,

    pub tags: Vec<String>,

    pub arxiv_id: Option<String>,
}

/// One date's batch of papers
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPapers {
    /// `YYYY-MM-DD`; the document filename is the authoritative key
    pub date: String,

    /// Storage order defines the default display order
    pub papers: Vec<Paper>,

    pub generated_at: DateTime<Utc>,
}
