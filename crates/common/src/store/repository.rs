//! Repository for the content store
//!
//! The only component that knows the storage layout: one `<date>.json`
//! document per day in a flat content directory. Every read re-derives
//! its answer from storage; the store holds no cross-call state.

use crate::errors::{AppError, Result};
use crate::store::models::{DailyPapers, Paper};
use regex_lite::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Data access to the per-date paper documents
#[derive(Clone, Debug)]
pub struct PaperStore {
    dir: PathBuf,
    date_file: Regex,
}

impl PaperStore {
    /// Create a store rooted at the given content directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            date_file: Regex::new(r"^(\d{4}-\d{2}-\d{2})\.json$").expect("date file pattern"),
        }
    }

    /// Directory backing this store
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn document_path(&self, date: &str) -> PathBuf {
        self.dir.join(format!("{date}.json"))
    }

    // ========================================================================
    // Date Enumeration
    // ========================================================================

    /// List available dates, most recent first.
    ///
    /// Entries not named `<YYYY-MM-DD>.json` are silently ignored. A missing
    /// content directory is created empty rather than reported as an error,
    /// so the store works before any batch has been produced.
    pub fn list_dates(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
            return Ok(Vec::new());
        }

        let mut dates = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(caps) = self.date_file.captures(name) {
                dates.push(caps[1].to_string());
            }
        }

        // Lexicographic order equals chronological order for YYYY-MM-DD
        dates.sort_by(|a, b| b.cmp(a));
        Ok(dates)
    }

    // ========================================================================
    // Document Reads
    // ========================================================================

    /// Load the document for one date.
    ///
    /// Returns `None` when no document exists. A present-but-malformed
    /// document is a parse error, never silently treated as absent.
    pub fn get_for_date(&self, date: &str) -> Result<Option<DailyPapers>> {
        let path = self.document_path(date);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)?;
        let daily = serde_json::from_str(&raw)?;
        Ok(Some(daily))
    }

    /// Load the most recent document, if any batch exists at all
    pub fn get_latest(&self) -> Result<Option<DailyPapers>> {
        match self.list_dates()?.first() {
            Some(date) => self.get_for_date(date),
            None => Ok(None),
        }
    }

    // ========================================================================
    // Aggregate Queries
    // ========================================================================

    /// All papers across every date, grouped by date descending with
    /// intra-date storage order preserved.
    ///
    /// A date whose document vanished between listing and reading is
    /// skipped; a malformed document still fails the whole call.
    pub fn get_all(&self) -> Result<Vec<Paper>> {
        let mut papers = Vec::new();
        for date in self.list_dates()? {
            if let Some(daily) = self.get_for_date(&date)? {
                papers.extend(daily.papers);
            }
        }
        Ok(papers)
    }

    /// First paper whose id matches, in `get_all` order.
    ///
    /// Ids are assumed unique across the store but never validated; a
    /// duplicate therefore resolves to its most recent occurrence.
    pub fn get_by_id(&self, id: &str) -> Result<Option<Paper>> {
        Ok(self.get_all()?.into_iter().find(|p| p.id == id))
    }

    /// Case-insensitive substring search over title, abstract, summary,
    /// authors, and tags. Results keep `get_all` order; there is no
    /// relevance ranking. An empty query matches every paper.
    pub fn search(&self, query: &str) -> Result<Vec<Paper>> {
        let needle = query.to_lowercase();
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|p| paper_matches(p, &needle))
            .collect())
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Persist a batch as the document keyed by its own `date` field,
    /// fully replacing any prior document for that date.
    ///
    /// The date must be a plain `YYYY-MM-DD` key since it becomes the
    /// filename. Output is 2-space-indented JSON.
    pub fn save(&self, daily: &DailyPapers) -> Result<()> {
        if !self.date_file.is_match(&format!("{}.json", daily.date)) {
            return Err(AppError::InvalidFormat {
                message: format!("invalid date key: {:?}", daily.date),
            });
        }

        fs::create_dir_all(&self.dir)?;
        let raw = serde_json::to_string_pretty(daily)?;
        fs::write(self.document_path(&daily.date), raw)?;
        Ok(())
    }
}

fn paper_matches(paper: &Paper, needle: &str) -> bool {
    paper.title.to_lowercase().contains(needle)
        || paper.abstract_text.to_lowercase().contains(needle)
        || paper.summary.to_lowercase().contains(needle)
        || paper.authors.iter().any(|a| a.to_lowercase().contains(needle))
        || paper.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn paper(id: &str, title: &str) -> Paper {
        Paper {
            id: id.to_string(),
            title: title.to_string(),
            authors: vec!["Ada Lovelace".to_string()],
            abstract_text: "We study scaling laws for transformers.".to_string(),
            summary: String::new(),
            url: format!("https://huggingface.co/papers/{id}"),
            pdf_url: Some(format!("https://arxiv.org/pdf/{id}")),
            thumbnail_url: None,
            upvotes: 3,
            published_at: Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap(),
            fetched_at: Utc.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap(),
            tags: vec!["Machine Learning".to_string()],
            arxiv_id: Some(id.to_string()),
        }
    }

    fn daily(date: &str, papers: Vec<Paper>) -> DailyPapers {
        DailyPapers {
            date: date.to_string(),
            papers,
            generated_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn list_dates_descending_and_ignores_noise() {
        let dir = tempdir().unwrap();
        let store = PaperStore::new(dir.path());

        store.save(&daily("2025-02-01", vec![])).unwrap();
        store.save(&daily("2025-03-01", vec![])).unwrap();
        store.save(&daily("2024-12-31", vec![])).unwrap();
        std::fs::write(dir.path().join("README.md"), "not a document").unwrap();
        std::fs::write(dir.path().join("2025-03.json"), "{}").unwrap();

        let dates = store.list_dates().unwrap();
        assert_eq!(dates, vec!["2025-03-01", "2025-02-01", "2024-12-31"]);
    }

    #[test]
    fn list_dates_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("content").join("papers");
        let store = PaperStore::new(&root);

        assert!(store.list_dates().unwrap().is_empty());
        assert!(root.is_dir());
    }

    #[test]
    fn get_for_date_absent_is_none() {
        let dir = tempdir().unwrap();
        let store = PaperStore::new(dir.path());

        assert_eq!(store.get_for_date("2025-01-01").unwrap(), None);
    }

    #[test]
    fn malformed_document_is_an_error_not_absence() {
        let dir = tempdir().unwrap();
        let store = PaperStore::new(dir.path());

        std::fs::write(dir.path().join("2025-01-01.json"), "{ not json").unwrap();

        assert!(matches!(
            store.get_for_date("2025-01-01"),
            Err(AppError::MalformedDocument(_))
        ));
    }

    #[test]
    fn get_latest_is_none_on_empty_store() {
        let dir = tempdir().unwrap();
        let store = PaperStore::new(dir.path());

        assert_eq!(store.get_latest().unwrap(), None);
    }

    #[test]
    fn get_all_concatenates_in_descending_date_order() {
        let dir = tempdir().unwrap();
        let store = PaperStore::new(dir.path());

        store
            .save(&daily(
                "2025-02-01",
                vec![paper("2502.00001", "First"), paper("2502.00002", "Second")],
            ))
            .unwrap();
        store
            .save(&daily("2025-03-01", vec![paper("2503.00001", "Third")]))
            .unwrap();

        let all = store.get_all().unwrap();
        let ids: Vec<_> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2503.00001", "2502.00001", "2502.00002"]);
    }

    #[test]
    fn get_by_id_takes_first_match_across_dates() {
        let dir = tempdir().unwrap();
        let store = PaperStore::new(dir.path());

        store
            .save(&daily("2025-02-01", vec![paper("2502.00001", "Older copy")]))
            .unwrap();
        store
            .save(&daily("2025-03-01", vec![paper("2502.00001", "Newer copy")]))
            .unwrap();

        let found = store.get_by_id("2502.00001").unwrap().unwrap();
        assert_eq!(found.title, "Newer copy");
        assert_eq!(store.get_by_id("9999.99999").unwrap(), None);
    }

    #[test]
    fn search_is_case_insensitive_across_all_fields() {
        let dir = tempdir().unwrap();
        let store = PaperStore::new(dir.path());

        let mut by_summary = paper("2502.00002", "Untitled");
        by_summary.summary = "A diffusion approach to audio.".to_string();
        by_summary.abstract_text = String::new();
        let mut by_tag = paper("2502.00003", "Another");
        by_tag.tags = vec!["NLP".to_string()];

        store
            .save(&daily(
                "2025-02-01",
                vec![paper("2502.00001", "Scaling Transformers"), by_summary, by_tag],
            ))
            .unwrap();

        assert_eq!(store.search("sCaLiNg").unwrap()[0].id, "2502.00001");
        assert_eq!(store.search("transformers").unwrap().len(), 2); // title + abstract
        assert_eq!(store.search("DIFFUSION").unwrap()[0].id, "2502.00002");
        assert_eq!(store.search("lovelace").unwrap().len(), 3); // author on every fixture
        assert_eq!(store.search("nlp").unwrap()[0].id, "2502.00003");
    }

    #[test]
    fn search_empty_query_matches_everything() {
        let dir = tempdir().unwrap();
        let store = PaperStore::new(dir.path());

        store
            .save(&daily(
                "2025-02-01",
                vec![paper("2502.00001", "A"), paper("2502.00002", "B")],
            ))
            .unwrap();

        assert_eq!(store.search("").unwrap().len(), 2);
        assert!(store.search("zzz-no-such-token").unwrap().is_empty());
    }

    #[test]
    fn save_then_read_roundtrips() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested");
        let store = PaperStore::new(&root);

        let batch = daily("2025-03-01", vec![paper("2503.00001", "Saved")]);
        store.save(&batch).unwrap();

        assert_eq!(store.get_for_date("2025-03-01").unwrap(), Some(batch));
    }

    #[test]
    fn save_overwrites_prior_document() {
        let dir = tempdir().unwrap();
        let store = PaperStore::new(dir.path());

        store
            .save(&daily("2025-03-01", vec![paper("2503.00001", "v1")]))
            .unwrap();
        store
            .save(&daily("2025-03-01", vec![paper("2503.00002", "v2")]))
            .unwrap();

        let read = store.get_for_date("2025-03-01").unwrap().unwrap();
        assert_eq!(read.papers.len(), 1);
        assert_eq!(read.papers[0].id, "2503.00002");
    }

    #[test]
    fn save_rejects_non_date_key() {
        let dir = tempdir().unwrap();
        let store = PaperStore::new(dir.path());

        let err = store.save(&daily("../escape", vec![])).unwrap_err();
        assert!(matches!(err, AppError::InvalidFormat { .. }));
    }

    #[test]
    fn save_writes_indented_json() {
        let dir = tempdir().unwrap();
        let store = PaperStore::new(dir.path());

        store
            .save(&daily("2025-03-01", vec![paper("2503.00001", "Pretty")]))
            .unwrap();

        let raw = std::fs::read_to_string(dir.path().join("2025-03-01.json")).unwrap();
        assert!(raw.starts_with("{\n  \"date\": \"2025-03-01\""));
    }
}
