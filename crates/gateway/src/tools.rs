//! Tool catalog for the tool-call endpoint
//!
//! One static table drives both the advertised manifest and dispatch, so
//! the two cannot drift: each entry couples a descriptor (name,
//! description, input schema) with its handler function.

use paperblog_common::errors::Result;
use paperblog_common::store::PaperStore;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Default page size for `get_latest_papers` and `search_papers`
const DEFAULT_LIMIT: usize = 10;

/// One entry of the tool catalog
pub struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: fn() -> Value,
    handler: fn(&PaperStore, Value) -> Result<ToolResult>,
}

impl ToolDef {
    /// Execute this tool, folding any execution error into an
    /// `isError` result so one bad invocation cannot take down the
    /// endpoint.
    pub fn execute(&self, store: &PaperStore, arguments: Value) -> ToolResult {
        match (self.handler)(store, arguments) {
            Ok(result) => result,
            Err(e) => ToolResult::error(e.to_string()),
        }
    }
}

/// Result payload in the tool-call wire format
#[derive(Debug, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ContentItem>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContentItem {
    /// Always `"text"`
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl ToolResult {
    /// A successful result carrying a JSON-encoded value
    fn data(value: &impl Serialize) -> Result<Self> {
        Ok(Self::message(serde_json::to_string(value)?))
    }

    /// A successful result carrying a human-readable message
    fn message(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem {
                kind: "text".to_string(),
                text: text.into(),
            }],
            is_error: None,
        }
    }

    /// A failed result; rides a 200 response with `isError` set
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem {
                kind: "text".to_string(),
                text: text.into(),
            }],
            is_error: Some(true),
        }
    }
}

/// The fixed tool catalog
pub static CATALOG: &[ToolDef] = &[
    ToolDef {
        name: "get_latest_papers",
        description: "Get the most recent daily batch of AI papers",
        input_schema: limit_schema,
        handler: get_latest_papers,
    },
    ToolDef {
        name: "get_papers_by_date",
        description: "Get the batch of papers published on a given date",
        input_schema: date_schema,
        handler: get_papers_by_date,
    },
    ToolDef {
        name: "get_paper_by_id",
        description: "Look up a single paper by its identifier",
        input_schema: id_schema,
        handler: get_paper_by_id,
    },
    ToolDef {
        name: "search_papers",
        description: "Search papers by title, abstract, summary, author, or tag",
        input_schema: search_schema,
        handler: search_papers,
    },
    ToolDef {
        name: "list_dates",
        description: "List all dates that have a batch of papers, most recent first",
        input_schema: empty_schema,
        handler: list_dates,
    },
];

/// Look up a tool by name
pub fn find(name: &str) -> Option<&'static ToolDef> {
    CATALOG.iter().find(|t| t.name == name)
}

// ============================================================================
// Input Schemas
// ============================================================================

fn limit_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "limit": {
                "type": "number",
                "description": "Maximum number of papers to return (default 10)"
            }
        }
    })
}

fn date_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "date": {
                "type": "string",
                "description": "Date in YYYY-MM-DD format"
            },
            "limit": {
                "type": "number",
                "description": "Maximum number of papers to return (default: all)"
            }
        },
        "required": ["date"]
    })
}

fn id_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": {
                "type": "string",
                "description": "Paper identifier, e.g. an arXiv accession number"
            }
        },
        "required": ["id"]
    })
}

fn search_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": "Case-insensitive substring to match"
            },
            "limit": {
                "type": "number",
                "description": "Maximum number of papers to return (default 10)"
            }
        },
        "required": ["query"]
    })
}

fn empty_schema() -> Value {
    json!({
        "type": "object",
        "properties": {}
    })
}

// ============================================================================
// Handlers
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct LimitArgs {
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct DateArgs {
    date: String,
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct IdArgs {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
    limit: Option<usize>,
}

fn get_latest_papers(store: &PaperStore, arguments: Value) -> Result<ToolResult> {
    let args: LimitArgs = serde_json::from_value(arguments)?;

    match store.get_latest()? {
        Some(mut daily) => {
            daily.papers.truncate(args.limit.unwrap_or(DEFAULT_LIMIT));
            ToolResult::data(&daily)
        }
        None => Ok(ToolResult::message("No papers available yet.")),
    }
}

fn get_papers_by_date(store: &PaperStore, arguments: Value) -> Result<ToolResult> {
    let args: DateArgs = serde_json::from_value(arguments)?;

    match store.get_for_date(&args.date)? {
        Some(mut daily) => {
            if let Some(limit) = args.limit {
                daily.papers.truncate(limit);
            }
            ToolResult::data(&daily)
        }
        None => Ok(ToolResult::error(format!(
            "No papers found for date: {}",
            args.date
        ))),
    }
}

fn get_paper_by_id(store: &PaperStore, arguments: Value) -> Result<ToolResult> {
    let args: IdArgs = serde_json::from_value(arguments)?;

    match store.get_by_id(&args.id)? {
        Some(paper) => ToolResult::data(&paper),
        None => Ok(ToolResult::error(format!("Paper not found: {}", args.id))),
    }
}

fn search_papers(store: &PaperStore, arguments: Value) -> Result<ToolResult> {
    let args: SearchArgs = serde_json::from_value(arguments)?;

    let mut papers = store.search(&args.query)?;
    papers.truncate(args.limit.unwrap_or(DEFAULT_LIMIT));

    ToolResult::data(&json!({
        "query": args.query,
        "total": papers.len(),
        "papers": papers,
    }))
}

fn list_dates(store: &PaperStore, _arguments: Value) -> Result<ToolResult> {
    ToolResult::data(&json!({ "dates": store.list_dates()? }))
}
