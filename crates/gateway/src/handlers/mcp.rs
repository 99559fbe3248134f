//! Tool-call endpoint handlers
//!
//! A minimal RPC facade for agent callers: `GET /mcp` serves the tool
//! manifest, `POST /mcp` dispatches a named tool against the store. Tool
//! failures ride a 200 response with `isError` set; only a missing tool
//! name is an HTTP-level error.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tools::{self, ToolResult};
use crate::AppState;
use paperblog_common::{
    errors::{AppError, Result},
    metrics,
};

/// Manifest served from `GET /mcp`
#[derive(Serialize)]
pub struct Manifest {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub tools: Vec<ToolDescriptor>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Body of a tool invocation
#[derive(Debug, Deserialize)]
pub struct CallToolRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub arguments: Value,
}

/// `GET /mcp` - the advertised tool catalog
pub async fn manifest() -> Json<Manifest> {
    Json(Manifest {
        name: "paperblog",
        version: paperblog_common::VERSION,
        description: "Query the daily AI paper batches",
        tools: tools::CATALOG
            .iter()
            .map(|t| ToolDescriptor {
                name: t.name,
                description: t.description,
                input_schema: (t.input_schema)(),
            })
            .collect(),
    })
}

/// `POST /mcp` - dispatch one tool invocation
pub async fn call_tool(
    State(state): State<AppState>,
    Json(request): Json<CallToolRequest>,
) -> Result<Json<ToolResult>> {
    let name = match request.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(AppError::MissingField {
                field: "name".to_string(),
            })
        }
    };

    let Some(tool) = tools::find(name) else {
        return Ok(Json(ToolResult::error(format!("Unknown tool: {name}"))));
    };

    // Tools with no arguments may omit the field entirely
    let arguments = match request.arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };

    let result = tool.execute(&state.store, arguments);
    let is_error = result.is_error.unwrap_or(false);

    metrics::record_tool_call(tool.name, is_error);
    tracing::info!(tool = tool.name, is_error, "Tool call completed");

    Ok(Json(result))
}
