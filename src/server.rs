//! JSON-RPC 2.0 server over stdio, newline-delimited.
//!
//! Reads requests from stdin (one per line), dispatches operation calls to
//! the [`OpRouter`], and writes responses to stdout.
//!
//! Protocol flow:
//! 1. Client sends `initialize` → server responds with capabilities
//! 2. Client sends `notifications/initialized`
//! 3. Client sends `ops/list` → server returns operation definitions
//! 4. Client sends `ops/call` → server runs the operation and returns its result
//! 5. Client closes stdin → server exits

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::ops::OpRouter;

/// Maximum size of a single JSON-RPC line (10 MiB).
const MAX_LINE_BYTES: usize = 10 * 1024 * 1024;

const PROTOCOL_VERSION: &str = "2025-06-18";

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 types
// ---------------------------------------------------------------------------

/// JSON-RPC 2.0 request.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// JSON-RPC 2.0 response.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Operation protocol types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ServerInfo {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct ServerCapabilities {
    ops: OpsCapability,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OpsCapability {
    list_changed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InitializeResult {
    protocol_version: String,
    capabilities: ServerCapabilities,
    server_info: ServerInfo,
}

/// Operation definition returned by `ops/list`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct OpsListResult {
    ops: Vec<OpDefinition>,
}

/// `ops/call` params.
#[derive(Debug, Deserialize)]
struct OpCallParams {
    name: String,
    #[serde(default)]
    arguments: serde_json::Value,
}

/// Failure payload inside an `ops/call` result.
#[derive(Debug, Serialize)]
pub struct OpErrorInfo {
    /// Machine-readable kind, e.g. `trivialMatrix`.
    pub kind: String,
    pub message: String,
}

/// `ops/call` result: exactly one of `value` / `error` is set.
#[derive(Debug, Serialize)]
pub struct OpCallResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<OpErrorInfo>,
}

impl OpCallResult {
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

// ---------------------------------------------------------------------------
// Server configuration
// ---------------------------------------------------------------------------

/// Configuration for the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Maximum byte length of each string operand.
    pub max_input_bytes: usize,
    /// Maximum `(|s|+1) * (|t|+1)` cells a `matrix` call may allocate.
    pub max_matrix_cells: usize,
    /// Largest `limit` accepted by the `primes` operation.
    pub max_sieve_limit: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 10_000,
            max_matrix_cells: 1_000_000,
            max_sieve_limit: 10_000_000,
        }
    }
}

// ---------------------------------------------------------------------------
// Server main loop
// ---------------------------------------------------------------------------

/// Run the server on stdin/stdout.
///
/// Exits when stdin is closed.
///
/// # Errors
///
/// Returns an error if stdin/stdout I/O fails fatally.
pub fn run_server(config: &ServerConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let mut reader = std::io::BufReader::new(stdin.lock());
    let mut stdout = std::io::stdout().lock();
    serve(config, &mut reader, &mut stdout)
}

/// Serve requests from `reader`, writing responses to `out`, until EOF.
pub fn serve(config: &ServerConfig, reader: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    info!(
        max_input_bytes = config.max_input_bytes,
        max_matrix_cells = config.max_matrix_cells,
        max_sieve_limit = config.max_sieve_limit,
        "edutil server starting"
    );

    let router = OpRouter::new(config.clone());
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        match read_line_limited(reader, &mut line_buf, MAX_LINE_BYTES)
            .context("failed to read from stdin")?
        {
            LineRead::Eof => {
                // Client closed stdin, clean exit.
                info!("stdin closed, shutting down");
                break;
            }
            LineRead::Oversized => {
                warn!(max = MAX_LINE_BYTES, "dropping oversized request line");
                let resp = error_response(
                    None,
                    -32700,
                    &format!("parse error: line exceeds maximum size ({MAX_LINE_BYTES} bytes)"),
                );
                write_response(out, &resp)?;
                continue;
            }
            LineRead::Line => {}
        }

        let Ok(line) = std::str::from_utf8(&line_buf) else {
            warn!("non-UTF-8 request line");
            let resp = error_response(None, -32700, "parse error: non-UTF-8 data");
            write_response(out, &resp)?;
            continue;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        debug!(raw = trimmed, "received request");

        let request: JsonRpcRequest = match serde_json::from_str(trimmed) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "invalid JSON-RPC request");
                let resp = error_response(None, -32700, &format!("parse error: {e}"));
                write_response(out, &resp)?;
                continue;
            }
        };

        if request.jsonrpc != "2.0" {
            warn!(
                version = request.jsonrpc,
                "invalid JSON-RPC version (expected \"2.0\")"
            );
            let resp = error_response(
                request.id.clone(),
                -32600,
                &format!(
                    "invalid request: jsonrpc version must be \"2.0\", got \"{}\"",
                    request.jsonrpc
                ),
            );
            write_response(out, &resp)?;
            continue;
        }

        // Notifications (no id) never receive a response.
        let is_notification = request.id.is_none();
        let response = dispatch(&router, &request);

        if is_notification {
            debug!(method = request.method, "notification handled (no response)");
            continue;
        }

        if let Some(resp) = response {
            write_response(out, &resp)?;
        }
    }

    info!("edutil server stopped");
    Ok(())
}

/// Dispatch a JSON-RPC request to the appropriate handler.
pub fn dispatch(router: &OpRouter, req: &JsonRpcRequest) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => Some(handle_initialize(req)),
        "notifications/initialized" => {
            info!("client initialized");
            None
        }
        "ops/list" => Some(handle_ops_list(router, req)),
        "ops/call" => Some(handle_ops_call(router, req)),
        "ping" => Some(handle_ping(req)),
        _ => {
            warn!(method = req.method, "unknown method");
            Some(error_response(
                req.id.clone(),
                -32601,
                &format!("method not found: {}", req.method),
            ))
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn handle_initialize(req: &JsonRpcRequest) -> JsonRpcResponse {
    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_owned(),
        capabilities: ServerCapabilities {
            ops: OpsCapability {
                list_changed: false,
            },
        },
        server_info: ServerInfo {
            name: "edutil".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        },
    };

    success_response(req.id.clone(), &result)
}

fn handle_ops_list(router: &OpRouter, req: &JsonRpcRequest) -> JsonRpcResponse {
    let result = OpsListResult {
        ops: router.list_ops(),
    };
    success_response(req.id.clone(), &result)
}

fn handle_ops_call(router: &OpRouter, req: &JsonRpcRequest) -> JsonRpcResponse {
    let params: OpCallParams = match serde_json::from_value(req.params.clone()) {
        Ok(p) => p,
        Err(e) => {
            return error_response(
                req.id.clone(),
                -32602,
                &format!("invalid ops/call params: {e}"),
            );
        }
    };

    let result = router.call_op(&params.name, params.arguments);
    success_response(req.id.clone(), &result)
}

fn handle_ping(req: &JsonRpcRequest) -> JsonRpcResponse {
    success_response(req.id.clone(), &serde_json::json!({}))
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn success_response(id: Option<serde_json::Value>, result: &impl Serialize) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(v) => JsonRpcResponse {
            jsonrpc: "2.0".to_owned(),
            id,
            result: Some(v),
            error: None,
        },
        Err(e) => {
            error!(error = %e, "failed to serialize success response");
            error_response(
                id,
                -32603,
                &format!("internal error: failed to serialize result: {e}"),
            )
        }
    }
}

fn error_response(id: Option<serde_json::Value>, code: i64, message: &str) -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0".to_owned(),
        id,
        result: None,
        error: Some(JsonRpcError {
            code,
            message: message.to_owned(),
            data: None,
        }),
    }
}

/// Write a JSON-RPC response as a single line.
fn write_response(out: &mut impl Write, resp: &JsonRpcResponse) -> Result<()> {
    let json = serde_json::to_string(resp).context("failed to serialize response")?;
    debug!(response = json, "sending response");
    out.write_all(json.as_bytes())
        .context("failed to write to stdout")?;
    out.write_all(b"\n")
        .context("failed to write newline to stdout")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

/// Outcome of [`read_line_limited`].
#[derive(Debug, PartialEq, Eq)]
enum LineRead {
    Eof,
    Line,
    /// The line exceeded the limit and was discarded.
    Oversized,
}

/// Read a line of raw bytes from `reader` into `buf`, stopping at newline or
/// `max_bytes`. An oversized line is consumed through its newline and dropped.
fn read_line_limited(reader: &mut impl BufRead, buf: &mut Vec<u8>, max_bytes: usize) -> Result<LineRead> {
    loop {
        let available = reader.fill_buf().context("stdin fill_buf failed")?;
        if available.is_empty() {
            return Ok(if buf.is_empty() { LineRead::Eof } else { LineRead::Line });
        }
        let (consumed, found_newline) = match available.iter().position(|&b| b == b'\n') {
            Some(pos) => (pos + 1, true),
            None => (available.len(), false),
        };
        if buf.len() + consumed > max_bytes {
            reader.consume(consumed);
            if !found_newline {
                loop {
                    let rest = reader.fill_buf().context("stdin fill_buf failed")?;
                    if rest.is_empty() {
                        break;
                    }
                    if let Some(pos) = rest.iter().position(|&b| b == b'\n') {
                        reader.consume(pos + 1);
                        break;
                    }
                    let eat = rest.len();
                    reader.consume(eat);
                }
            }
            buf.clear();
            return Ok(LineRead::Oversized);
        }
        buf.extend_from_slice(&available[..consumed]);
        reader.consume(consumed);
        if found_newline {
            return Ok(LineRead::Line);
        }
    }
}
