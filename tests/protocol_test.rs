//! JSON-RPC protocol integration tests.
//!
//! Exercises the protocol types, the operation router, and the full serve
//! loop over in-memory pipes.

use serde_json::{Value, json};

use edutil::ops::OpRouter;
use edutil::server::{self, JsonRpcRequest, JsonRpcResponse, ServerConfig};

fn router() -> OpRouter {
    OpRouter::new(ServerConfig::default())
}

/// Feed `lines` to the serve loop and parse every response line.
fn run_session(lines: &[Value]) -> Vec<Value> {
    let input: String = lines.iter().map(|l| format!("{l}\n")).collect();
    let mut reader = std::io::Cursor::new(input.into_bytes());
    let mut output = Vec::new();
    server::serve(&ServerConfig::default(), &mut reader, &mut output).expect("serve");

    String::from_utf8(output)
        .expect("utf-8 output")
        .lines()
        .map(|l| serde_json::from_str(l).expect("response is JSON"))
        .collect()
}

#[test]
fn test_json_rpc_request_parsing() {
    let req: JsonRpcRequest = serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "ops/call",
        "params": { "name": "distance", "arguments": { "s": "a", "t": "b" } }
    }))
    .expect("should parse ops/call request");

    assert_eq!(req.method, "ops/call");
    assert_eq!(req.id, Some(json!(1)));
}

#[test]
fn test_json_rpc_response_serialization() {
    let resp = JsonRpcResponse {
        jsonrpc: "2.0".to_owned(),
        id: Some(json!(1)),
        result: Some(json!({"value": 3})),
        error: None,
    };

    let json_str = serde_json::to_string(&resp).expect("should serialize");
    assert!(json_str.contains("\"value\":3"));
    assert!(!json_str.contains("error"));
}

#[test]
fn test_op_definitions_complete() {
    let ops = router().list_ops();
    assert_eq!(ops.len(), 6);

    let names: Vec<&str> = ops.iter().map(|o| o.name.as_str()).collect();
    for expected in ["distance", "matrix", "similarity", "sum", "primes", "isPrime"] {
        assert!(names.contains(&expected), "missing op {expected}");
    }

    for op in &ops {
        assert!(!op.description.is_empty(), "op {} missing description", op.name);
        assert!(op.input_schema.is_object(), "op {} missing input_schema", op.name);
    }
}

#[test]
fn test_op_call_unknown() {
    let result = router().call_op("levenshtein", json!({}));
    assert!(result.is_error());
    let err = result.error.expect("error payload");
    assert_eq!(err.kind, "unknownOp");
}

#[test]
fn test_op_call_trivial_matrix() {
    let result = router().call_op("matrix", json!({"s": "abc", "t": ""}));
    assert!(result.is_error());
    assert_eq!(result.error.expect("error payload").kind, "trivialMatrix");
}

#[test]
fn test_op_call_distance_and_matrix_agree() {
    let r = router();
    let d = r.call_op("distance", json!({"s": "saturday", "t": "sunday"}));
    assert_eq!(d.value, Some(json!(3)));

    let m = r
        .call_op("matrix", json!({"s": "saturday", "t": "sunday"}))
        .value
        .expect("tableau");
    assert_eq!(m[8][6], json!(3));
}

#[test]
fn test_session_round_trip() {
    let responses = run_session(&[
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        json!({"jsonrpc": "2.0", "id": 2, "method": "ops/list"}),
        json!({"jsonrpc": "2.0", "id": 3, "method": "ops/call",
               "params": {"name": "distance", "arguments": {"s": "kitten", "t": "sitting"}}}),
        json!({"jsonrpc": "2.0", "id": 4, "method": "ping"}),
    ]);

    // The notification gets no response.
    assert_eq!(responses.len(), 4);

    assert_eq!(responses[0]["id"], json!(1));
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], json!("edutil"));
    assert_eq!(
        responses[0]["result"]["capabilities"]["ops"]["listChanged"],
        json!(false)
    );

    assert_eq!(responses[1]["result"]["ops"].as_array().map(Vec::len), Some(6));
    assert_eq!(responses[2]["result"]["value"], json!(3));
    assert_eq!(responses[3]["result"], json!({}));
}

#[test]
fn test_session_errors() {
    let responses = run_session(&[
        json!({"jsonrpc": "1.0", "id": 1, "method": "ping"}),
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        json!({"jsonrpc": "2.0", "id": 3, "method": "ops/call", "params": {"arguments": {}}}),
        json!({"jsonrpc": "2.0", "id": 4, "method": "ops/call",
               "params": {"name": "distance", "arguments": {"s": "abc", "t": "abc"}}}),
    ]);

    assert_eq!(responses.len(), 4);
    assert_eq!(responses[0]["error"]["code"], json!(-32600));
    assert_eq!(responses[1]["error"]["code"], json!(-32601));
    assert_eq!(responses[2]["error"]["code"], json!(-32602));

    // Operation failures are results, not protocol errors.
    assert!(responses[3].get("error").is_none());
    assert_eq!(responses[3]["result"]["error"]["kind"], json!("trivialMatrix"));
}

#[test]
fn test_session_parse_error_continues() {
    let input = b"not json\n{\"jsonrpc\":\"2.0\",\"id\":7,\"method\":\"ping\"}\n".to_vec();
    let mut reader = std::io::Cursor::new(input);
    let mut output = Vec::new();
    server::serve(&ServerConfig::default(), &mut reader, &mut output).expect("serve");

    let text = String::from_utf8(output).expect("utf-8");
    let responses: Vec<Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).expect("json"))
        .collect();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["error"]["code"], json!(-32700));
    assert_eq!(responses[1]["id"], json!(7));
}
