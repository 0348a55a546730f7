//! Edit-distance operations: `distance`, `matrix`, `similarity`.
//!
//! Strings are compared over their UTF-8 bytes.

use serde::Deserialize;
use serde_json::{Value, json};

use super::check_input_len;
use crate::edit::{self as engine, Recurrence};
use crate::error::{UtilError, UtilResult};
use crate::server::OpDefinition;

/// Parameters shared by `distance` and `similarity`.
#[derive(Debug, Deserialize)]
pub struct PairParams {
    pub s: String,
    pub t: String,
}

/// Parameters for `matrix`.
#[derive(Debug, Deserialize)]
pub struct MatrixParams {
    pub s: String,
    pub t: String,
    /// Defaults to Levenshtein.
    #[serde(default)]
    pub recurrence: Recurrence,
}

fn pair_schema(extra: Option<(&str, Value)>) -> Value {
    let mut schema = json!({
        "type": "object",
        "properties": {
            "s": { "type": "string", "description": "First input" },
            "t": { "type": "string", "description": "Second input" }
        },
        "required": ["s", "t"]
    });
    if let Some((name, prop)) = extra {
        schema["properties"][name] = prop;
    }
    schema
}

pub fn definitions() -> Vec<OpDefinition> {
    vec![
        OpDefinition {
            name: "distance".to_owned(),
            description: "Levenshtein distance between s and t using a two-row buffer. \
                Fails with trivialMatrix when the inputs are equal or either is empty."
                .to_owned(),
            input_schema: pair_schema(None),
        },
        OpDefinition {
            name: "matrix".to_owned(),
            description: "Full (|s|+1) x (|t|+1) cost tableau under the chosen recurrence, \
                as an array of rows."
                .to_owned(),
            input_schema: pair_schema(Some((
                "recurrence",
                json!({
                    "type": "string",
                    "enum": ["levenshtein", "smithWaterman"],
                    "default": "levenshtein"
                }),
            ))),
        },
        OpDefinition {
            name: "similarity".to_owned(),
            description: "1 - distance / max(|s|, |t|); 1.0 for equal inputs.".to_owned(),
            input_schema: pair_schema(None),
        },
    ]
}

fn check_pair(s: &str, t: &str, limit: usize) -> UtilResult<()> {
    check_input_len(s, limit)?;
    check_input_len(t, limit)
}

pub fn distance(max_input_bytes: usize, arguments: Value) -> UtilResult<Value> {
    let params: PairParams = serde_json::from_value(arguments)?;
    check_pair(&params.s, &params.t, max_input_bytes)?;
    let d = engine::distance(&params.s, &params.t)?;
    Ok(json!(d))
}

/// Reject a tableau for `s` x `t` holding more than `max_cells` cells.
fn check_cells(s: &str, t: &str, max_cells: usize) -> UtilResult<()> {
    let cells = (s.len() + 1).checked_mul(t.len() + 1);
    match cells {
        Some(n) if n <= max_cells => Ok(()),
        _ => Err(UtilError::LimitExceeded {
            what: "tableau cells",
            value: cells.map_or(u64::MAX, |n| u64::try_from(n).unwrap_or(u64::MAX)),
            max: u64::try_from(max_cells).unwrap_or(u64::MAX),
        }),
    }
}

pub fn matrix(max_input_bytes: usize, max_cells: usize, arguments: Value) -> UtilResult<Value> {
    let params: MatrixParams = serde_json::from_value(arguments)?;
    check_pair(&params.s, &params.t, max_input_bytes)?;
    check_cells(&params.s, &params.t, max_cells)?;
    let m = engine::build(&params.s, &params.t, params.recurrence)?;
    Ok(serde_json::to_value(&m)?)
}

pub fn similarity(max_input_bytes: usize, arguments: Value) -> UtilResult<Value> {
    let params: PairParams = serde_json::from_value(arguments)?;
    check_pair(&params.s, &params.t, max_input_bytes)?;
    Ok(json!(engine::similarity(&params.s, &params.t)))
}
