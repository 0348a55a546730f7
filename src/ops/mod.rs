//! Operation router: registers and dispatches `ops/call` requests.
//!
//! Each operation is a function that takes JSON arguments and returns a JSON
//! value or a [`UtilError`]. The router maintains the registry, applies the
//! configured input limits, and folds failures into an [`OpCallResult`] whose
//! `error.kind` callers can match on (e.g. `trivialMatrix`).

pub mod edit;
pub mod math;

use tracing::{debug, warn};

use crate::error::{UtilError, UtilResult};
use crate::server::{OpCallResult, OpDefinition, OpErrorInfo, ServerConfig};

/// Reject a string operand longer than `limit` bytes.
pub fn check_input_len(input: &str, limit: usize) -> UtilResult<()> {
    if input.len() > limit {
        return Err(UtilError::InputTooLarge {
            len: input.len(),
            limit,
        });
    }
    Ok(())
}

/// Operation router that dispatches calls to implementations.
pub struct OpRouter {
    limits: ServerConfig,
}

impl OpRouter {
    /// Create a new operation router enforcing the limits in `limits`.
    pub const fn new(limits: ServerConfig) -> Self {
        Self { limits }
    }

    /// List all available operations with their JSON Schema definitions.
    pub fn list_ops(&self) -> Vec<OpDefinition> {
        let mut ops = edit::definitions();
        ops.extend(math::definitions());
        ops
    }

    /// Call an operation by name with the given JSON arguments.
    ///
    /// Failures (including unknown names) come back as an error payload
    /// rather than a JSON-RPC error.
    pub fn call_op(&self, name: &str, arguments: serde_json::Value) -> OpCallResult {
        debug!(op = name, "dispatching op call");

        let outcome = match name {
            "distance" => edit::distance(self.limits.max_input_bytes, arguments),
            "matrix" => edit::matrix(
                self.limits.max_input_bytes,
                self.limits.max_matrix_cells,
                arguments,
            ),
            "similarity" => edit::similarity(self.limits.max_input_bytes, arguments),
            "sum" => math::sum(arguments),
            "primes" => math::primes(self.limits.max_sieve_limit, arguments),
            "isPrime" => math::is_prime(arguments),
            _ => Err(UtilError::UnknownOp(name.to_owned())),
        };

        match outcome {
            Ok(value) => OpCallResult {
                value: Some(value),
                error: None,
            },
            Err(e) => {
                warn!(op = name, kind = e.kind(), error = %e, "op call failed");
                OpCallResult {
                    value: None,
                    error: Some(OpErrorInfo {
                        kind: e.kind().to_owned(),
                        message: e.to_string(),
                    }),
                }
            }
        }
    }
}
