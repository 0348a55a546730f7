//! `edutil`: edit-distance engine and small integer utilities.
//!
//! The core is [`edit`]: Levenshtein and Smith–Waterman cost tableaux over
//! raw bytes, plus a two-row rolling-buffer distance that agrees with the
//! full tableau. [`math`] holds the integer helpers (minimum, wrapping sums,
//! primes).
//!
//! The `edutil` binary exposes every routine over JSON-RPC 2.0 on stdio
//! (newline-delimited).
//!
//! # Architecture
//!
//! ```text
//! stdin (JSON-RPC) → server → OpRouter → edit / math
//! stdout (JSON-RPC) ←───────────────────────┘
//! ```

pub mod edit;
pub mod error;
pub mod math;
pub mod ops;
pub mod server;

pub use error::{EditError, EditResult, UtilError, UtilResult};
pub use server::{ServerConfig, run_server};
