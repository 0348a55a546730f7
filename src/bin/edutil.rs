//! edutil -- edit-distance and integer utilities over JSON-RPC stdio.
//!
//! Usage: edutil [--max-input <bytes>] [--max-cells <n>] [--max-sieve <limit>]

use anyhow::Context;

/// Value following `flag` on the command line, if present.
fn flag_value(flag: &str) -> Option<String> {
    std::env::args().skip_while(|a| a != flag).nth(1)
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing to stderr so it does not interfere with stdio JSON-RPC.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = edutil::ServerConfig::default();

    if let Some(raw) = flag_value("--max-input") {
        config.max_input_bytes = raw
            .parse()
            .with_context(|| format!("invalid --max-input value: {raw}"))?;
    }
    if let Some(raw) = flag_value("--max-cells") {
        config.max_matrix_cells = raw
            .parse()
            .with_context(|| format!("invalid --max-cells value: {raw}"))?;
    }
    if let Some(raw) = flag_value("--max-sieve") {
        config.max_sieve_limit = raw
            .parse()
            .with_context(|| format!("invalid --max-sieve value: {raw}"))?;
    }

    edutil::run_server(&config)
}
