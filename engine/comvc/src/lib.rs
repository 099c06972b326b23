//! The comv command line.
//!
//! The binary in `main.rs` only parses arguments and prints. Everything it
//! runs lives here so integration tests drive the same code:
//!
//! - [`commands`]: `run`, `lex`, `check` and `explain`
//! - [`config`]: [`RunConfig`], built once from the command line
//! - [`input`]: data file and script ingestion
//! - [`problem`]: every failure, and its conversion to a diagnostic

pub mod commands;
pub mod config;
pub mod input;
pub mod problem;

pub use config::RunConfig;
pub use problem::Problem;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber, once, and only when `RUST_LOG` is set.
///
/// ```text
/// RUST_LOG=comv_eval=debug comv run a.csv b.csv query.comv
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .init();
        }
    });
}
