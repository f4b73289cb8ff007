//! fibseq
//!
//! Computes the first terms of the Fibonacci sequence and prints them.
//!
//! # Example
//!
//! ```rust
//! use fibseq::{fibonacci, report};
//!
//! let text = report::render(3, &fibonacci(3));
//! assert_eq!(text, "First 3 Fibonacci numbers:\nF(0) = 0\nF(1) = 1\nF(2) = 1\n");
//! ```

#![doc(html_root_url = "https://docs.rs/fibseq")]
#![warn(rust_2018_idioms)]

pub mod report;
pub mod sequence;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use sequence::{fibonacci, try_fibonacci, Sequence, SequenceError, Term, MAX_TERMS};
pub use util::config::RunConfig;

use std::io::Write;
use tracing::debug;

/// Program version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Program name
pub const NAME: &str = "fibseq";

/// Generate `config.count` terms and write the report to `out`
///
/// # Example
///
/// ```rust
/// use fibseq::{run, Result, RunConfig};
///
/// fn main() -> Result<()> {
///     let mut out = Vec::new();
///     run(&RunConfig::default(), &mut out)?;
///     assert_eq!(String::from_utf8(out)?.lines().count(), 11);
///     Ok(())
/// }
/// ```
pub fn run<W: Write>(
    config: &RunConfig,
    out: &mut W,
) -> Result<()> {
    debug!(count = config.count, "generating sequence");
    let sequence = fibonacci(config.count);
    debug!(terms = sequence.len(), "writing report");
    report::write_report(out, config.count, &sequence).context("Failed to write report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_default_output() {
        let mut out = Vec::new();
        run(&RunConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "First 10 Fibonacci numbers:");
        assert_eq!(lines[10], "F(9) = 34");
    }

    #[test]
    fn test_run_negative_count() {
        let config = RunConfig {
            count: -5,
            ..RunConfig::default()
        };
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        assert_eq!(out, b"First -5 Fibonacci numbers:\n");
    }
}
