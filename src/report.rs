//! Console report for a generated sequence
//!
//! ```text
//! First 3 Fibonacci numbers:
//! F(0) = 0
//! F(1) = 1
//! F(2) = 1
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::sequence::Sequence;

/// The report text for one run: the requested count in the header, then
/// one `F(i) = value` line per term
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// Count as requested, before clamping
    pub requested: i64,
    pub sequence: &'a Sequence,
}

impl<'a> Report<'a> {
    pub fn new(
        requested: i64,
        sequence: &'a Sequence,
    ) -> Self {
        Self {
            requested,
            sequence,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "First {} Fibonacci numbers:", self.requested)?;
        for (i, term) in self.sequence.iter().enumerate() {
            writeln!(f, "F({}) = {}", i, term)?;
        }
        Ok(())
    }
}

/// Write the report for `sequence`, generated from `requested`, to `out`
pub fn write_report<W: Write>(
    out: &mut W,
    requested: i64,
    sequence: &Sequence,
) -> io::Result<()> {
    write!(out, "{}", Report::new(requested, sequence))?;
    out.flush()
}

/// Render the report into a string
pub fn render(
    requested: i64,
    sequence: &Sequence,
) -> String {
    Report::new(requested, sequence).to_string()
}
