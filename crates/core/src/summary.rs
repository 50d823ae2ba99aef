// crates/core/src/summary.rs
use std::iter::Sum;
use std::ops;

use serde::{Deserialize, Serialize};

use classify_lines_shared_kernel::{LineCount, LineKind};

/// Lexical span still open when the input ran out.
///
/// A degenerate but defined outcome, never an error: the affected lines are
/// already classified (comment or code) through end-of-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unterminated {
    BlockComment,
    StringLiteral,
}

/// Aggregate classification counts for one scanned buffer.
///
/// Invariant: `lines == code + comments + blanks`, and `lines` equals the
/// number of line terminators plus one if the final line is non-empty and
/// unterminated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub lines: LineCount,
    pub code: LineCount,
    pub comments: LineCount,
    pub blanks: LineCount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unterminated: Option<Unterminated>,
}

impl ScanSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_zero()
    }

    pub(crate) fn record(&mut self, kind: LineKind) {
        self.lines += 1;
        match kind {
            LineKind::Blank => self.blanks += 1,
            LineKind::Comment => self.comments += 1,
            LineKind::Code => self.code += 1,
        }
    }
}

impl ops::AddAssign<&ScanSummary> for ScanSummary {
    fn add_assign(&mut self, rhs: &ScanSummary) {
        self.lines += rhs.lines;
        self.code += rhs.code;
        self.comments += rhs.comments;
        self.blanks += rhs.blanks;
        // A merged summary remembers that some input was cut short.
        self.unterminated = self.unterminated.or(rhs.unterminated);
    }
}

impl ops::AddAssign for ScanSummary {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl Sum for ScanSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), |mut total, summary| {
            total += summary;
            total
        })
    }
}

/// One classified physical line, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    pub number: usize,
    pub kind: LineKind,
}

/// Summary plus the ordered per-line classification sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub summary: ScanSummary,
    pub lines: Vec<LineRecord>,
}
