// crates/core/src/scanner.rs
//! The per-line lexical state machine.
//!
//! Three persistent modes: plain scanning, inside a block comment, inside a
//! string literal. Line comments cannot outlive a physical line, so they are
//! handled locally within [`Scanner::scan_line`] and never stored. Illegal
//! combinations ("inside a string and a block comment") are unrepresentable.

use log::trace;

use classify_lines_shared_kernel::LineKind;

use crate::dialect::DialectSpec;
use crate::summary::Unterminated;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    Normal,
    /// `index` selects the open/close pair, `depth` supports nesting dialects.
    BlockComment { index: usize, depth: usize },
    /// `index` selects which string syntax is active.
    InString { index: usize },
}

pub(crate) struct Scanner<'d> {
    dialect: &'d DialectSpec,
    mode: ScanMode,
}

impl<'d> Scanner<'d> {
    pub(crate) fn new(dialect: &'d DialectSpec) -> Self {
        Self { dialect, mode: ScanMode::Normal }
    }

    /// Classify one physical line.
    ///
    /// `raw` is one segment of the input, terminator included when present.
    /// Code dominates comment on mixed lines; whitespace marks neither flag.
    pub(crate) fn scan_line(&mut self, raw: &[u8]) -> LineKind {
        let terminated = raw.last() == Some(&b'\n');
        let mut line = raw;
        if terminated {
            line = &line[..line.len() - 1];
            if line.last() == Some(&b'\r') {
                line = &line[..line.len() - 1];
            }
        }

        // Whitespace-only lines are blank except inside a string literal,
        // where whitespace is literal content.
        if !matches!(self.mode, ScanMode::InString { .. })
            && line.iter().all(u8::is_ascii_whitespace)
        {
            return LineKind::Blank;
        }

        // A plain-mode line without string or block delimiters classifies
        // from its leading bytes alone.
        if self.mode == ScanMode::Normal && !self.dialect.contains_significant(line) {
            return self.classify_plain(line);
        }

        let mut saw_code = matches!(self.mode, ScanMode::InString { .. });
        let mut saw_comment = false;
        let mut continued = false;
        let mut i = 0;

        while i < line.len() {
            let window = &line[i..];
            match self.mode {
                ScanMode::Normal => {
                    if let Some((index, len)) = self.dialect.match_string_open(window) {
                        trace!("start string {:?}", self.dialect.string(index).open());
                        self.mode = ScanMode::InString { index };
                        saw_code = true;
                        i += len;
                    } else if let Some((index, len)) = self.dialect.match_block_open(window) {
                        trace!("start block comment {:?}", self.dialect.block_comments()[index].0);
                        self.mode = ScanMode::BlockComment { index, depth: 1 };
                        saw_comment = true;
                        i += len;
                    } else if self.dialect.match_line_comment(window) {
                        trace!("start line comment");
                        saw_comment = true;
                        // consumes the rest of the physical line
                        break;
                    } else {
                        if !window[0].is_ascii_whitespace() {
                            saw_code = true;
                        }
                        i += 1;
                    }
                }
                ScanMode::BlockComment { index, depth } => {
                    let close = self.dialect.block_close(index);
                    let open = self.dialect.block_open(index);
                    if window.starts_with(close) {
                        saw_comment = true;
                        i += close.len();
                        if depth == 1 {
                            trace!("end block comment");
                            self.mode = ScanMode::Normal;
                        } else {
                            trace!("end block comment, still nested");
                            self.mode = ScanMode::BlockComment { index, depth: depth - 1 };
                        }
                    } else if window.starts_with(open) {
                        // Inner opens are consumed whole so their tail cannot
                        // pair with an unrelated close.
                        saw_comment = true;
                        i += open.len();
                        if self.dialect.nested() {
                            trace!("nested block comment");
                            self.mode = ScanMode::BlockComment { index, depth: depth + 1 };
                        }
                    } else {
                        if !window[0].is_ascii_whitespace() {
                            saw_comment = true;
                        }
                        i += 1;
                    }
                }
                ScanMode::InString { index } => {
                    let syntax = self.dialect.string(index);
                    saw_code = true;
                    if syntax.escape() == Some(window[0]) {
                        if window.len() == 1 {
                            // escaped terminator: the literal continues on
                            // the next physical line
                            continued = true;
                            i += 1;
                        } else {
                            i += 2;
                        }
                    } else if window.starts_with(syntax.close_bytes()) {
                        trace!("end string {:?}", syntax.close());
                        self.mode = ScanMode::Normal;
                        i += syntax.close_bytes().len();
                    } else {
                        i += 1;
                    }
                }
            }
        }

        // A single-line literal still open at the terminator closes
        // degenerately; only multi-line forms span terminators.
        if terminated && !continued {
            if let ScanMode::InString { index } = self.mode {
                if !self.dialect.string(index).is_multi_line() {
                    trace!("string open at line end, closing");
                    self.mode = ScanMode::Normal;
                }
            }
        }

        if saw_code {
            LineKind::Code
        } else if saw_comment {
            LineKind::Comment
        } else {
            LineKind::Blank
        }
    }

    fn classify_plain(&self, line: &[u8]) -> LineKind {
        if self.dialect.match_line_comment(line.trim_ascii_start()) {
            LineKind::Comment
        } else {
            LineKind::Code
        }
    }

    /// Span still open after the last line, reported on the summary.
    pub(crate) fn unterminated(&self) -> Option<Unterminated> {
        match self.mode {
            ScanMode::Normal => None,
            ScanMode::BlockComment { .. } => Some(Unterminated::BlockComment),
            ScanMode::InString { .. } => Some(Unterminated::StringLiteral),
        }
    }
}
