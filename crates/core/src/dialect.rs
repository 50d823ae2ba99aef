// crates/core/src/dialect.rs
//! 言語方言の字句デリミタ定義
//!
//! A `DialectSpec` describes everything the scanner needs to know about one
//! language: line-comment prefixes, block-comment pairs (optionally nested),
//! and string-literal forms. It is immutable once built; all validation
//! happens in [`DialectSpecBuilder::build`], never mid-scan.

use memchr::memmem;
use serde::{Deserialize, Serialize};

use classify_lines_shared_kernel::{DialectError, Result};

/// One string-literal form of a dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringSyntax {
    open: String,
    close: String,
    escape: Option<u8>,
    multi_line: bool,
}

impl StringSyntax {
    /// Conventional quoted literal: backslash escapes, closed at the line end.
    pub fn quoted(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            escape: Some(b'\\'),
            multi_line: false,
        }
    }

    /// Raw literal: no escape processing, may span line terminators.
    pub fn raw(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            escape: None,
            multi_line: false,
        }
        .spanning(true)
    }

    /// Override the escape byte (`None` disables escape processing).
    #[must_use]
    pub fn with_escape(mut self, escape: Option<u8>) -> Self {
        self.escape = escape;
        self
    }

    /// Allow the literal to span line terminators.
    #[must_use]
    pub fn spanning(mut self, multi_line: bool) -> Self {
        self.multi_line = multi_line;
        self
    }

    #[must_use]
    pub fn open(&self) -> &str {
        &self.open
    }

    #[must_use]
    pub fn close(&self) -> &str {
        &self.close
    }

    #[must_use]
    pub const fn escape(&self) -> Option<u8> {
        self.escape
    }

    #[must_use]
    pub const fn is_multi_line(&self) -> bool {
        self.multi_line
    }

    pub(crate) fn open_bytes(&self) -> &[u8] {
        self.open.as_bytes()
    }

    pub(crate) fn close_bytes(&self) -> &[u8] {
        self.close.as_bytes()
    }
}

/// Immutable lexical description of one language dialect.
///
/// String syntaxes are matched in declaration order, so registries declare
/// longer openers before their prefixes (`"""` before `"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectSpec {
    line_comments: Vec<String>,
    block_comments: Vec<(String, String)>,
    nested: bool,
    strings: Vec<StringSyntax>,
}

impl DialectSpec {
    #[must_use]
    pub fn builder() -> DialectSpecBuilder {
        DialectSpecBuilder::default()
    }

    /// Whether the dialect has any comment rule at all.
    ///
    /// A dialect without comments is valid; every non-blank line of such a
    /// source classifies as code.
    #[must_use]
    pub fn has_comments(&self) -> bool {
        !self.line_comments.is_empty() || !self.block_comments.is_empty()
    }

    #[must_use]
    pub fn line_comments(&self) -> &[String] {
        &self.line_comments
    }

    #[must_use]
    pub fn block_comments(&self) -> &[(String, String)] {
        &self.block_comments
    }

    #[must_use]
    pub const fn nested(&self) -> bool {
        self.nested
    }

    #[must_use]
    pub fn strings(&self) -> &[StringSyntax] {
        &self.strings
    }

    pub(crate) fn string(&self, index: usize) -> &StringSyntax {
        &self.strings[index]
    }

    pub(crate) fn block_open(&self, index: usize) -> &[u8] {
        self.block_comments[index].0.as_bytes()
    }

    pub(crate) fn block_close(&self, index: usize) -> &[u8] {
        self.block_comments[index].1.as_bytes()
    }

    /// Match a string opener at the head of `window`.
    ///
    /// Returns `(kind index, opener length)`; declaration order wins.
    pub(crate) fn match_string_open(&self, window: &[u8]) -> Option<(usize, usize)> {
        self.strings
            .iter()
            .position(|s| window.starts_with(s.open_bytes()))
            .map(|index| (index, self.strings[index].open.len()))
    }

    /// Match a block-comment opener at the head of `window`.
    pub(crate) fn match_block_open(&self, window: &[u8]) -> Option<(usize, usize)> {
        self.block_comments
            .iter()
            .position(|(open, _)| window.starts_with(open.as_bytes()))
            .map(|index| (index, self.block_comments[index].0.len()))
    }

    /// Match a line-comment prefix at the head of `window`.
    pub(crate) fn match_line_comment(&self, window: &[u8]) -> bool {
        self.line_comments
            .iter()
            .any(|prefix| window.starts_with(prefix.as_bytes()))
    }

    /// Whether `line` contains any delimiter that could change the scan mode.
    ///
    /// Line-comment prefixes are excluded: a line without string or block
    /// delimiters classifies directly from its leading prefix.
    pub(crate) fn contains_significant(&self, line: &[u8]) -> bool {
        self.strings
            .iter()
            .map(StringSyntax::open_bytes)
            .chain(self.block_comments.iter().map(|(open, _)| open.as_bytes()))
            .any(|delimiter| memmem::find(line, delimiter).is_some())
    }

}

/// Builder for [`DialectSpec`]; `build` performs all validation.
#[derive(Debug, Clone, Default)]
pub struct DialectSpecBuilder {
    line_comments: Vec<String>,
    block_comments: Vec<(String, String)>,
    nested: bool,
    strings: Vec<StringSyntax>,
}

impl DialectSpecBuilder {
    /// Add a line-comment prefix (e.g. `//`).
    #[must_use]
    pub fn line_comment(mut self, prefix: impl Into<String>) -> Self {
        self.line_comments.push(prefix.into());
        self
    }

    /// Add a block-comment open/close pair (e.g. `/*`, `*/`).
    #[must_use]
    pub fn block_comment(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.block_comments.push((open.into(), close.into()));
        self
    }

    /// Whether block comments of this dialect nest.
    #[must_use]
    pub fn nested(mut self, nested: bool) -> Self {
        self.nested = nested;
        self
    }

    /// Add a string-literal form.
    #[must_use]
    pub fn string(mut self, syntax: StringSyntax) -> Self {
        self.strings.push(syntax);
        self
    }

    /// Validate and freeze the dialect.
    ///
    /// # Errors
    ///
    /// Rejects empty delimiters, delimiters containing whitespace (the blank
    /// rule would shadow them), a string opener that equals a comment opener,
    /// and a nested block pair whose opener equals its closer.
    pub fn build(self) -> Result<DialectSpec> {
        for prefix in &self.line_comments {
            check_delimiter(prefix, "line comment")?;
        }
        for (open, close) in &self.block_comments {
            check_delimiter(open, "block comment open")?;
            check_delimiter(close, "block comment close")?;
            if self.nested && open == close {
                return Err(DialectError::NestedDelimiterClash { delimiter: open.clone() });
            }
        }
        for syntax in &self.strings {
            check_delimiter(&syntax.open, "string open")?;
            check_delimiter(&syntax.close, "string close")?;

            let clashes = self.line_comments.iter().any(|p| p == &syntax.open)
                || self.block_comments.iter().any(|(open, _)| open == &syntax.open);
            if clashes {
                return Err(DialectError::AmbiguousDelimiter { delimiter: syntax.open.clone() });
            }
        }

        Ok(DialectSpec {
            line_comments: self.line_comments,
            block_comments: self.block_comments,
            nested: self.nested,
            strings: self.strings,
        })
    }
}

fn check_delimiter(delimiter: &str, role: &'static str) -> Result<()> {
    if delimiter.is_empty() {
        return Err(DialectError::EmptyDelimiter { role });
    }
    if delimiter.bytes().any(|b| b.is_ascii_whitespace()) {
        return Err(DialectError::WhitespaceDelimiter { delimiter: delimiter.to_string() });
    }
    Ok(())
}
