// crates/shared-kernel/src/value_objects/line_kind.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of one physical line.
///
/// A mixed line (code plus a trailing comment, or code adjoining a string or
/// block-comment boundary) is always `Code`; a line of whitespace plus a
/// comment is `Comment`; a line of only whitespace is `Blank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

impl LineKind {
    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    #[inline]
    #[must_use]
    pub const fn is_comment(self) -> bool {
        matches!(self, Self::Comment)
    }

    #[inline]
    #[must_use]
    pub const fn is_code(self) -> bool {
        matches!(self, Self::Code)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Comment => "comment",
            Self::Code => "code",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
