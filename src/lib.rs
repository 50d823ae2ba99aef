// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod dialects;

pub use classify_lines_core::{
    DialectSpec, DialectSpecBuilder, LineRecord, ScanReport, ScanSummary, StringSyntax,
    Unterminated, classify, classify_lines,
};
pub use classify_lines_shared_kernel::{DialectError, LineCount, LineKind};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
