// crates/core/src/classifier.rs
use crate::dialect::DialectSpec;
use crate::scanner::Scanner;
use crate::summary::{LineRecord, ScanReport, ScanSummary};

/// Classify every physical line of `source` and return aggregate counts.
///
/// This is the core entry point for the library. The scan is total over its
/// input: empty input yields an all-zero summary, and a block comment or
/// string left open at end-of-input is reported through
/// [`ScanSummary::unterminated`], never as an error.
#[must_use]
pub fn classify(source: &[u8], dialect: &DialectSpec) -> ScanSummary {
    let mut scanner = Scanner::new(dialect);
    let mut summary = ScanSummary::new();

    // Each inclusive segment is one physical line; the final segment exists
    // only when the input ends in a non-empty unterminated line.
    for raw in source.split_inclusive(|&b| b == b'\n') {
        let kind = scanner.scan_line(raw);
        summary.record(kind);
    }

    summary.unterminated = scanner.unterminated();
    summary
}

/// Classify like [`classify`], also returning the ordered per-line records.
#[must_use]
pub fn classify_lines(source: &[u8], dialect: &DialectSpec) -> ScanReport {
    let mut scanner = Scanner::new(dialect);
    let mut summary = ScanSummary::new();
    let mut lines = Vec::with_capacity(bytecount::count(source, b'\n') + 1);

    for (index, raw) in source.split_inclusive(|&b| b == b'\n').enumerate() {
        let kind = scanner.scan_line(raw);
        summary.record(kind);
        lines.push(LineRecord { number: index + 1, kind });
    }

    summary.unterminated = scanner.unterminated();
    ScanReport { summary, lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::StringSyntax;
    use crate::summary::Unterminated;
    use classify_lines_shared_kernel::LineKind;

    fn go_like() -> DialectSpec {
        DialectSpec::builder()
            .line_comment("//")
            .block_comment("/*", "*/")
            .string(StringSyntax::quoted("\"", "\""))
            .string(StringSyntax::raw("`", "`"))
            .build()
            .expect("valid dialect")
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        let summary = classify(b"", &go_like());
        assert_eq!(summary, ScanSummary::new());
        assert!(summary.is_empty());
    }

    #[test]
    fn lone_terminator_is_one_blank_line() {
        let summary = classify(b"\n", &go_like());
        assert_eq!(summary.lines, 1usize);
        assert_eq!(summary.blanks, 1usize);
    }

    #[test]
    fn final_unterminated_line_is_counted() {
        let summary = classify(b"x := 1\ny := 2", &go_like());
        assert_eq!(summary.lines, 2usize);
        assert_eq!(summary.code, 2usize);
    }

    #[test]
    fn unterminated_block_comment_classifies_through_eof() {
        let summary = classify(b"/* never closed\nstill comment\n", &go_like());
        assert_eq!(summary.comments, 2usize);
        assert_eq!(summary.unterminated, Some(Unterminated::BlockComment));
    }

    #[test]
    fn unterminated_raw_string_classifies_through_eof() {
        let summary = classify(b"m := `abc\ntail\n", &go_like());
        assert_eq!(summary.code, 2usize);
        assert_eq!(summary.unterminated, Some(Unterminated::StringLiteral));
    }

    #[test]
    fn report_numbers_lines_from_one() {
        let report = classify_lines(b"x := 1\n\n// done\n", &go_like());
        let kinds: Vec<_> = report.lines.iter().map(|record| (record.number, record.kind)).collect();
        assert_eq!(
            kinds,
            vec![(1, LineKind::Code), (2, LineKind::Blank), (3, LineKind::Comment)]
        );
        assert_eq!(report.summary, classify(b"x := 1\n\n// done\n", &go_like()));
    }

    #[test]
    fn fixture_shaped_source_matches_declared_counts() {
        let source = b"// 9 lines 6 code 1 comments 2 blanks\n\n\
                       package main\n\
                       func main() {\n\
                       \ts := \"/*\" // mixed\n\
                       \tm := `a\n\
                       b`\n\
                       }\n\n";
        let summary = classify(source, &go_like());
        assert_eq!(summary.lines, 9usize);
        assert_eq!(summary.code, 6usize);
        assert_eq!(summary.comments, 1usize);
        assert_eq!(summary.blanks, 2usize);
        assert_eq!(summary.unterminated, None);
    }
}
