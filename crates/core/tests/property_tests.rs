// crates/core/tests/property_tests.rs
use proptest::prelude::*;

use classify_lines_core::dialect::{DialectSpec, StringSyntax};
use classify_lines_core::{classify, classify_lines};

fn go_like() -> DialectSpec {
    DialectSpec::builder()
        .line_comment("//")
        .block_comment("/*", "*/")
        .string(StringSyntax::quoted("\"", "\""))
        .string(StringSyntax::raw("`", "`"))
        .build()
        .expect("valid dialect")
}

proptest! {
    #[test]
    fn total_equals_category_sum(content in "[\\x00-\\x7F]{0,600}") {
        let summary = classify(content.as_bytes(), &go_like());
        prop_assert_eq!(summary.lines, summary.code + summary.comments + summary.blanks);
    }

    #[test]
    fn total_matches_physical_lines(content in "[\\x00-\\x7F]{0,500}") {
        let bytes = content.as_bytes();
        let terminators = bytes.iter().filter(|&&b| b == b'\n').count();
        let unterminated_tail = usize::from(!bytes.is_empty() && bytes.last() != Some(&b'\n'));

        let summary = classify(bytes, &go_like());
        prop_assert_eq!(usize::from(summary.lines), terminators + unterminated_tail);
    }

    // Delimiter-heavy alphabet so string/comment transitions actually fire.
    #[test]
    fn classification_is_idempotent(content in "[/*`\"\\\\a \\n]{0,300}") {
        let dialect = go_like();
        let first = classify(content.as_bytes(), &dialect);
        let second = classify(content.as_bytes(), &dialect);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn report_agrees_with_summary(content in "[/*`\"\\\\a \\n]{0,300}") {
        let dialect = go_like();
        let report = classify_lines(content.as_bytes(), &dialect);
        prop_assert_eq!(report.summary, classify(content.as_bytes(), &dialect));
        prop_assert_eq!(report.lines.len(), usize::from(report.summary.lines));
    }

    #[test]
    fn line_count_never_exceeds_byte_count(content in "[\\x00-\\x7F]{0,1000}") {
        let summary = classify(content.as_bytes(), &go_like());
        let len = content.len();
        if len > 0 {
            prop_assert!(usize::from(summary.lines) <= len);
        } else {
            prop_assert_eq!(usize::from(summary.lines), 0);
        }
    }
}
