// src/dialects.rs
//! 組み込み方言レジストリ
//!
//! Maps language identifiers and common file extensions to built-in
//! [`DialectSpec`]s. The core never inspects file names or extensions; this
//! collaborator layer owns that mapping.

use classify_lines_core::{DialectSpec, DialectSpecBuilder, StringSyntax};

/// Look up a built-in dialect by language identifier or file extension.
///
/// Matching is case-insensitive (`"Go"`, `"go"`, `"rs"`, `"rust"`). Returns
/// `None` for unknown identifiers; callers pick their own fallback, typically
/// [`plain_text`] for comment-free counting.
#[must_use]
pub fn dialect_for(id: &str) -> Option<DialectSpec> {
    let id = id.to_ascii_lowercase();
    let dialect = match id.as_str() {
        "go" => go(),
        "c" | "h" | "cpp" | "cc" | "cxx" | "hpp" | "c++" => c(),
        "rust" | "rs" => rust(),
        "javascript" | "js" | "jsx" | "mjs" | "cjs" | "typescript" | "ts" | "tsx" => javascript(),
        "python" | "py" => python(),
        "shell" | "sh" | "bash" | "zsh" => shell(),
        "lua" => lua(),
        "ocaml" | "ml" | "mli" => ocaml(),
        "text" | "txt" | "plain" => plain_text(),
        _ => return None,
    };
    Some(dialect)
}

/// Comment-free dialect: every non-blank line is code.
#[must_use]
pub fn plain_text() -> DialectSpec {
    build(DialectSpec::builder())
}

fn go() -> DialectSpec {
    build(
        DialectSpec::builder()
            .line_comment("//")
            .block_comment("/*", "*/")
            .string(StringSyntax::quoted("\"", "\""))
            .string(StringSyntax::raw("`", "`")),
    )
}

fn c() -> DialectSpec {
    build(
        DialectSpec::builder()
            .line_comment("//")
            .block_comment("/*", "*/")
            .string(StringSyntax::quoted("\"", "\"")),
    )
}

fn rust() -> DialectSpec {
    // longer raw-string openers first so `r#"` wins over `r"` and `"`
    build(
        DialectSpec::builder()
            .line_comment("//")
            .block_comment("/*", "*/")
            .nested(true)
            .string(StringSyntax::raw("r#\"", "\"#"))
            .string(StringSyntax::raw("r\"", "\""))
            .string(StringSyntax::quoted("\"", "\"")),
    )
}

fn javascript() -> DialectSpec {
    build(
        DialectSpec::builder()
            .line_comment("//")
            .block_comment("/*", "*/")
            .string(StringSyntax::quoted("\"", "\""))
            .string(StringSyntax::quoted("'", "'"))
            .string(StringSyntax::quoted("`", "`").spanning(true)),
    )
}

fn python() -> DialectSpec {
    build(
        DialectSpec::builder()
            .line_comment("#")
            .string(StringSyntax::quoted("\"\"\"", "\"\"\"").spanning(true))
            .string(StringSyntax::quoted("'''", "'''").spanning(true))
            .string(StringSyntax::quoted("\"", "\""))
            .string(StringSyntax::quoted("'", "'")),
    )
}

fn shell() -> DialectSpec {
    build(
        DialectSpec::builder()
            .line_comment("#")
            .string(StringSyntax::quoted("\"", "\"").spanning(true))
            .string(StringSyntax::raw("'", "'")),
    )
}

fn lua() -> DialectSpec {
    build(
        DialectSpec::builder()
            .line_comment("--")
            .block_comment("--[[", "]]")
            .string(StringSyntax::quoted("\"", "\""))
            .string(StringSyntax::quoted("'", "'"))
            .string(StringSyntax::raw("[[", "]]")),
    )
}

fn ocaml() -> DialectSpec {
    build(
        DialectSpec::builder()
            .block_comment("(*", "*)")
            .nested(true)
            .string(StringSyntax::quoted("\"", "\"")),
    )
}

// The table above is static and exercised by tests; a build failure here is
// a bug in this module, not caller input.
fn build(builder: DialectSpecBuilder) -> DialectSpec {
    builder.build().expect("built-in dialect table is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use classify_lines_core::{LineKind, classify, classify_lines};

    #[test]
    fn every_builtin_identifier_resolves() {
        for id in [
            "go", "c", "cpp", "rust", "rs", "javascript", "ts", "python", "py", "shell", "sh",
            "lua", "ocaml", "ml", "text",
        ] {
            assert!(dialect_for(id).is_some(), "missing dialect for {id}");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(dialect_for("Go"), dialect_for("go"));
        assert_eq!(dialect_for("RS"), dialect_for("rust"));
    }

    #[test]
    fn unknown_identifier_is_none() {
        assert_eq!(dialect_for("cobol-85"), None);
    }

    #[test]
    fn plain_text_has_no_comments() {
        let dialect = plain_text();
        assert!(!dialect.has_comments());
        let summary = classify(b"anything // at all\n", &dialect);
        assert_eq!(summary.code, 1usize);
    }

    #[test]
    fn rust_raw_string_swallows_comment_markers() {
        let dialect = dialect_for("rust").expect("rust dialect");
        let report = classify_lines(b"let s = r#\"// not\n/* a comment */\"#;\n", &dialect);
        let kinds: Vec<_> = report.lines.iter().map(|record| record.kind).collect();
        assert_eq!(kinds, vec![LineKind::Code, LineKind::Code]);
    }

    #[test]
    fn lua_block_opener_beats_line_prefix() {
        let dialect = dialect_for("lua").expect("lua dialect");
        let report = classify_lines(b"--[[ block\nstill ]]\n-- line\nprint(1)\n", &dialect);
        let kinds: Vec<_> = report.lines.iter().map(|record| record.kind).collect();
        assert_eq!(
            kinds,
            vec![LineKind::Comment, LineKind::Comment, LineKind::Comment, LineKind::Code]
        );
    }

    #[test]
    fn ocaml_nests_without_line_comments() {
        let dialect = dialect_for("ocaml").expect("ocaml dialect");
        let summary = classify(b"(* outer (* inner *) *)\nlet x = 1\n", &dialect);
        assert_eq!(summary.comments, 1usize);
        assert_eq!(summary.code, 1usize);
    }
}
