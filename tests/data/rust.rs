// 20 lines 11 code 6 comments 3 blanks

/* outer /* inner */ still comment
end of outer */
fn main() {
    let s = "/* not a comment */";
    let raw = r#"line one
line two "quoted"
end"#;
    let t = r"simple raw";
    println!("{s}{raw}{t}"); // mixed
}

/* "strings are inert in here" */
fn helper() -> u32 {
    // nested /* does not reopen */
    41 + 1
}

// end of file
