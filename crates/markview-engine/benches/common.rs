// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\nA second line with a [link](https://example.com).\n\n- Bullet point\n- Another item\n\n1. First\n2. Second\n\n> A quote\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_lesson_plan(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("# Section {}\n\n", section));
        content.push_str("Some paragraph content with **multiple** sentences. This helps create *realistic* structure for benchmarking.\n");
        content.push_str("Inline `snippets` & <angle> brackets ~~removed~~ keep the escaper busy.\n\n");

        for i in 0..3 {
            content.push_str(&format!("{}. Step {} in section {}\n", i + 1, i, section));
        }
        content.push('\n');

        if section % 3 == 0 {
            content.push_str("```python\ndef benchmark_function():\n    value = 42\n    print(value)\n```\n\n");
        }
    }

    content
}

/// Lines typical of an edit buffer, one highlight call each.
#[allow(dead_code)]
pub fn editor_lines() -> Vec<&'static str> {
    vec![
        "# Heading with **bold**",
        "Plain prose without any markup at all, just words and punctuation.",
        "- list item with `code` and a [link](https://example.com)",
        "  12. ordered item *emphasis* and __strong__",
        "snake_case_identifiers_in_text_are_common_here",
        "**unclosed bold and *unclosed italic",
    ]
}
