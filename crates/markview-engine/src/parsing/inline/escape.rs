/// Escapes `&`, `<` and `>`. Quotes are left alone.
///
/// This is the only place source text is escaped; every later inline pass
/// works on its output and never escapes again.
pub fn escape_text(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_the_three_characters() {
        assert_eq!(escape_text("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn leaves_quotes_alone() {
        assert_eq!(escape_text(r#"say "hi" it's"#), r#"say "hi" it's"#);
    }

    #[test]
    fn existing_entities_are_escaped_once_more() {
        // Source text is literal; an entity written by the author is shown as typed.
        assert_eq!(escape_text("&lt;"), "&amp;lt;");
    }
}
