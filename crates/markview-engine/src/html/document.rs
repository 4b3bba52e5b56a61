use std::fmt::Write;

use crate::theme::PreviewTheme;

use super::render;

/// Renders `markdown` as a complete HTML page styled by `theme`.
///
/// The body is exactly [`render`]'s fragment; the theme only feeds the
/// `<style>` sheet in the head.
pub fn render_document(markdown: &str, theme: &PreviewTheme) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n");
    out.push_str(&stylesheet(theme));
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str(&render(markdown));
    out.push_str("\n</body>\n</html>\n");
    out
}

/// CSS rules for every element the fragment writer emits.
pub fn stylesheet(theme: &PreviewTheme) -> String {
    let mut css = String::from(
        "body { font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", Helvetica, Arial, sans-serif; \
         font-size: 14px; line-height: 1.6; color: #24292e; }\n\
         p { margin: 8px 0; }\n\
         ul, ol { margin: 8px 0; padding-left: 20px; }\n\
         li { margin: 4px 0; }\n\
         hr { border: none; border-top: 1px solid #e1e4e8; margin: 16px 0; }\n\
         blockquote { border-left: 4px solid #dfe2e5; padding-left: 16px; margin: 8px 0; color: #6a737d; }\n\
         table { border-collapse: collapse; margin: 8px 0; }\n\
         th, td { border: 1px solid #dfe2e5; padding: 6px 13px; }\n\
         th { font-weight: 600; }\n",
    );

    let _ = writeln!(
        css,
        "pre {{ background-color: {}; padding: 16px; border-radius: 6px; overflow: auto; }}",
        theme.code_background
    );
    let _ = writeln!(
        css,
        "code {{ font-family: \"SF Mono\", Monaco, Consolas, \"Courier New\", monospace; \
         background-color: {}; color: {}; padding: 2px 4px; border-radius: 3px; }}",
        theme.code_background, theme.code_text
    );
    css.push_str("pre code { padding: 0; }\n");
    let _ = writeln!(css, "a {{ color: {}; text-decoration: none; }}", theme.link);

    for (i, (color, px)) in theme
        .headings
        .iter()
        .zip(PreviewTheme::HEADING_FONT_PX)
        .enumerate()
    {
        let _ = writeln!(
            css,
            "h{} {{ color: {color}; font-size: {px}px; font-weight: 600; margin: 16px 0 8px 0; }}",
            i + 1
        );
    }
    css
}
