/// Style of an inline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle<'a> {
    /// Text that isn't part of any special construct.
    Plain,
    /// `**text**`
    Bold,
    /// `*text*`
    Italic,
    /// `~~text~~`
    Strikethrough,
    /// `` `text` ``. Raw zone: no other inline pass touches its content.
    Code,
    /// `[text](url)`
    Link { url: &'a str },
}

/// A run of already-escaped text tagged with its style.
///
/// Runs are serialized as soon as a pass recognizes them; they are not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineRun<'a> {
    pub style: InlineStyle<'a>,
    pub text: &'a str,
}

impl<'a> InlineRun<'a> {
    pub fn new(style: InlineStyle<'a>, text: &'a str) -> Self {
        Self { style, text }
    }

    /// Serializes the run. `text` and `url` must already be HTML-escaped.
    pub fn to_html(&self) -> String {
        let text = self.text;
        match self.style {
            InlineStyle::Plain => text.to_string(),
            InlineStyle::Bold => format!("<strong>{text}</strong>"),
            InlineStyle::Italic => format!("<em>{text}</em>"),
            InlineStyle::Strikethrough => format!("<del>{text}</del>"),
            InlineStyle::Code => format!("<code>{text}</code>"),
            InlineStyle::Link { url } => {
                let href = url.replace('"', "&quot;");
                format!("<a href=\"{href}\">{text}</a>")
            }
        }
    }
}
