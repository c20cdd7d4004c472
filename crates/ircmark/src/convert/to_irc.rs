//! Chat markdown to IRC control codes.
//!
//! The mapping:
//!
//! - Bold wraps in `\x02`.
//! - Italics (either marker) wrap in `\x1d`.
//! - Underline wraps in `\x1f`.
//! - Spoilers keep their `||` markers and are painted with matching
//!   foreground and background so the text stays concealed until
//!   selected.
//! - Strikethrough and inline code have no IRC equivalent: the markers
//!   are dropped and the content is kept.

use tracing::trace;

use crate::irc::{self, Color};
use crate::markdown;
use crate::span::Span;

use super::StyleConverter;

/// Converts chat markdown into IRC control codes.
pub struct MarkdownToIrc {
    spoiler_color: Color,
}

impl MarkdownToIrc {
    /// Converter with the default red spoiler concealment.
    pub fn new() -> Self {
        Self::with_spoiler_color(Color::Red)
    }

    /// Converter concealing spoilers with the given palette color.
    pub fn with_spoiler_color(color: Color) -> Self {
        Self { spoiler_color: color }
    }

    fn flatten(&self, spans: &[Span]) -> String {
        spans.iter().map(|span| self.flatten_span(span)).collect()
    }

    fn flatten_span(&self, span: &Span) -> String {
        match span {
            Span::Text(text) => text.clone(),
            Span::Bold(children) => irc::code::bold(&self.flatten(children)),
            Span::Italic(children) => irc::code::italic(&self.flatten(children)),
            Span::Underline(children) => irc::code::underline(&self.flatten(children)),
            Span::Strikethrough(children) => self.flatten(children),
            Span::Spoiler(children) => {
                let code = self.spoiler_color.code();
                let concealed = format!("||{}||", self.flatten(children));
                irc::code::color(code, Some(code), &concealed)
            }
            Span::Code(text) => text.clone(),
        }
    }
}

impl StyleConverter for MarkdownToIrc {
    fn convert(&self, text: &str) -> String {
        let spans = markdown::parse(text);
        let out = self.flatten(&spans);
        trace!(from = text.len(), to = out.len(), "converted markdown line to IRC codes");
        out
    }
}

impl Default for MarkdownToIrc {
    fn default() -> Self {
        Self::new()
    }
}
