//! [`Span`] -- the style-annotated parse tree for the markdown dialect.
//!
//! [`markdown::parse`](crate::markdown::parse) produces a `Vec<Span>`;
//! the converters flatten it back into wire text. Styled variants nest
//! arbitrarily. `Code` content is raw and never re-parsed.

use serde::Serialize;

/// One node of the markdown-dialect parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Span {
    /// Literal text with no styling of its own. Markers that failed to
    /// match stay inside verbatim.
    Text(String),
    /// `**content**`
    Bold(Vec<Span>),
    /// `*content*` or `_content_`
    Italic(Vec<Span>),
    /// `__content__`
    Underline(Vec<Span>),
    /// `~~content~~`
    Strikethrough(Vec<Span>),
    /// `||content||`
    Spoiler(Vec<Span>),
    /// `` `content` `` -- raw text, markers and styling inside are not
    /// interpreted.
    Code(String),
}

impl Span {
    /// The unstyled text content of this span, markers dropped.
    pub fn plain_text(&self) -> String {
        match self {
            Span::Text(text) | Span::Code(text) => text.clone(),
            Span::Bold(children)
            | Span::Italic(children)
            | Span::Underline(children)
            | Span::Strikethrough(children)
            | Span::Spoiler(children) => plain_text(children),
        }
    }
}

/// The unstyled text content of a span sequence.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::plain_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_flattens_nesting() {
        let spans = vec![
            Span::Text("a ".into()),
            Span::Bold(vec![
                Span::Text("b ".into()),
                Span::Italic(vec![Span::Text("c".into())]),
            ]),
            Span::Code("d".into()),
        ];
        assert_eq!(plain_text(&spans), "a b cd");
    }

    #[test]
    fn plain_text_of_empty_sequence() {
        assert_eq!(plain_text(&[]), "");
    }

    #[test]
    fn serializes_with_variant_tags() {
        let span = Span::Bold(vec![Span::Text("x".into())]);
        let json = serde_json::to_value(&span).unwrap();
        assert_eq!(json, serde_json::json!({ "bold": [{ "text": "x" }] }));
    }
}
