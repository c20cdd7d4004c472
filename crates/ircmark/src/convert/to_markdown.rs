//! IRC control codes to chat markdown.
//!
//! The formatted line is first split into styled runs, then markers are
//! emitted wherever a style flag flips between neighboring runs. End
//! markers come out in reverse order of the start markers so the result
//! nests properly. Reverse video counts as italics, which is how most
//! IRC clients render it; colors have no markdown equivalent and are
//! dropped.

use tracing::trace;

use crate::irc::{self, TextRun};

use super::StyleConverter;

/// Converts formatted IRC lines into chat markdown.
pub struct IrcToMarkdown;

#[derive(Clone, Copy, Default)]
struct Flags {
    italic: bool,
    bold: bool,
    underline: bool,
}

fn flags_of(run: &TextRun) -> Flags {
    Flags {
        italic: run.style.italic || run.style.reverse,
        bold: run.style.bold,
        underline: run.style.underline,
    }
}

impl IrcToMarkdown {
    pub fn new() -> Self {
        Self
    }
}

impl StyleConverter for IrcToMarkdown {
    fn convert(&self, text: &str) -> String {
        let runs = irc::parse(text);
        let mut out = String::with_capacity(text.len());

        // One index past the end closes whatever is still open.
        for i in 0..=runs.len() {
            let current = runs.get(i).map(flags_of).unwrap_or_default();
            let previous = i
                .checked_sub(1)
                .and_then(|j| runs.get(j))
                .map(flags_of)
                .unwrap_or_default();

            if current.italic && !previous.italic {
                out.push('*');
            }
            if current.bold && !previous.bold {
                out.push_str("**");
            }
            if current.underline && !previous.underline {
                out.push_str("__");
            }

            if !current.underline && previous.underline {
                out.push_str("__");
            }
            if !current.bold && previous.bold {
                out.push_str("**");
            }
            if !current.italic && previous.italic {
                out.push('*');
            }

            if let Some(run) = runs.get(i) {
                out.push_str(&run.text);
            }
        }

        trace!(from = text.len(), to = out.len(), "converted IRC line to markdown");
        out
    }
}

impl Default for IrcToMarkdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(irc: &str) -> String {
        IrcToMarkdown::new().convert(irc)
    }

    #[test]
    fn test_plain_passthrough() {
        assert_eq!(convert("hello world"), "hello world");
    }

    #[test]
    fn test_bold() {
        assert_eq!(convert("\x02text\x02"), "**text**");
    }

    #[test]
    fn test_italic() {
        assert_eq!(convert("\x1dtext\x1d"), "*text*");
    }

    #[test]
    fn test_underline() {
        assert_eq!(convert("\x1ftext\x1f"), "__text__");
    }

    #[test]
    fn test_reverse_renders_as_italic() {
        assert_eq!(convert("\x16text\x16"), "*text*");
    }

    #[test]
    fn test_overlapping_styles_nest_markers() {
        assert_eq!(
            convert("\x02bold \x1dboth\x02 italic\x1d"),
            "**bold *both** italic*"
        );
    }

    #[test]
    fn test_unterminated_style_is_closed() {
        assert_eq!(convert("\x02bold"), "**bold**");
    }

    #[test]
    fn test_reset_closes_open_styles() {
        assert_eq!(convert("\x02a\x0fb"), "**a**b");
    }

    #[test]
    fn test_colors_are_dropped() {
        assert_eq!(convert("\x0304,12text\x03"), "text");
    }

    #[test]
    fn test_styled_words_side_by_side() {
        assert_eq!(convert("\x02a\x02 \x1fb\x1f"), "**a** __b__");
    }

    #[test]
    fn test_all_three_styles_close_in_reverse_order() {
        assert_eq!(convert("\x1d\x02\x1fx"), "***__x__***");
    }
}
