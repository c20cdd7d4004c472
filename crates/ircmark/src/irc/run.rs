//! Parsing formatted IRC lines into styled text runs.

use std::iter::Peekable;
use std::str::Chars;

use serde::Serialize;
use tracing::trace;

use super::code;

/// The style flags active over one run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
    /// Foreground palette index, if a color directive is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg: Option<u8>,
    /// Background palette index, if a color directive set one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<u8>,
}

impl Style {
    /// The unstyled default.
    pub fn plain() -> Self {
        Self::default()
    }
}

/// A stretch of text under one uniform [`Style`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub style: Style,
}

/// Split a formatted IRC line into runs of uniformly styled text.
///
/// Control characters toggle style flags and never appear in run text.
/// Stretches without any text between two controls produce no run, so
/// every returned run has non-empty text. Color directives read up to
/// two digits, then a background only when a comma is directly followed
/// by another digit; a bare color code clears both colors.
pub fn parse(input: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut style = Style::plain();
    let mut text = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            code::BOLD => {
                flush(&mut runs, &mut text, style);
                style.bold = !style.bold;
            }
            code::ITALIC => {
                flush(&mut runs, &mut text, style);
                style.italic = !style.italic;
            }
            code::UNDERLINE => {
                flush(&mut runs, &mut text, style);
                style.underline = !style.underline;
            }
            code::REVERSE => {
                flush(&mut runs, &mut text, style);
                style.reverse = !style.reverse;
            }
            code::RESET => {
                flush(&mut runs, &mut text, style);
                style = Style::plain();
            }
            code::COLOR => {
                flush(&mut runs, &mut text, style);
                match take_color_number(&mut chars) {
                    Some(fg) => {
                        style.fg = Some(fg);
                        // The comma belongs to the directive only when a
                        // background digit follows it.
                        let mut ahead = chars.clone();
                        if ahead.next() == Some(',') {
                            if let Some(bg) = take_color_number(&mut ahead) {
                                style.bg = Some(bg);
                                chars = ahead;
                            }
                        }
                    }
                    None => {
                        style.fg = None;
                        style.bg = None;
                    }
                }
            }
            _ => text.push(c),
        }
    }
    flush(&mut runs, &mut text, style);

    trace!(bytes = input.len(), runs = runs.len(), "split IRC line into styled runs");
    runs
}

fn flush(runs: &mut Vec<TextRun>, text: &mut String, style: Style) {
    if !text.is_empty() {
        runs.push(TextRun { text: std::mem::take(text), style });
    }
}

fn take_color_number(chars: &mut Peekable<Chars<'_>>) -> Option<u8> {
    let mut value = None;
    for _ in 0..2 {
        let Some(&c) = chars.peek() else { break };
        let Some(digit) = c.to_digit(10) else { break };
        value = Some(value.unwrap_or(0) * 10 + digit as u8);
        chars.next();
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, style: Style) -> TextRun {
        TextRun { text: text.into(), style }
    }

    // ── Toggles ─────────────────────────────────────────────────────

    #[test]
    fn empty_input_yields_no_runs() {
        assert_eq!(parse(""), Vec::<TextRun>::new());
    }

    #[test]
    fn plain_text_is_one_run() {
        assert_eq!(parse("hello"), vec![run("hello", Style::plain())]);
    }

    #[test]
    fn bold_toggle_pair() {
        assert_eq!(
            parse("\x02bold\x02 plain"),
            vec![
                run("bold", Style { bold: true, ..Style::plain() }),
                run(" plain", Style::plain()),
            ]
        );
    }

    #[test]
    fn overlapping_toggles_split_runs() {
        assert_eq!(
            parse("\x02bold \x1dboth\x02 italic\x1d"),
            vec![
                run("bold ", Style { bold: true, ..Style::plain() }),
                run("both", Style { bold: true, italic: true, ..Style::plain() }),
                run(" italic", Style { italic: true, ..Style::plain() }),
            ]
        );
    }

    #[test]
    fn unterminated_toggle_runs_to_end() {
        assert_eq!(
            parse("\x02bold"),
            vec![run("bold", Style { bold: true, ..Style::plain() })]
        );
    }

    #[test]
    fn reverse_is_tracked() {
        assert_eq!(
            parse("\x16rev\x16"),
            vec![run("rev", Style { reverse: true, ..Style::plain() })]
        );
    }

    #[test]
    fn reset_clears_everything() {
        assert_eq!(
            parse("\x02\x1fx\x0fy"),
            vec![
                run("x", Style { bold: true, underline: true, ..Style::plain() }),
                run("y", Style::plain()),
            ]
        );
    }

    #[test]
    fn empty_toggle_pairs_produce_no_runs() {
        assert_eq!(parse("\x02\x02"), Vec::<TextRun>::new());
    }

    // ── Color directives ────────────────────────────────────────────

    #[test]
    fn color_with_background() {
        assert_eq!(
            parse("\x0304,12text\x03"),
            vec![run("text", Style { fg: Some(4), bg: Some(12), ..Style::plain() })]
        );
    }

    #[test]
    fn single_digit_colors() {
        assert_eq!(
            parse("\x033,9x"),
            vec![run("x", Style { fg: Some(3), bg: Some(9), ..Style::plain() })]
        );
    }

    #[test]
    fn color_takes_at_most_two_digits() {
        assert_eq!(
            parse("\x03123"),
            vec![run("3", Style { fg: Some(12), ..Style::plain() })]
        );
    }

    #[test]
    fn comma_without_digit_is_text() {
        assert_eq!(
            parse("\x034,x"),
            vec![run(",x", Style { fg: Some(4), ..Style::plain() })]
        );
    }

    #[test]
    fn bare_color_code_clears_colors() {
        assert_eq!(
            parse("\x034a\x03b"),
            vec![
                run("a", Style { fg: Some(4), ..Style::plain() }),
                run("b", Style::plain()),
            ]
        );
    }

    #[test]
    fn leading_comma_after_bare_code_is_text() {
        assert_eq!(parse("\x03,1x"), vec![run(",1x", Style::plain())]);
    }

    #[test]
    fn color_change_splits_runs() {
        assert_eq!(
            parse("a\x034b"),
            vec![
                run("a", Style::plain()),
                run("b", Style { fg: Some(4), ..Style::plain() }),
            ]
        );
    }

    // ── Serialization ───────────────────────────────────────────────

    #[test]
    fn style_omits_unset_colors_in_json() {
        let json = serde_json::to_value(Style::plain()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "bold": false,
                "italic": false,
                "underline": false,
                "reverse": false,
            })
        );
    }
}
