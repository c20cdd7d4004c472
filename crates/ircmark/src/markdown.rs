//! Parser for the markdown-like chat dialect.
//!
//! Inline constructs only:
//!
//! - `**bold**`
//! - `*italic*` / `_italic_`
//! - `__underline__`
//! - `~~strikethrough~~`
//! - `||spoiler||`
//! - `` `inline code` ``
//! - `\x` backslash escapes
//!
//! The scanner walks the line once and descends recursively into styled
//! containers. Anything that fails to match a rule falls through as
//! literal text, so parsing never rejects an input. Marker pairs follow
//! the dialect's matching rules: longest match wins, and on equal length
//! italics beat bold beat underline, which is what nests `***x***` as
//! bold inside italics and `___x___` as underline inside italics.

use tracing::trace;

use crate::span::Span;

/// Maximum nesting depth for styled containers. Styling beyond this
/// depth degrades to literal text.
const MAX_STYLE_DEPTH: usize = 16;

/// Parse one line of the markdown dialect into a span sequence.
///
/// Infallible: unmatched or malformed markers come back inside
/// [`Span::Text`] verbatim.
pub fn parse(input: &str) -> Vec<Span> {
    let spans = parse_spans(input, 0);
    trace!(bytes = input.len(), spans = spans.len(), "parsed markdown-dialect line");
    spans
}

fn parse_spans(input: &str, depth: usize) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut literal = String::new();
    let mut rest = input;

    while !rest.is_empty() {
        // Backslash escapes collapse into the surrounding literal text.
        // Only non-alphanumeric, non-whitespace characters can be
        // escaped; any other backslash is itself literal.
        if let Some(after) = rest.strip_prefix('\\') {
            if let Some(escaped) = after.chars().next() {
                if !escaped.is_ascii_alphanumeric() && !escaped.is_whitespace() {
                    literal.push(escaped);
                    rest = &after[escaped.len_utf8()..];
                    continue;
                }
            }
        }

        if depth < MAX_STYLE_DEPTH {
            if let Some((span, consumed)) = match_styled(rest, depth) {
                if !literal.is_empty() {
                    spans.push(Span::Text(std::mem::take(&mut literal)));
                }
                spans.push(span);
                rest = &rest[consumed..];
                continue;
            }
        }

        let Some(ch) = rest.chars().next() else { break };
        literal.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    if !literal.is_empty() {
        spans.push(Span::Text(literal));
    }
    spans
}

/// Try every styled rule that can start at the head of `rest`. Returns
/// the parsed span and the number of bytes consumed.
fn match_styled(rest: &str, depth: usize) -> Option<(Span, usize)> {
    match rest.chars().next()? {
        '*' | '_' => match_emphasis(rest, depth),
        '|' => match_spoiler(rest, depth),
        '~' => match_strikethrough(rest, depth),
        '`' => match_code(rest),
        _ => None,
    }
}

type BuildSpan = fn(Vec<Span>) -> Span;

/// The `*`/`_` family. All three markers compete at the same position;
/// the longest match wins, equal lengths resolve italic over bold over
/// underline.
fn match_emphasis(rest: &str, depth: usize) -> Option<(Span, usize)> {
    let italic = match_star_italic(rest).or_else(|| match_underscore_italic(rest));
    let candidates: [(Option<(&str, usize)>, BuildSpan, u8); 3] = [
        (italic, Span::Italic, 2),
        (match_double(rest, "**", '*'), Span::Bold, 1),
        (match_double(rest, "__", '_'), Span::Underline, 0),
    ];

    let (consumed, _, content, build) = candidates
        .into_iter()
        .filter_map(|(matched, build, rank)| {
            matched.map(|(content, consumed)| (consumed, rank, content, build))
        })
        .max_by_key(|&(consumed, rank, _, _)| (consumed, rank))?;

    Some((build(parse_spans(content, depth + 1)), consumed))
}

/// `*italic*`: the opener must be followed by non-whitespace, the closer
/// must not be followed by another `*`, and no space inside the content
/// may sit directly before a `*`. Literal `**` pairs and escaped
/// characters are allowed inside.
fn match_star_italic(rest: &str) -> Option<(&str, usize)> {
    let body = rest.strip_prefix('*')?;
    if body.chars().next()?.is_whitespace() {
        return None;
    }

    let mut iter = body.char_indices().peekable();
    while let Some((i, c)) = iter.next() {
        match c {
            '*' => {
                if matches!(iter.peek(), Some((_, '*'))) {
                    // literal `**` pair inside the content
                    iter.next();
                } else if i > 0 {
                    return Some((&body[..i], 1 + i + 1));
                } else {
                    return None;
                }
            }
            '\\' => {
                iter.next()?;
            }
            c if c.is_whitespace() => {
                if matches!(iter.peek(), Some((_, '*'))) {
                    return None;
                }
            }
            _ => {}
        }
    }
    None
}

/// `_italic_`: the closer must land on a word boundary, i.e. be followed
/// by a non-word character or the end of input. Single `_` cannot appear
/// inside the content; literal `__` pairs can.
fn match_underscore_italic(rest: &str) -> Option<(&str, usize)> {
    let body = rest.strip_prefix('_')?;
    let mut iter = body.char_indices().peekable();
    while let Some((i, c)) = iter.next() {
        match c {
            '_' => {
                if matches!(iter.peek(), Some((_, '_'))) {
                    // literal `__` pair inside the content
                    iter.next();
                } else if i > 0 && !starts_with_word_char(&body[i + 1..]) {
                    return Some((&body[..i], 1 + i + 1));
                } else {
                    return None;
                }
            }
            '\\' => {
                iter.next()?;
            }
            _ => {}
        }
    }
    None
}

/// `**bold**` / `__underline__`: doubled marker pairs, closed by the
/// first doubled marker that is not followed by a third. Escaped
/// characters stay inside the content.
fn match_double<'a>(rest: &'a str, open: &str, marker: char) -> Option<(&'a str, usize)> {
    let body = rest.strip_prefix(open)?;
    let mut iter = body.char_indices().peekable();
    while let Some((i, c)) = iter.next() {
        if c == '\\' {
            iter.next()?;
        } else if c == marker && i > 0 {
            let after = &body[i + 1..];
            if after.starts_with(marker) && !after[1..].starts_with(marker) {
                return Some((&body[..i], 2 + i + 2));
            }
        }
    }
    None
}

/// `||spoiler||`: non-empty content, closed by the first `||` that is
/// not followed by `_`.
fn match_spoiler(rest: &str, depth: usize) -> Option<(Span, usize)> {
    let body = rest.strip_prefix("||")?;
    let mut from = 0;
    while let Some(found) = body.get(from..).and_then(|s| s.find("||")) {
        let i = from + found;
        if i > 0 && !body[i + 2..].starts_with('_') {
            let children = parse_spans(&body[..i], depth + 1);
            return Some((Span::Spoiler(children), 2 + i + 2));
        }
        from = i + 1;
    }
    None
}

/// `~~strikethrough~~`: the content must start and end with non-space.
fn match_strikethrough(rest: &str, depth: usize) -> Option<(Span, usize)> {
    let body = rest.strip_prefix("~~")?;
    if body.chars().next()?.is_whitespace() {
        return None;
    }

    let mut from = 0;
    while let Some(found) = body.get(from..).and_then(|s| s.find("~~")) {
        let i = from + found;
        let ends_tight =
            i > 0 && body[..i].chars().next_back().is_some_and(|c| !c.is_whitespace());
        if ends_tight {
            let children = parse_spans(&body[..i], depth + 1);
            return Some((Span::Strikethrough(children), 2 + i + 2));
        }
        from = i + 1;
    }
    None
}

/// Inline code: a run of backticks, closed by a run of the same length.
/// The opening run shrinks if the full run cannot be closed, so
/// `` ``x` `` parses with a one-backtick marker and a backtick inside
/// the content.
fn match_code(rest: &str) -> Option<(Span, usize)> {
    let run = rest.chars().take_while(|&c| c == '`').count();
    (1..=run).rev().find_map(|ticks| match_code_with(rest, ticks))
}

fn match_code_with(rest: &str, ticks: usize) -> Option<(Span, usize)> {
    let body = &rest[ticks..];
    let closer = "`".repeat(ticks);
    let mut from = 0;
    while let Some(found) = body.get(from..).and_then(|s| s.find(closer.as_str())) {
        let i = from + found;
        let content_ok = i > 0 && !body[..i].ends_with('`');
        if content_ok && !body[i + ticks..].starts_with('`') {
            return Some((Span::Code(body[..i].to_string()), ticks + i + ticks));
        }
        from = i + 1;
    }
    None
}

fn starts_with_word_char(s: &str) -> bool {
    s.chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}
