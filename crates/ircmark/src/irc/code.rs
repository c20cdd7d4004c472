//! The control characters of the IRC formatting dialect, plus small
//! helpers for wrapping text in them.

/// Toggles bold.
pub const BOLD: char = '\x02';
/// Toggles italics.
pub const ITALIC: char = '\x1d';
/// Toggles underline.
pub const UNDERLINE: char = '\x1f';
/// Toggles reverse video. Most clients render it as italics.
pub const REVERSE: char = '\x16';
/// Clears all active formatting.
pub const RESET: char = '\x0f';
/// Starts a color directive, optionally followed by `NN` or `NN,NN`
/// palette indexes. Bare, it clears the active colors.
pub const COLOR: char = '\x03';

/// Wrap `text` in bold toggles.
pub fn bold(text: &str) -> String {
    wrap(BOLD, text)
}

/// Wrap `text` in italic toggles.
pub fn italic(text: &str) -> String {
    wrap(ITALIC, text)
}

/// Wrap `text` in underline toggles.
pub fn underline(text: &str) -> String {
    wrap(UNDERLINE, text)
}

/// Color `text` with a foreground and optional background palette
/// index, closing with a bare color code. Indexes are written
/// zero-padded to two digits so following digit characters in `text`
/// cannot be swallowed into the directive.
pub fn color(fg: u8, bg: Option<u8>, text: &str) -> String {
    match bg {
        Some(bg) => format!("{COLOR}{fg:02},{bg:02}{text}{COLOR}"),
        None => format!("{COLOR}{fg:02}{text}{COLOR}"),
    }
}

fn wrap(code: char, text: &str) -> String {
    format!("{code}{text}{code}")
}
