//! `ircmark` -- CLI binary for converting styled chat lines between
//! dialects.
//!
//! Provides the following subcommands:
//!
//! - `ircmark irc` -- Convert chat markdown into IRC control codes.
//! - `ircmark md` -- Convert a formatted IRC line into chat markdown.
//! - `ircmark inspect` -- Dump the parsed form of a line as JSON.
//!
//! Each subcommand takes the line as an argument, or processes stdin
//! line by line when the argument is omitted.

use std::io::{self, BufRead};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use ircmark::{Color, IrcToMarkdown, MarkdownToIrc, StyleConverter};

/// Inline style conversion CLI.
#[derive(Parser)]
#[command(name = "ircmark", about = "Convert styled chat lines between dialects", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Convert chat markdown into IRC control codes.
    Irc {
        /// Line to convert; reads stdin when omitted.
        text: Option<String>,

        /// Palette color concealing spoilers.
        #[arg(long, default_value_t = Color::Red)]
        spoiler_color: Color,

        /// Print control characters as \xNN escapes.
        #[arg(long)]
        escape: bool,
    },

    /// Convert a formatted IRC line into chat markdown.
    Md {
        /// Line to convert; reads stdin when omitted.
        text: Option<String>,
    },

    /// Dump the parsed form of a line as JSON.
    Inspect {
        /// Line to parse; reads stdin when omitted.
        text: Option<String>,

        /// Dialect to parse the line as.
        #[arg(long, value_enum, default_value_t = Dialect::Markdown)]
        dialect: Dialect,
    },
}

/// Input dialects `inspect` understands.
#[derive(Clone, Copy, ValueEnum)]
enum Dialect {
    /// Chat markdown markers.
    Markdown,
    /// IRC control codes.
    Irc,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    match cli.command {
        Commands::Irc { text, spoiler_color, escape } => {
            let converter = MarkdownToIrc::with_spoiler_color(spoiler_color);
            for_each_line(text, |line| {
                let out = converter.convert(line);
                if escape {
                    println!("{}", escape_control(&out));
                } else {
                    println!("{out}");
                }
                Ok(())
            })?;
        }
        Commands::Md { text } => {
            let converter = IrcToMarkdown::new();
            for_each_line(text, |line| {
                println!("{}", converter.convert(line));
                Ok(())
            })?;
        }
        Commands::Inspect { text, dialect } => {
            for_each_line(text, |line| {
                let json = match dialect {
                    Dialect::Markdown => {
                        serde_json::to_string_pretty(&ircmark::markdown::parse(line))?
                    }
                    Dialect::Irc => serde_json::to_string_pretty(&ircmark::irc::parse(line))?,
                };
                println!("{json}");
                Ok(())
            })?;
        }
    }

    Ok(())
}

/// Run `f` on the given argument, or on every stdin line when the
/// argument is omitted.
fn for_each_line(
    text: Option<String>,
    mut f: impl FnMut(&str) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    match text {
        Some(text) => f(&text),
        None => {
            let mut lines = 0usize;
            for line in io::stdin().lock().lines() {
                f(&line?)?;
                lines += 1;
            }
            debug!(lines, "processed stdin lines");
            Ok(())
        }
    }
}

/// Render control characters as `\xNN` escapes so converted output is
/// visible in a terminal.
fn escape_control(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            out.push_str(&format!("\\x{:02x}", c as u32));
        } else {
            out.push(c);
        }
    }
    out
}
