// crates/vidcat-cli/src/render.rs - Human-readable output
//
// Everything the user sees goes through here. `console::style` drops its
// colors automatically when stdout is not a terminal, so piped output and
// test buffers stay plain.

use console::style;
use std::io::{self, Write};
use vidcat_core::{Position, Record};

use crate::menu::MenuChoice;

pub const APP_TITLE: &str = "Video Catalog";

const RULE_WIDTH: usize = 70;

/// The menu banner followed by the five numbered entries
pub fn menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, " {} | choose an option", style(APP_TITLE).bold())?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{choice}")?;
    }
    Ok(())
}

/// Numbered listing between two rules
pub fn listing<W: Write>(out: &mut W, entries: &[(Position, &Record)]) -> io::Result<()> {
    let rule = "*".repeat(RULE_WIDTH);

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    if entries.is_empty() {
        writeln!(out, "{}", style("No videos in the catalog yet.").dim())?;
    }
    for (position, record) in entries {
        writeln!(out, "{position}. {record}")?;
    }
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    Ok(())
}

pub fn success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", style(message).green())
}

pub fn failure<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", style(message).red())
}

pub fn farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Thank you for using {APP_TITLE}!")
}
