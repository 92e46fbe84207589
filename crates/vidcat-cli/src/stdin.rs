// crates/vidcat-cli/src/stdin.rs - Line-oriented prompt input
//
// The session reads one plain text line per answer. Readers and writers are
// generic so the whole menu flow can be driven from a byte buffer in tests.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Print `prompt`, then read one line of input
///
/// Returns `None` once input is exhausted (stdin closed or end of a pipe).
/// Only the line terminator is stripped: names and durations are free-form,
/// so surrounding whitespace is kept as typed. Bytes that are not UTF-8 are
/// replaced with U+FFFD instead of ending the session.
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}").context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut bytes = Vec::new();
    let read = input
        .read_until(b'\n', &mut bytes)
        .context("Failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }

    if bytes.ends_with(b"\n") {
        bytes.pop();
        if bytes.ends_with(b"\r") {
            bytes.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_is_written_and_line_returned() {
        let mut input = Cursor::new("  My Video \nnext\n");
        let mut output = Vec::new();

        let line = prompt_line(&mut input, &mut output, "Enter video name: ").unwrap();
        assert_eq!(line.as_deref(), Some("  My Video "));
        assert_eq!(String::from_utf8(output).unwrap(), "Enter video name: ");

        let mut output = Vec::new();
        let line = prompt_line(&mut input, &mut output, "> ").unwrap();
        assert_eq!(line.as_deref(), Some("next"));
    }

    #[test]
    fn test_crlf_and_missing_newline() {
        let mut output = Vec::new();

        let mut input = Cursor::new("windows\r\n");
        let line = prompt_line(&mut input, &mut output, "").unwrap();
        assert_eq!(line.as_deref(), Some("windows"));

        let mut input = Cursor::new("last line");
        let line = prompt_line(&mut input, &mut output, "").unwrap();
        assert_eq!(line.as_deref(), Some("last line"));
    }

    #[test]
    fn test_end_of_input_is_none() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(prompt_line(&mut input, &mut output, "? ").unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut input = Cursor::new(b"ab\xffc\n".to_vec());
        let mut output = Vec::new();
        assert_eq!(
            prompt_line(&mut input, &mut output, "").unwrap().as_deref(),
            Some("ab\u{FFFD}c")
        );
    }

    #[test]
    fn test_blank_line_is_empty_string() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();
        assert_eq!(
            prompt_line(&mut input, &mut output, "").unwrap().as_deref(),
            Some("")
        );
    }
}
