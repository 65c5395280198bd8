//! Line-oriented console used by the menu loop and the actions.
//!
//! Everything the interactive flows print or read goes through the
//! [`Console`] trait, so the flows run unchanged against a real terminal or a
//! scripted buffer.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::ui::UiContext;

/// ANSI: erase display, cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// A line holding only this ends multi-line capture, like end of input.
pub const END_OF_ENTRY: &str = ".";

const PAUSE_PROMPT: &str = "Press Enter to continue.";

pub trait Console {
    /// Print `prompt` without a newline and read one line.
    ///
    /// Returns `None` at end of input. The line terminator is stripped.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;

    /// Read lines until end of input or an [`END_OF_ENTRY`] line.
    fn read_block(&mut self) -> anyhow::Result<String>;

    /// Ask a yes/no question. Only `y` and `n` are answers; anything else,
    /// including end of input, yields `default`.
    fn confirm(&mut self, question: &str, default: bool) -> anyhow::Result<bool>;

    fn write_line(&mut self, line: &str) -> anyhow::Result<()>;

    /// Clear the display, if clearing is enabled.
    fn clear(&mut self) -> anyhow::Result<()>;

    /// Wait for Enter before the next clear, so a message stays readable.
    /// A no-op when clearing is disabled.
    fn pause(&mut self) -> anyhow::Result<()>;
}

/// Console over any buffered reader and writer.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Everything written so far.
    #[allow(dead_code)]
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
    fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut bytes = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut bytes)
            .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
        if read == 0 {
            return Ok(None);
        }
        let decoded = String::from_utf8_lossy(&bytes);
        let buffer: &str = &decoded;
        let line = buffer.strip_suffix('\n').unwrap_or(buffer);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Some(line.to_string()))
    }

    fn write_err(e: io::Error) -> anyhow::Error {
        anyhow::anyhow!("Failed to write output: {}", e)
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", prompt).map_err(Self::write_err)?;
        self.output.flush().map_err(Self::write_err)?;
        self.next_line()
    }

    fn read_block(&mut self) -> anyhow::Result<String> {
        let mut lines = Vec::new();
        while let Some(line) = self.next_line()? {
            if line.trim_end() == END_OF_ENTRY {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    fn confirm(&mut self, question: &str, default: bool) -> anyhow::Result<bool> {
        let choices = if default { "[Yn]" } else { "[yN]" };
        let answer = self.read_line(&format!("{} {} ", question, choices))?;
        Ok(parse_confirm(answer.as_deref(), default))
    }

    fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", line).map_err(Self::write_err)
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        if !self.clear_screen {
            return Ok(());
        }
        write!(self.output, "{}", CLEAR_SCREEN).map_err(Self::write_err)?;
        self.output.flush().map_err(Self::write_err)
    }

    fn pause(&mut self) -> anyhow::Result<()> {
        if self.clear_screen {
            self.read_line(PAUSE_PROMPT)?;
        }
        Ok(())
    }
}

/// Interpret a yes/no answer.
pub fn parse_confirm(answer: Option<&str>, default: bool) -> bool {
    match answer.map(|value| value.trim().to_lowercase()).as_deref() {
        Some("y") => true,
        Some("n") => false,
        _ => default,
    }
}

/// Answer of a dialoguer confirmation. Esc and `q` yield `None`, which
/// counts as the default, the same as end of input on a line read.
fn confirm_or_default(answer: Option<bool>, default: bool) -> bool {
    answer.unwrap_or(default)
}

/// Console bound to the process's stdin and stdout.
///
/// On a TTY, confirmations use a dialoguer prompt; otherwise every prompt
/// is a plain line read.
pub struct TerminalConsole {
    lines: LineConsole<StdinLock<'static>, Stdout>,
    interactive: bool,
}

impl TerminalConsole {
    pub fn new(ctx: &UiContext) -> Self {
        Self {
            lines: LineConsole::new(io::stdin().lock(), io::stdout(), ctx.clear_screen),
            interactive: ctx.interactive,
        }
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.lines.read_line(prompt)
    }

    fn read_block(&mut self) -> anyhow::Result<String> {
        self.lines.read_block()
    }

    fn confirm(&mut self, question: &str, default: bool) -> anyhow::Result<bool> {
        if !self.interactive {
            return self.lines.confirm(question, default);
        }

        let theme = ColorfulTheme::default();
        let answer = Confirm::with_theme(&theme)
            .with_prompt(question)
            .default(default)
            .wait_for_newline(true)
            .interact_opt()
            .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))?;
        Ok(confirm_or_default(answer, default))
    }

    fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        self.lines.write_line(line)
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        self.lines.clear()
    }

    fn pause(&mut self) -> anyhow::Result<()> {
        self.lines.pause()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str, clear_screen: bool) -> LineConsole<Cursor<Vec<u8>>, Vec<u8>> {
        LineConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), clear_screen)
    }

    fn written(console: &LineConsole<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).expect("utf8 output")
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut console = scripted("first\r\nsecond\n", false);
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line("> ").unwrap(), None);
        assert_eq!(written(&console), "> > > ");
    }

    #[test]
    fn test_read_line_replaces_invalid_utf8() {
        let input = Cursor::new(b"caf\xe9\n\xff\n".to_vec());
        let mut console = LineConsole::new(input, Vec::new(), false);
        assert_eq!(
            console.read_line("").unwrap().as_deref(),
            Some("caf\u{FFFD}")
        );
        assert_eq!(console.read_line("").unwrap().as_deref(), Some("\u{FFFD}"));
        assert_eq!(console.read_line("").unwrap(), None);
    }

    #[test]
    fn test_read_block_until_end_of_input() {
        let mut console = scripted("line one\nline two\n", false);
        assert_eq!(console.read_block().unwrap(), "line one\nline two");
    }

    #[test]
    fn test_read_block_stops_at_dot_line() {
        let mut console = scripted("line one\n.\nafter\n", false);
        assert_eq!(console.read_block().unwrap(), "line one");
        assert_eq!(console.read_line("").unwrap().as_deref(), Some("after"));
    }

    #[test]
    fn test_parse_confirm() {
        assert!(parse_confirm(Some(""), true));
        assert!(parse_confirm(Some("whatever"), true));
        assert!(!parse_confirm(Some("N"), true));
        assert!(parse_confirm(Some(" y "), false));
        assert!(!parse_confirm(Some("yes"), false));
        assert!(!parse_confirm(None, false));
        assert!(parse_confirm(None, true));
    }

    #[test]
    fn test_confirm_shows_default_hint() {
        let mut console = scripted("\n\n", false);
        assert!(console.confirm("Save entry?", true).unwrap());
        assert!(!console.confirm("Are you sure?", false).unwrap());
        assert_eq!(written(&console), "Save entry? [Yn] Are you sure? [yN] ");
    }

    #[test]
    fn test_confirm_or_default() {
        assert!(confirm_or_default(Some(true), false));
        assert!(!confirm_or_default(Some(false), true));
        assert!(confirm_or_default(None, true));
        assert!(!confirm_or_default(None, false));
    }

    #[test]
    fn test_pause_waits_only_when_clearing() {
        let mut console = scripted("next\n", false);
        console.pause().unwrap();
        assert_eq!(written(&console), "");
        assert_eq!(console.read_line("").unwrap().as_deref(), Some("next"));

        let mut console = scripted("\nnext\n", true);
        console.pause().unwrap();
        assert_eq!(written(&console), PAUSE_PROMPT);
        assert_eq!(console.read_line("").unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn test_clear_respects_setting() {
        let mut console = scripted("", false);
        console.clear().unwrap();
        assert_eq!(written(&console), "");

        let mut console = scripted("", true);
        console.clear().unwrap();
        assert_eq!(written(&console), CLEAR_SCREEN);
    }
}
