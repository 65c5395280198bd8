//! Rendering primitives for CLI output.

use diary_core::storage::Entry;

use super::context::UiContext;
use super::format::{format_timestamp, rule_for};
use super::theme::{colors, paint, Badge};

/// Per-entry choices shown under every entry.
pub const ENTRY_MENU: [&str; 3] = ["n) next entry", "d) delete entry", "q) return to main menu"];

/// Render one entry as a screen of lines.
///
/// Layout: timestamp header, `=` rule as wide as the header, content, two
/// blank lines, closing rule, then the per-entry menu.
pub fn entry_screen(ctx: &UiContext, entry: &Entry) -> Vec<String> {
    let header = format_timestamp(&entry.timestamp, ctx.timezone);
    let rule = rule_for(&header, '=');

    let mut lines = vec![paint(&header, colors::BRIGHT, ctx.color), rule.clone()];
    lines.extend(entry.content.lines().map(str::to_string));
    lines.push(String::new());
    lines.push(String::new());
    lines.push(rule);
    lines.extend(ENTRY_MENU.iter().map(|item| item.to_string()));
    lines
}

/// Render a status message.
///
/// TTY: "[✓] message" (colored when enabled)
/// Plain: "message"
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    if !ctx.is_tty {
        return message.to_string();
    }
    let symbol = paint(kind.display(ctx.unicode), kind.color(), ctx.color);
    format!("{} {}", symbol, message)
}

/// Format an error message with optional hint.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = vec![badge(ctx, Badge::Err, message)];
    if let Some(h) = error_hint {
        lines.push(paint(&format!("Hint: {}", h), colors::DIM, ctx.color));
    }
    lines.join("\n")
}
