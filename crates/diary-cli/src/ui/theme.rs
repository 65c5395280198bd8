//! Theme definitions for colors and badges.

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
}

impl Badge {
    /// Get badge text (e.g., "[OK]")
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Err => "[ERR]",
        }
    }

    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]", // [✓]
            (Self::Err, true) => "[\u{2717}]", // [✗]
            (_, false) => self.text(),
        }
    }

    /// ANSI color for this badge.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Ok => colors::GREEN,
            Self::Err => colors::RED,
        }
    }
}

/// Color definitions using ANSI escape codes.
pub mod colors {
    /// Dim text (for labels, metadata)
    pub const DIM: &str = "\x1b[2m";
    /// Bright/bold text (for headers)
    pub const BRIGHT: &str = "\x1b[1m";
    /// Green (success)
    pub const GREEN: &str = "\x1b[32m";
    /// Red (error)
    pub const RED: &str = "\x1b[31m";
    /// Reset all styles
    pub const RESET: &str = "\x1b[0m";
}

/// Wrap `text` in `style` when color is enabled.
pub fn paint(text: &str, style: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", style, text, colors::RESET)
    } else {
        text.to_string()
    }
}
