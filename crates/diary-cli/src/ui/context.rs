//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use chrono_tz::Tz;

use crate::config::UiSection;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether both stdin and stdout are TTYs
    pub interactive: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Whether the screen is cleared between views
    pub clear_screen: bool,
    /// Display timezone; `None` means system local time
    pub timezone: Option<Tz>,
}

impl UiContext {
    /// Create context from the environment and the `[ui]` config section.
    ///
    /// # Errors
    /// Returns an error if the configured timezone is not a known IANA name.
    pub fn from_config(ui: &UiSection) -> anyhow::Result<Self> {
        let is_tty = std::io::stdout().is_terminal();
        let interactive = is_tty && std::io::stdin().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        // Disabled if NO_COLOR env, config, or TERM=dumb
        let color = is_tty && ui.color && !no_color_env && !term_is_dumb;
        let clear_screen = is_tty && ui.clear_screen && !term_is_dumb;
        let timezone = parse_timezone(ui.timezone.as_deref())?;

        Ok(Self {
            is_tty,
            interactive,
            color,
            unicode: !term_is_dumb,
            clear_screen,
            timezone,
        })
    }

    /// Context for non-TTY output with UTC timestamps.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            is_tty: false,
            interactive: false,
            color: false,
            unicode: false,
            clear_screen: false,
            timezone: Some(chrono_tz::UTC),
        }
    }
}

/// Parse an IANA timezone name.
pub fn parse_timezone(value: Option<&str>) -> anyhow::Result<Option<Tz>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => name
            .parse::<Tz>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("Unknown timezone \"{}\": {}", name, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timezone() {
        assert_eq!(
            parse_timezone(Some("Europe/Berlin")).unwrap(),
            Some(chrono_tz::Europe::Berlin)
        );
        assert_eq!(parse_timezone(None).unwrap(), None);
        assert_eq!(parse_timezone(Some("  ")).unwrap(), None);
        assert!(parse_timezone(Some("Mars/Olympus")).is_err());
    }

    #[test]
    fn test_disabled_config_disables_clearing_and_color() {
        let ui = UiSection {
            timezone: None,
            clear_screen: false,
            color: false,
        };
        let ctx = UiContext::from_config(&ui).unwrap();
        assert!(!ctx.clear_screen);
        assert!(!ctx.color);
    }

    #[test]
    fn test_plain_context() {
        let ctx = UiContext::plain();
        assert!(!ctx.is_tty);
        assert!(!ctx.clear_screen);
        assert_eq!(ctx.timezone, Some(chrono_tz::UTC));
    }
}
