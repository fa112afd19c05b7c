//! Terminal capability detection and styling helpers

use owo_colors::OwoColorize;

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Detects terminal width, returning None if not available
pub fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(w, _)| w.0)
}

/// Width of the rule lines drawn under tables, capped at 50 columns
pub fn rule_width() -> usize {
    terminal_width().map_or(50, |w| usize::from(w).min(50))
}

/// Extension trait for colorizing status output
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as failure (red)
    fn failure(&self) -> String;
    /// Color as a section heading (blue)
    fn heading(&self) -> String;
    /// Color as a transition hint (yellow)
    fn hint(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        if supports_color() {
            self.green().to_string()
        } else {
            self.to_string()
        }
    }

    fn failure(&self) -> String {
        if supports_color() {
            self.red().to_string()
        } else {
            self.to_string()
        }
    }

    fn heading(&self) -> String {
        if supports_color() {
            self.blue().to_string()
        } else {
            self.to_string()
        }
    }

    fn hint(&self) -> String {
        if supports_color() {
            self.yellow().to_string()
        } else {
            self.to_string()
        }
    }
}

impl Colorize for String {
    fn success(&self) -> String {
        self.as_str().success()
    }

    fn failure(&self) -> String {
        self.as_str().failure()
    }

    fn heading(&self) -> String {
        self.as_str().heading()
    }

    fn hint(&self) -> String {
        self.as_str().hint()
    }
}
