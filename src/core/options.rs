use std::io::IsTerminal;

use time::UtcOffset;

/// Immutable listing configuration, built once per invocation and passed by
/// reference to everything that prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Include the `.` and `..` pseudo-entries.
    pub show_hidden: bool,
    /// Detailed per-entry lines instead of bare names.
    pub long_format: bool,
    /// Wrap output in ANSI color sequences.
    pub color: bool,
    /// Offset applied to modification times.
    pub utc_offset: UtcOffset,
}

impl ListOptions {
    /// Color follows whether stdout is a terminal. The local offset can only
    /// be read soundly while the process is single-threaded; UTC otherwise.
    pub fn new(show_hidden: bool, long_format: bool) -> Self {
        Self {
            show_hidden,
            long_format,
            color: std::io::stdout().is_terminal(),
            utc_offset: UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_utc_offset(mut self, utc_offset: UtcOffset) -> Self {
        self.utc_offset = utc_offset;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_override_detected_values() {
        let offset = UtcOffset::from_hms(3, 0, 0).unwrap();
        let options = ListOptions::new(true, false)
            .with_color(true)
            .with_utc_offset(offset);
        assert!(options.show_hidden);
        assert!(!options.long_format);
        assert!(options.color);
        assert_eq!(options.utc_offset, offset);
    }
}
