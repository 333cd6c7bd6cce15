//! ANSI color codes for terminal output.

/// ANSI palette for match output: red for the matched span, magenta for
/// path prefixes, dim for separators.
///
/// Uses only standard 16-color codes (no RGB), so it reads fine in both
/// light and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub red: &'static str,
    pub magenta: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        red: "\x1b[31m",
        magenta: "\x1b[35m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        red: "",
        magenta: "",
        dim: "",
        reset: "",
    };

    /// Create colors based on enabled flag.
    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
