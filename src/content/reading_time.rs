//! Reading time estimation for post bodies

use std::fmt;

/// Average adult reading speed
pub const WORDS_PER_MINUTE: usize = 200;

/// Reading time estimate for a piece of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingTime {
    /// Number of whitespace-separated words
    pub words: usize,
    /// Exact reading time in minutes
    pub minutes: f64,
}

impl ReadingTime {
    /// Estimate the reading time of `text`
    pub fn estimate(text: &str) -> Self {
        let words = text.split_whitespace().count();
        Self {
            words,
            minutes: words as f64 / WORDS_PER_MINUTE as f64,
        }
    }

    /// Minutes rounded to two decimals, then up to a whole number.
    ///
    /// The two-decimal step keeps values like 401 words (2.005 min, stored as
    /// 2.00499...) at 2 minutes.
    pub fn whole_minutes(&self) -> u64 {
        let rounded: f64 = format!("{:.2}", self.minutes)
            .parse()
            .unwrap_or(self.minutes);
        rounded.ceil() as u64
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.whole_minutes())
    }
}
