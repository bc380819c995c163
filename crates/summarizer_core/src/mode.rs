use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Summarization style requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Tldr,
    Keypoints,
    Eli5,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode {0:?} (expected tldr, keypoints or eli5)")]
pub struct UnknownMode(pub String);

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Tldr, Mode::Keypoints, Mode::Eli5];

    /// Wire value sent in the `mode` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Tldr => "tldr",
            Mode::Keypoints => "keypoints",
            Mode::Eli5 => "eli5",
        }
    }

    /// Human-readable label for selectors.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Tldr => "TL;DR",
            Mode::Keypoints => "Key points",
            Mode::Eli5 => "Explain simply",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Mode::Tldr => Mode::Keypoints,
            Mode::Keypoints => Mode::Eli5,
            Mode::Eli5 => Mode::Tldr,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Mode::Tldr => Mode::Eli5,
            Mode::Keypoints => Mode::Tldr,
            Mode::Eli5 => Mode::Keypoints,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownMode(raw.to_string()))
    }
}
