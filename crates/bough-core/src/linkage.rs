//! Linkage criteria for agglomerative clustering.
//!
//! Lives here rather than next to the clustering code so the `[cluster]`
//! config section can name one and reject typos at load time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

/// How the distance to a merged cluster is derived from its two parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linkage {
    /// Nearest member: `min`.
    #[default]
    Single,
    /// Farthest member: `max`.
    Complete,
}

impl Linkage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Complete => "complete",
        }
    }

    /// Merge two finite distances under this criterion.
    #[must_use]
    pub const fn pick(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Single => a.min(b),
            Self::Complete => a.max(b),
        }
    }
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A linkage name other than `single` or `complete`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown linkage `{0}` (expected `single` or `complete`)")]
pub struct UnknownLinkage(pub String);

impl UnknownLinkage {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        ErrorCode::UnknownLinkage
    }
}

impl FromStr for Linkage {
    type Err = UnknownLinkage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "complete" => Ok(Self::Complete),
            _ => Err(UnknownLinkage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays() {
        assert_eq!("single".parse::<Linkage>(), Ok(Linkage::Single));
        assert_eq!(" Complete ".parse::<Linkage>(), Ok(Linkage::Complete));
        assert_eq!(
            "average".parse::<Linkage>(),
            Err(UnknownLinkage("average".to_string()))
        );
        assert_eq!(Linkage::Complete.to_string(), "complete");
        assert_eq!(UnknownLinkage(String::new()).code().code(), "E1003");
    }

    #[test]
    fn pick_is_min_or_max() {
        assert_eq!(Linkage::Single.pick(2.0, 1.0), 1.0);
        assert_eq!(Linkage::Complete.pick(2.0, 1.0), 2.0);
    }
}
