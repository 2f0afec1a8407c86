//! Domain value objects and the fixed rule constants.
//!
//! # Design
//!
//! `Category` is a pure value type: `Copy`, equality-by-value, no identity.
//! Its only job is to define the two admissible categories, their string
//! representations, and the `FromStr` parser. Parsing is deliberately strict:
//! exact, case-sensitive match with no trimming and no aliases, because the
//! category column stores these strings verbatim.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Substrings a title must contain to be accepted.
pub const CLICKBAIT_MARKERS: [&str; 4] = ["Won't Believe", "Secret", "Top", "Guess"];

/// Exact length of a valid phone number (digits only).
pub const PHONE_NUMBER_LEN: usize = 10;

/// Minimum character length of post content.
pub const CONTENT_MIN_CHARS: usize = 250;

/// Maximum character length of a post summary, when one is present.
pub const SUMMARY_MAX_CHARS: usize = 250;

// ── Category ─────────────────────────────────────────────────────────────────

/// The category of a post.
///
/// The wire strings are exactly `"Fiction"` and `"Non-Fiction"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fiction" => Ok(Self::Fiction),
            "Non-Fiction" => Ok(Self::NonFiction),
            other => Err(DomainError::InvalidCategory {
                value: other.to_string(),
            }),
        }
    }
}
