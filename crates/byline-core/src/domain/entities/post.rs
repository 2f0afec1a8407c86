//! The `Post` entity and its validation rules.
//!
//! Four caller-supplied fields, four independent rules, no cross-field
//! logic. Fields are validated in declaration order (`title`, `content`,
//! `summary`, `category`) and the first failing rule aborts the write.
//! Lengths are character counts, not byte counts.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{CLICKBAIT_MARKERS, CONTENT_MIN_CHARS, Category, SUMMARY_MAX_CHARS},
};

// ── Identity ─────────────────────────────────────────────────────────────────

/// Store-assigned integer identity of a persisted post. Immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(i64);

impl PostId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Candidate ────────────────────────────────────────────────────────────────

/// A candidate post as submitted by a caller, not yet persisted.
///
/// The category arrives as raw text and is only typed once validation has
/// parsed it; everything else is accepted or rejected unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
    summary: Option<String>,
    category: String,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            summary: None,
            category: category.into(),
        }
    }

    /// Attach an optional summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Run all four field rules in declaration order. On success, returns
    /// the parsed [`Category`] so the store can persist the typed value.
    pub fn validate(&self) -> Result<Category, DomainError> {
        Self::validate_title(&self.title)?;
        Self::validate_content(&self.content)?;
        Self::validate_summary(self.summary.as_deref())?;
        Self::validate_category(&self.category)
    }

    /// Gate every write to `title`: it must contain at least one marker from
    /// [`CLICKBAIT_MARKERS`]. Case-sensitive substring containment: a
    /// marker inside a longer word still counts. An empty title contains no
    /// marker and fails.
    pub fn validate_title(title: &str) -> Result<(), DomainError> {
        if CLICKBAIT_MARKERS.iter().any(|marker| title.contains(marker)) {
            Ok(())
        } else {
            Err(DomainError::NotClickbait {
                title: title.to_string(),
            })
        }
    }

    /// Gate every write to `content`: at least 250 characters. Absent
    /// content is length 0 and fails.
    pub fn validate_content(content: &str) -> Result<(), DomainError> {
        let length = content.chars().count();
        if length < CONTENT_MIN_CHARS {
            return Err(DomainError::ContentTooShort { length });
        }
        Ok(())
    }

    /// Gate every write to `summary`: absent or empty is valid; a present
    /// summary may be at most 250 characters.
    pub fn validate_summary(summary: Option<&str>) -> Result<(), DomainError> {
        let Some(summary) = summary else {
            return Ok(());
        };
        let length = summary.chars().count();
        if length > SUMMARY_MAX_CHARS {
            return Err(DomainError::SummaryTooLong { length });
        }
        Ok(())
    }

    /// Gate every write to `category`: exactly `"Fiction"` or
    /// `"Non-Fiction"`, no trimming, no case-folding.
    pub fn validate_category(category: &str) -> Result<Category, DomainError> {
        Category::from_str(category)
    }
}

// ── Persisted record ─────────────────────────────────────────────────────────

/// A persisted post record.
///
/// The category is typed here: an inadmissible value cannot survive
/// validation, so a stored record cannot hold one. Identity and timestamps
/// are owned by the store, as for [`Author`](super::author::Author).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Re-validate a stored record. Idempotent on an already-valid record.
    pub fn validate(&self) -> Result<(), DomainError> {
        NewPost::validate_title(&self.title)?;
        NewPost::validate_content(&self.content)?;
        NewPost::validate_summary(self.summary.as_deref())
        // `category` is typed; it cannot hold an inadmissible value.
    }

    /// The candidate that would re-submit this record unchanged.
    pub fn as_candidate(&self) -> NewPost {
        NewPost {
            title: self.title.clone(),
            content: self.content.clone(),
            summary: self.summary.clone(),
            category: self.category.as_str().to_string(),
        }
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] (post {})", self.title, self.category, self.id)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
