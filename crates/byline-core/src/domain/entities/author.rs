//! The `Author` entity and its validation rules.
//!
//! An author has two caller-supplied fields, `name` and `phone_number`, and
//! both are gated here. Name validation needs to know what the store already
//! holds, so it takes an explicit [`NameLookup`], injected by the caller and
//! never an ambient singleton, which keeps the rules testable with a plain
//! closure as a fake directory.
//!
//! # Rule ordering
//!
//! Fields are validated in declaration order (`name`, then `phone_number`),
//! and within `name` the emptiness check runs before the uniqueness lookup.
//! The first failing rule aborts the whole write; values are never
//! transformed, only accepted or rejected.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::PHONE_NUMBER_LEN};

// ── Identity ─────────────────────────────────────────────────────────────────

/// Store-assigned integer identity of a persisted author. Immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(i64);

impl AuthorId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Record Lookup port ───────────────────────────────────────────────────────

/// The injected Record Lookup capability: answers "does an author with this
/// name already exist?".
///
/// `exclude` carries the identity of the record under validation, if it has
/// one. An update that keeps (or re-submits) the record's own name must not
/// self-conflict, so implementors ignore the excluded record when matching.
///
/// This check is a best-effort pre-check. The store is expected to enforce
/// uniqueness again when committing (see the concurrency note on
/// [`NewAuthor::validate`]).
pub trait NameLookup {
    /// Whether an author other than `exclude` already uses `name`
    /// (case-sensitive exact match).
    fn name_taken(&self, name: &str, exclude: Option<AuthorId>) -> bool;
}

/// Any `Fn(&str, Option<AuthorId>) -> bool` is a lookup. Lets tests pass a
/// closure over a fixture, and lets the application layer bridge a store
/// method without a wrapper type.
impl<F> NameLookup for F
where
    F: Fn(&str, Option<AuthorId>) -> bool,
{
    fn name_taken(&self, name: &str, exclude: Option<AuthorId>) -> bool {
        self(name, exclude)
    }
}

// ── Candidate ────────────────────────────────────────────────────────────────

/// A candidate author record as submitted by a caller, not yet persisted.
///
/// Construction never validates; the store invokes validation explicitly
/// before committing (create-then-validate, not interception).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    name: String,
    phone_number: Option<String>,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: None,
        }
    }

    /// Attach an optional phone number.
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// Validate this candidate as a brand-new record (no identity yet, so
    /// nothing is excluded from the uniqueness check).
    ///
    /// # Concurrency
    ///
    /// The uniqueness lookup here is a pre-check, not the enforcement
    /// mechanism: two concurrent creates can both pass it. The store must
    /// re-check under whatever discipline it has (a lock, a transaction, a
    /// unique constraint) before committing.
    pub fn validate(&self, lookup: &dyn NameLookup) -> Result<(), DomainError> {
        Self::validate_name(&self.name, lookup, None)?;
        Self::validate_phone_number(self.phone_number.as_deref())
    }

    /// Validate this candidate as an update to the record identified by
    /// `id`. The record's own name never self-conflicts.
    pub fn validate_update(
        &self,
        id: AuthorId,
        lookup: &dyn NameLookup,
    ) -> Result<(), DomainError> {
        Self::validate_name(&self.name, lookup, Some(id))?;
        Self::validate_phone_number(self.phone_number.as_deref())
    }

    /// Gate every write to `name`.
    ///
    /// The emptiness check runs first, so a malformed name reports
    /// [`DomainError::EmptyName`] and never costs a lookup query. Exactly
    /// one lookup query is performed for a non-empty name.
    pub fn validate_name(
        name: &str,
        lookup: &dyn NameLookup,
        exclude: Option<AuthorId>,
    ) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        if lookup.name_taken(name, exclude) {
            return Err(DomainError::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Gate every write to `phone_number`.
    ///
    /// Absent is valid (the field is optional). Present means exactly ten
    /// characters, every one an ASCII digit. Length alone is not enough:
    /// a well-shaped but non-numeric value is malformed.
    pub fn validate_phone_number(phone_number: Option<&str>) -> Result<(), DomainError> {
        match phone_number {
            None => Ok(()),
            Some(p) if p.len() == PHONE_NUMBER_LEN && p.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(())
            }
            Some(p) => Err(DomainError::PhoneFormat {
                value: p.to_string(),
            }),
        }
    }
}

// ── Persisted record ─────────────────────────────────────────────────────────

/// A persisted author record.
///
/// `id` and the timestamps are owned by the store: `created_at` is stamped
/// once at insert, `updated_at` is absent until the first mutation and
/// refreshed on every subsequent one. The validators never touch them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Author {
    /// Re-validate a stored record against the current directory.
    ///
    /// A record validates against itself (its own id is excluded from the
    /// uniqueness check), so re-validating an unchanged, already-valid
    /// record never raises.
    pub fn validate(&self, lookup: &dyn NameLookup) -> Result<(), DomainError> {
        NewAuthor::validate_name(&self.name, lookup, Some(self.id))?;
        NewAuthor::validate_phone_number(self.phone_number.as_deref())
    }

    /// The candidate that would re-submit this record unchanged.
    pub fn as_candidate(&self) -> NewAuthor {
        NewAuthor {
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (author {})", self.name, self.id)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
