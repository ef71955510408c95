#![forbid(unsafe_code)]

//! Parent-scoped replacement of a child set.
//!
//! A replace deletes every child of the parent and inserts the desired set in
//! one batch. The algorithm is written once against [`ChildSetRepository`];
//! each entity kind only supplies its repository binding and its [`ChildKind`].

use super::StoreError;
use bt_core::ids::{IdKind, is_valid_id};
use bt_core::status::{StatusKind, classify};
use std::fmt;

/// An entity kind that is replaced as a whole set under one parent.
pub trait ChildKind {
    /// Singular name used in failure messages ("lane" → "Failed to replace lanes").
    const NAME: &'static str;
    /// Kind of the id that scopes the replace.
    const PARENT: IdKind;
    type Record;

    /// The record's own parent reference when it is the replace scope itself.
    /// Join-scoped kinds (seeds, entries) return `None`.
    fn direct_parent(record: &Self::Record) -> Option<&str>;
}

/// Child-set repository for one entity kind.
pub trait ChildSetRepository<K: ChildKind> {
    fn delete_all_for_parent(&mut self, parent_id: &str) -> Result<usize, StoreError>;

    /// Inserts every record in a single call.
    fn insert_many(&mut self, records: &[K::Record]) -> Result<usize, StoreError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplacePhase {
    Delete,
    Insert,
    Commit,
}

impl ReplacePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            ReplacePhase::Delete => "delete",
            ReplacePhase::Insert => "insert",
            ReplacePhase::Commit => "commit",
        }
    }
}

impl fmt::Display for ReplacePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReplaceError {
    #[error("invalid {} id: {parent_id:?}", .expected.tag())]
    InvalidParent {
        expected: IdKind,
        parent_id: String,
    },
    #[error("{kind} record belongs to {found}, not {parent_id}")]
    ParentMismatch {
        kind: &'static str,
        parent_id: String,
        found: String,
    },
    #[error("{stray} {kind} record(s) fall outside {parent_id}")]
    OutOfScope {
        kind: &'static str,
        parent_id: String,
        stray: usize,
    },
    #[error("Failed to replace {kind}s: {source}")]
    Failed {
        kind: &'static str,
        phase: ReplacePhase,
        #[source]
        source: StoreError,
    },
}

impl ReplaceError {
    pub(crate) fn failed<K: ChildKind>(phase: ReplacePhase, source: StoreError) -> Self {
        Self::Failed {
            kind: K::NAME,
            phase,
            source,
        }
    }

    /// Whether the insert phase ran before the failure.
    pub fn insert_attempted(&self) -> bool {
        matches!(
            self,
            Self::Failed {
                phase: ReplacePhase::Insert | ReplacePhase::Commit,
                ..
            }
        )
    }

    pub fn status(&self) -> StatusKind {
        match self {
            Self::InvalidParent { .. } => StatusKind::NotFound,
            Self::ParentMismatch { .. } | Self::OutOfScope { .. } => StatusKind::Conflict,
            Self::Failed { source, .. } => classify(Some(source.code())),
        }
    }
}

/// Replaces every child of `parent_id` with `desired`, returning the inserted count.
///
/// The parent id and record ownership are checked before the repository is
/// touched. A failed delete never reaches the insert. Nothing is retried or
/// restored here; callers that need all-or-nothing bind `repo` to a
/// transaction (see `SqliteStore::replace_many`).
pub fn replace_children<K, R>(
    repo: &mut R,
    parent_id: &str,
    desired: &[K::Record],
) -> Result<usize, ReplaceError>
where
    K: ChildKind,
    R: ChildSetRepository<K> + ?Sized,
{
    if !is_valid_id(parent_id, K::PARENT) {
        return Err(ReplaceError::InvalidParent {
            expected: K::PARENT,
            parent_id: parent_id.to_string(),
        });
    }

    if let Some(found) = desired
        .iter()
        .filter_map(K::direct_parent)
        .find(|found| *found != parent_id)
    {
        return Err(ReplaceError::ParentMismatch {
            kind: K::NAME,
            parent_id: parent_id.to_string(),
            found: found.to_string(),
        });
    }

    repo.delete_all_for_parent(parent_id)
        .map_err(|err| ReplaceError::failed::<K>(ReplacePhase::Delete, err))?;

    repo.insert_many(desired)
        .map_err(|err| ReplaceError::failed::<K>(ReplacePhase::Insert, err))
}
