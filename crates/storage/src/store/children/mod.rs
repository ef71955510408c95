#![forbid(unsafe_code)]

mod brkts;
mod divs;
mod elims;
mod events;
mod lanes;
mod players;
mod pots;
mod squads;

pub use brkts::{BrktEntries, BrktSeeds, Brkts, OneBrkts};
pub use divs::Divs;
pub use elims::{ElimEntries, Elims};
pub use events::Events;
pub use lanes::Lanes;
pub use players::Players;
pub use pots::Pots;
pub use squads::Squads;

use super::StoreError;
use super::replace::{ChildKind, ChildSetRepository};
use rusqlite::types::Type;
use rusqlite::{Connection, Row, Statement, params};
use std::marker::PhantomData;

/// SQLite binding of a child kind. Every statement takes the scope parent id as `?1`.
pub trait SqliteChildKind: ChildKind {
    const DELETE_SQL: &'static str;
    const INSERT_SQL: &'static str;
    const SELECT_SQL: &'static str;

    fn insert_row(stmt: &mut Statement<'_>, record: &Self::Record) -> rusqlite::Result<usize>;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self::Record>;
}

/// Child-set repository over a connection; inside `replace_many` the
/// connection is the open transaction.
pub(in crate::store) struct SqliteChildSet<'c, K> {
    conn: &'c Connection,
    kind: PhantomData<K>,
}

impl<'c, K: SqliteChildKind> SqliteChildSet<'c, K> {
    pub(in crate::store) fn new(conn: &'c Connection) -> Self {
        Self {
            conn,
            kind: PhantomData,
        }
    }

    pub(in crate::store) fn list(&self, parent_id: &str) -> Result<Vec<K::Record>, StoreError> {
        let mut stmt = self.conn.prepare_cached(K::SELECT_SQL)?;
        let rows = stmt.query_map(params![parent_id], K::from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

impl<K: SqliteChildKind> ChildSetRepository<K> for SqliteChildSet<'_, K> {
    fn delete_all_for_parent(&mut self, parent_id: &str) -> Result<usize, StoreError> {
        Ok(self.conn.execute(K::DELETE_SQL, params![parent_id])?)
    }

    fn insert_many(&mut self, records: &[K::Record]) -> Result<usize, StoreError> {
        let mut stmt = self.conn.prepare_cached(K::INSERT_SQL)?;
        let mut inserted = 0usize;
        for record in records {
            inserted += K::insert_row(&mut stmt, record)?;
        }
        Ok(inserted)
    }
}

pub(super) fn text_enum<T>(
    row: &Row<'_>,
    index: usize,
    parse: fn(&str) -> Option<T>,
) -> rusqlite::Result<T> {
    let raw = row.get::<_, String>(index)?;
    parse(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            index,
            Type::Text,
            format!("unexpected value {raw:?}").into(),
        )
    })
}
