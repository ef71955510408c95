#![forbid(unsafe_code)]

use super::SqliteChildKind;
use crate::store::replace::ChildKind;
use bt_core::ids::IdKind;
use bt_core::model::{Elim, ElimEntry};
use rusqlite::{Row, Statement, params};

pub struct Elims;

impl ChildKind for Elims {
    const NAME: &'static str = "elim";
    const PARENT: IdKind = IdKind::Squad;
    type Record = Elim;

    fn direct_parent(record: &Elim) -> Option<&str> {
        Some(&record.squad_id)
    }
}

impl SqliteChildKind for Elims {
    const DELETE_SQL: &'static str = "DELETE FROM elims WHERE squad_id=?1";
    const INSERT_SQL: &'static str = "INSERT INTO elims(id, squad_id, div_id, sort_order, start, games, fee) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
    const SELECT_SQL: &'static str = "SELECT id, squad_id, div_id, sort_order, start, games, fee FROM elims \
         WHERE squad_id=?1 ORDER BY sort_order ASC, id ASC";

    fn insert_row(stmt: &mut Statement<'_>, e: &Elim) -> rusqlite::Result<usize> {
        stmt.execute(params![
            e.id,
            e.squad_id,
            e.div_id,
            e.sort_order,
            e.start,
            e.games,
            e.fee,
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Elim> {
        Ok(Elim {
            id: row.get(0)?,
            squad_id: row.get(1)?,
            div_id: row.get(2)?,
            sort_order: row.get(3)?,
            start: row.get(4)?,
            games: row.get(5)?,
            fee: row.get(6)?,
        })
    }
}

/// Eliminator entries of every elim in a squad.
pub struct ElimEntries;

impl ChildKind for ElimEntries {
    const NAME: &'static str = "elim_entry";
    const PARENT: IdKind = IdKind::Squad;
    type Record = ElimEntry;

    fn direct_parent(_: &ElimEntry) -> Option<&str> {
        None
    }
}

impl SqliteChildKind for ElimEntries {
    const DELETE_SQL: &'static str = "DELETE FROM elim_entries \
         WHERE elim_id IN (SELECT id FROM elims WHERE squad_id=?1)";
    const INSERT_SQL: &'static str =
        "INSERT INTO elim_entries(id, elim_id, player_id, fee) VALUES (?1, ?2, ?3, ?4)";
    const SELECT_SQL: &'static str = "SELECT e.id, e.elim_id, e.player_id, e.fee \
         FROM elim_entries e JOIN elims m ON m.id = e.elim_id \
         WHERE m.squad_id=?1 ORDER BY m.sort_order ASC, e.id ASC";

    fn insert_row(stmt: &mut Statement<'_>, e: &ElimEntry) -> rusqlite::Result<usize> {
        stmt.execute(params![e.id, e.elim_id, e.player_id, e.fee])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<ElimEntry> {
        Ok(ElimEntry {
            id: row.get(0)?,
            elim_id: row.get(1)?,
            player_id: row.get(2)?,
            fee: row.get(3)?,
        })
    }
}
