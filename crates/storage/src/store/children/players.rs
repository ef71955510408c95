#![forbid(unsafe_code)]

use super::SqliteChildKind;
use crate::store::replace::ChildKind;
use bt_core::ids::IdKind;
use bt_core::model::Player;
use rusqlite::{Row, Statement, params};

pub struct Players;

impl ChildKind for Players {
    const NAME: &'static str = "player";
    const PARENT: IdKind = IdKind::Squad;
    type Record = Player;

    fn direct_parent(record: &Player) -> Option<&str> {
        Some(&record.squad_id)
    }
}

impl SqliteChildKind for Players {
    const DELETE_SQL: &'static str = "DELETE FROM players WHERE squad_id=?1";
    const INSERT_SQL: &'static str = "INSERT INTO players(id, squad_id, first_name, last_name, average, lane, position) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
    // unassigned players sort after every lane
    const SELECT_SQL: &'static str = "SELECT id, squad_id, first_name, last_name, average, lane, position FROM players \
         WHERE squad_id=?1 ORDER BY lane IS NULL, lane ASC, position ASC, id ASC";

    fn insert_row(stmt: &mut Statement<'_>, p: &Player) -> rusqlite::Result<usize> {
        stmt.execute(params![
            p.id,
            p.squad_id,
            p.first_name,
            p.last_name,
            p.average,
            p.lane,
            p.position,
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Player> {
        Ok(Player {
            id: row.get(0)?,
            squad_id: row.get(1)?,
            first_name: row.get(2)?,
            last_name: row.get(3)?,
            average: row.get(4)?,
            lane: row.get(5)?,
            position: row.get(6)?,
        })
    }
}
