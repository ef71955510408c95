#![forbid(unsafe_code)]

use super::SqliteChildKind;
use crate::store::replace::ChildKind;
use bt_core::ids::IdKind;
use bt_core::model::Squad;
use rusqlite::{Row, Statement, params};

pub struct Squads;

impl ChildKind for Squads {
    const NAME: &'static str = "squad";
    const PARENT: IdKind = IdKind::Event;
    type Record = Squad;

    fn direct_parent(record: &Squad) -> Option<&str> {
        Some(&record.event_id)
    }
}

impl SqliteChildKind for Squads {
    const DELETE_SQL: &'static str = "DELETE FROM squads WHERE event_id=?1";
    const INSERT_SQL: &'static str = "INSERT INTO squads(id, event_id, squad_name, games, lane_count, starting_lane, squad_date, squad_time, sort_order) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
    const SELECT_SQL: &'static str = "SELECT id, event_id, squad_name, games, lane_count, starting_lane, squad_date, squad_time, sort_order \
         FROM squads WHERE event_id=?1 ORDER BY sort_order ASC, id ASC";

    fn insert_row(stmt: &mut Statement<'_>, s: &Squad) -> rusqlite::Result<usize> {
        stmt.execute(params![
            s.id,
            s.event_id,
            s.squad_name,
            s.games,
            s.lane_count,
            s.starting_lane,
            s.squad_date,
            s.squad_time,
            s.sort_order,
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Squad> {
        Ok(Squad {
            id: row.get(0)?,
            event_id: row.get(1)?,
            squad_name: row.get(2)?,
            games: row.get(3)?,
            lane_count: row.get(4)?,
            starting_lane: row.get(5)?,
            squad_date: row.get(6)?,
            squad_time: row.get(7)?,
            sort_order: row.get(8)?,
        })
    }
}
