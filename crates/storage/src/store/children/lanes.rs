#![forbid(unsafe_code)]

use super::SqliteChildKind;
use crate::store::replace::ChildKind;
use bt_core::ids::IdKind;
use bt_core::model::Lane;
use rusqlite::{Row, Statement, params};

pub struct Lanes;

impl ChildKind for Lanes {
    const NAME: &'static str = "lane";
    const PARENT: IdKind = IdKind::Squad;
    type Record = Lane;

    fn direct_parent(record: &Lane) -> Option<&str> {
        Some(&record.squad_id)
    }
}

impl SqliteChildKind for Lanes {
    const DELETE_SQL: &'static str = "DELETE FROM lanes WHERE squad_id=?1";
    const INSERT_SQL: &'static str =
        "INSERT INTO lanes(id, squad_id, lane_number, in_use) VALUES (?1, ?2, ?3, ?4)";
    const SELECT_SQL: &'static str = "SELECT id, squad_id, lane_number, in_use FROM lanes \
         WHERE squad_id=?1 ORDER BY lane_number ASC";

    fn insert_row(stmt: &mut Statement<'_>, lane: &Lane) -> rusqlite::Result<usize> {
        stmt.execute(params![lane.id, lane.squad_id, lane.lane_number, lane.in_use])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Lane> {
        Ok(Lane {
            id: row.get(0)?,
            squad_id: row.get(1)?,
            lane_number: row.get(2)?,
            in_use: row.get(3)?,
        })
    }
}
