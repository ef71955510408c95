#![forbid(unsafe_code)]

use super::SqliteChildKind;
use crate::store::replace::ChildKind;
use bt_core::ids::IdKind;
use bt_core::model::Event;
use rusqlite::{Row, Statement, params};

pub struct Events;

impl ChildKind for Events {
    const NAME: &'static str = "event";
    const PARENT: IdKind = IdKind::Tmnt;
    type Record = Event;

    fn direct_parent(record: &Event) -> Option<&str> {
        Some(&record.tmnt_id)
    }
}

impl SqliteChildKind for Events {
    const DELETE_SQL: &'static str = "DELETE FROM events WHERE tmnt_id=?1";
    const INSERT_SQL: &'static str = "INSERT INTO events(id, tmnt_id, event_name, team_size, games, entry_fee, lineage, prize_fund, other, expenses, added_money, sort_order) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";
    const SELECT_SQL: &'static str = "SELECT id, tmnt_id, event_name, team_size, games, entry_fee, lineage, prize_fund, other, expenses, added_money, sort_order \
         FROM events WHERE tmnt_id=?1 ORDER BY sort_order ASC, id ASC";

    fn insert_row(stmt: &mut Statement<'_>, e: &Event) -> rusqlite::Result<usize> {
        stmt.execute(params![
            e.id,
            e.tmnt_id,
            e.event_name,
            e.team_size,
            e.games,
            e.entry_fee,
            e.lineage,
            e.prize_fund,
            e.other,
            e.expenses,
            e.added_money,
            e.sort_order,
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Event> {
        Ok(Event {
            id: row.get(0)?,
            tmnt_id: row.get(1)?,
            event_name: row.get(2)?,
            team_size: row.get(3)?,
            games: row.get(4)?,
            entry_fee: row.get(5)?,
            lineage: row.get(6)?,
            prize_fund: row.get(7)?,
            other: row.get(8)?,
            expenses: row.get(9)?,
            added_money: row.get(10)?,
            sort_order: row.get(11)?,
        })
    }
}
