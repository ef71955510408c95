#![forbid(unsafe_code)]

use super::{SqliteChildKind, text_enum};
use crate::store::replace::ChildKind;
use bt_core::ids::IdKind;
use bt_core::model::{Pot, PotType};
use rusqlite::{Row, Statement, params};

pub struct Pots;

impl ChildKind for Pots {
    const NAME: &'static str = "pot";
    const PARENT: IdKind = IdKind::Squad;
    type Record = Pot;

    fn direct_parent(record: &Pot) -> Option<&str> {
        Some(&record.squad_id)
    }
}

impl SqliteChildKind for Pots {
    const DELETE_SQL: &'static str = "DELETE FROM pots WHERE squad_id=?1";
    const INSERT_SQL: &'static str = "INSERT INTO pots(id, squad_id, div_id, sort_order, fee, pot_type) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
    const SELECT_SQL: &'static str = "SELECT id, squad_id, div_id, sort_order, fee, pot_type FROM pots \
         WHERE squad_id=?1 ORDER BY sort_order ASC, id ASC";

    fn insert_row(stmt: &mut Statement<'_>, pot: &Pot) -> rusqlite::Result<usize> {
        stmt.execute(params![
            pot.id,
            pot.squad_id,
            pot.div_id,
            pot.sort_order,
            pot.fee,
            pot.pot_type.as_str(),
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Pot> {
        Ok(Pot {
            id: row.get(0)?,
            squad_id: row.get(1)?,
            div_id: row.get(2)?,
            sort_order: row.get(3)?,
            fee: row.get(4)?,
            pot_type: text_enum(row, 5, PotType::parse)?,
        })
    }
}
