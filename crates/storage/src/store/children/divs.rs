#![forbid(unsafe_code)]

use super::{SqliteChildKind, text_enum};
use crate::store::replace::ChildKind;
use bt_core::ids::IdKind;
use bt_core::model::{Div, HdcpFor};
use rusqlite::{Row, Statement, params};

pub struct Divs;

impl ChildKind for Divs {
    const NAME: &'static str = "div";
    const PARENT: IdKind = IdKind::Tmnt;
    type Record = Div;

    fn direct_parent(record: &Div) -> Option<&str> {
        Some(&record.tmnt_id)
    }
}

impl SqliteChildKind for Divs {
    const DELETE_SQL: &'static str = "DELETE FROM divs WHERE tmnt_id=?1";
    const INSERT_SQL: &'static str = "INSERT INTO divs(id, tmnt_id, div_name, hdcp_per, hdcp_from, int_hdcp, hdcp_for, sort_order) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
    const SELECT_SQL: &'static str = "SELECT id, tmnt_id, div_name, hdcp_per, hdcp_from, int_hdcp, hdcp_for, sort_order \
         FROM divs WHERE tmnt_id=?1 ORDER BY sort_order ASC, id ASC";

    fn insert_row(stmt: &mut Statement<'_>, d: &Div) -> rusqlite::Result<usize> {
        stmt.execute(params![
            d.id,
            d.tmnt_id,
            d.div_name,
            d.hdcp_per,
            d.hdcp_from,
            d.int_hdcp,
            d.hdcp_for.as_str(),
            d.sort_order,
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Div> {
        Ok(Div {
            id: row.get(0)?,
            tmnt_id: row.get(1)?,
            div_name: row.get(2)?,
            hdcp_per: row.get(3)?,
            hdcp_from: row.get(4)?,
            int_hdcp: row.get(5)?,
            hdcp_for: text_enum(row, 6, HdcpFor::parse)?,
            sort_order: row.get(7)?,
        })
    }
}
