#![forbid(unsafe_code)]

//! Multi-level ancestry lookups, one function per relationship depth.

use super::{SqliteStore, StoreError};
use bt_core::ids::{IdKind, TypedId, is_valid_id};
use rusqlite::params;

const EVENTS_OF_TMNT: &str = "SELECT e.id FROM events e WHERE e.tmnt_id=?1 ORDER BY e.sort_order, e.id";
const DIVS_OF_TMNT: &str = "SELECT d.id FROM divs d WHERE d.tmnt_id=?1 ORDER BY d.sort_order, d.id";
const SQUADS_OF_TMNT: &str = "SELECT s.id FROM squads s \
     JOIN events e ON e.id = s.event_id \
     WHERE e.tmnt_id=?1 ORDER BY e.sort_order, s.sort_order, s.id";

fn squad_children_of_tmnt(table: &str, order: &str) -> String {
    format!(
        "SELECT c.id FROM {table} c \
         JOIN squads s ON s.id = c.squad_id \
         JOIN events e ON e.id = s.event_id \
         WHERE e.tmnt_id=?1 ORDER BY e.sort_order, s.sort_order, {order}, c.id"
    )
}

impl SqliteStore {
    pub fn tmnt_event_ids(&self, tmnt_id: &str) -> Result<Vec<TypedId>, StoreError> {
        self.ids_under(tmnt_id, IdKind::Tmnt, EVENTS_OF_TMNT, IdKind::Event)
    }

    pub fn tmnt_div_ids(&self, tmnt_id: &str) -> Result<Vec<TypedId>, StoreError> {
        self.ids_under(tmnt_id, IdKind::Tmnt, DIVS_OF_TMNT, IdKind::Div)
    }

    /// tmnt → event → squad
    pub fn tmnt_squad_ids(&self, tmnt_id: &str) -> Result<Vec<TypedId>, StoreError> {
        self.ids_under(tmnt_id, IdKind::Tmnt, SQUADS_OF_TMNT, IdKind::Squad)
    }

    /// tmnt → event → squad → lane
    pub fn tmnt_lane_ids(&self, tmnt_id: &str) -> Result<Vec<TypedId>, StoreError> {
        let sql = squad_children_of_tmnt("lanes", "c.lane_number");
        self.ids_under(tmnt_id, IdKind::Tmnt, &sql, IdKind::Lane)
    }

    /// tmnt → event → squad → pot
    pub fn tmnt_pot_ids(&self, tmnt_id: &str) -> Result<Vec<TypedId>, StoreError> {
        let sql = squad_children_of_tmnt("pots", "c.sort_order");
        self.ids_under(tmnt_id, IdKind::Tmnt, &sql, IdKind::Pot)
    }

    /// tmnt → event → squad → brkt
    pub fn tmnt_brkt_ids(&self, tmnt_id: &str) -> Result<Vec<TypedId>, StoreError> {
        let sql = squad_children_of_tmnt("brkts", "c.sort_order");
        self.ids_under(tmnt_id, IdKind::Tmnt, &sql, IdKind::Brkt)
    }

    /// tmnt → event → squad → elim
    pub fn tmnt_elim_ids(&self, tmnt_id: &str) -> Result<Vec<TypedId>, StoreError> {
        let sql = squad_children_of_tmnt("elims", "c.sort_order");
        self.ids_under(tmnt_id, IdKind::Tmnt, &sql, IdKind::Elim)
    }

    /// tmnt → event → squad → player
    pub fn tmnt_player_ids(&self, tmnt_id: &str) -> Result<Vec<TypedId>, StoreError> {
        let sql = squad_children_of_tmnt("players", "c.last_name");
        self.ids_under(tmnt_id, IdKind::Tmnt, &sql, IdKind::Player)
    }

    /// squad → brkt → one_brkt
    pub fn squad_one_brkt_ids(&self, squad_id: &str) -> Result<Vec<TypedId>, StoreError> {
        self.ids_under(
            squad_id,
            IdKind::Squad,
            "SELECT o.id FROM one_brkts o \
             JOIN brkts b ON b.id = o.brkt_id \
             WHERE b.squad_id=?1 ORDER BY b.sort_order, o.bindex",
            IdKind::OneBrkt,
        )
    }

    fn ids_under(
        &self,
        root_id: &str,
        root_kind: IdKind,
        sql: &str,
        kind: IdKind,
    ) -> Result<Vec<TypedId>, StoreError> {
        if !is_valid_id(root_id, root_kind) {
            return Err(StoreError::UnknownId);
        }
        let mut stmt = self.conn.prepare_cached(sql)?;
        let mut rows = stmt.query(params![root_id])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let id = TypedId::parse(row.get::<_, String>(0)?, kind)
                .map_err(|_| StoreError::InvalidInput("stored id has the wrong kind tag"))?;
            out.push(id);
        }
        Ok(out)
    }
}
