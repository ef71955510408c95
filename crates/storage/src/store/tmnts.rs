#![forbid(unsafe_code)]

use super::support::now_ms;
use super::{SqliteStore, StoreError};
use bt_core::ids::{IdKind, TypedId, is_valid_id};
use bt_core::model::Tmnt;
use rusqlite::{OptionalExtension, TransactionBehavior, params};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewTmnt {
    /// Caller-chosen id; a fresh one is generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    pub tmnt_name: String,
    pub start_date: String,
    pub end_date: String,
    pub bowl_id: String,
    pub user_id: String,
}

impl SqliteStore {
    pub fn create_tmnt(&mut self, request: NewTmnt) -> Result<Tmnt, StoreError> {
        let id = match request.id {
            Some(id) if is_valid_id(&id, IdKind::Tmnt) => id,
            Some(_) => return Err(StoreError::InvalidInput("invalid tmnt id")),
            None => TypedId::generate(IdKind::Tmnt).into_string(),
        };
        let tmnt_name = request.tmnt_name.trim().to_string();
        if tmnt_name.is_empty() {
            return Err(StoreError::InvalidInput("tmnt_name must not be empty"));
        }
        if !is_valid_id(&request.bowl_id, IdKind::Bowl) {
            return Err(StoreError::InvalidInput("invalid bowl id"));
        }
        if !is_valid_id(&request.user_id, IdKind::User) {
            return Err(StoreError::InvalidInput("invalid user id"));
        }
        if request.start_date.is_empty() || request.end_date.is_empty() {
            return Err(StoreError::InvalidInput("tmnt dates must not be empty"));
        }
        if request.end_date < request.start_date {
            return Err(StoreError::InvalidInput("end_date must not precede start_date"));
        }

        let tmnt = Tmnt {
            id,
            tmnt_name,
            start_date: request.start_date,
            end_date: request.end_date,
            bowl_id: request.bowl_id,
            user_id: request.user_id,
        };
        let now_ms = now_ms();
        self.conn.execute(
            "INSERT INTO tmnts(id, tmnt_name, start_date, end_date, bowl_id, user_id, created_at_ms, updated_at_ms) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
            params![
                tmnt.id,
                tmnt.tmnt_name,
                tmnt.start_date,
                tmnt.end_date,
                tmnt.bowl_id,
                tmnt.user_id,
                now_ms,
            ],
        )?;
        tracing::info!(tmnt_id = %tmnt.id, "tmnt created");
        Ok(tmnt)
    }

    pub fn get_tmnt(&self, tmnt_id: &str) -> Result<Option<Tmnt>, StoreError> {
        if !is_valid_id(tmnt_id, IdKind::Tmnt) {
            return Ok(None);
        }
        Ok(self
            .conn
            .query_row(
                "SELECT id, tmnt_name, start_date, end_date, bowl_id, user_id FROM tmnts WHERE id=?1",
                params![tmnt_id],
                |row| {
                    Ok(Tmnt {
                        id: row.get(0)?,
                        tmnt_name: row.get(1)?,
                        start_date: row.get(2)?,
                        end_date: row.get(3)?,
                        bowl_id: row.get(4)?,
                        user_id: row.get(5)?,
                    })
                },
            )
            .optional()?)
    }

    /// Deletes the tournament and everything under it in one transaction.
    pub fn delete_tmnt(&mut self, tmnt_id: &str) -> Result<(), StoreError> {
        if !is_valid_id(tmnt_id, IdKind::Tmnt) {
            return Err(StoreError::UnknownId);
        }
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let mut removed = 0usize;
        for sql in DELETE_TMNT_TREE {
            removed += tx.execute(sql, params![tmnt_id])?;
        }
        let deleted = tx.execute("DELETE FROM tmnts WHERE id=?1", params![tmnt_id])?;
        if deleted == 0 {
            return Err(StoreError::UnknownId);
        }
        tx.commit()?;
        tracing::info!(tmnt_id, descendants = removed, "tmnt deleted");
        Ok(())
    }
}

/// Descendant deletes, leaves first, so every subquery still sees its parents.
const DELETE_TMNT_TREE: [&str; 12] = [
    "DELETE FROM brkt_seeds WHERE one_brkt_id IN (SELECT o.id FROM one_brkts o \
     JOIN brkts b ON b.id = o.brkt_id JOIN squads s ON s.id = b.squad_id \
     JOIN events e ON e.id = s.event_id WHERE e.tmnt_id=?1)",
    "DELETE FROM one_brkts WHERE brkt_id IN (SELECT b.id FROM brkts b \
     JOIN squads s ON s.id = b.squad_id JOIN events e ON e.id = s.event_id WHERE e.tmnt_id=?1)",
    "DELETE FROM brkt_entries WHERE brkt_id IN (SELECT b.id FROM brkts b \
     JOIN squads s ON s.id = b.squad_id JOIN events e ON e.id = s.event_id WHERE e.tmnt_id=?1)",
    "DELETE FROM elim_entries WHERE elim_id IN (SELECT l.id FROM elims l \
     JOIN squads s ON s.id = l.squad_id JOIN events e ON e.id = s.event_id WHERE e.tmnt_id=?1)",
    "DELETE FROM brkts WHERE squad_id IN (SELECT s.id FROM squads s \
     JOIN events e ON e.id = s.event_id WHERE e.tmnt_id=?1)",
    "DELETE FROM elims WHERE squad_id IN (SELECT s.id FROM squads s \
     JOIN events e ON e.id = s.event_id WHERE e.tmnt_id=?1)",
    "DELETE FROM pots WHERE squad_id IN (SELECT s.id FROM squads s \
     JOIN events e ON e.id = s.event_id WHERE e.tmnt_id=?1)",
    "DELETE FROM lanes WHERE squad_id IN (SELECT s.id FROM squads s \
     JOIN events e ON e.id = s.event_id WHERE e.tmnt_id=?1)",
    "DELETE FROM players WHERE squad_id IN (SELECT s.id FROM squads s \
     JOIN events e ON e.id = s.event_id WHERE e.tmnt_id=?1)",
    "DELETE FROM squads WHERE event_id IN (SELECT id FROM events WHERE tmnt_id=?1)",
    "DELETE FROM events WHERE tmnt_id=?1",
    "DELETE FROM divs WHERE tmnt_id=?1",
];
