#![forbid(unsafe_code)]

use super::children::{BrktSeeds, OneBrkts, SqliteChildSet};
use super::replace::{ChildSetRepository, ReplaceError, ReplacePhase};
use super::replace_many::replace_within;
use super::{SqliteStore, StoreError};
use bt_core::brackets::{BracketDraw, BracketEntrant};
use bt_core::fees::entry_fee;
use bt_core::ids::{IdKind, is_valid_id};
use bt_core::model::{BrktEntry, BrktEntryWithFee};
use rusqlite::{OptionalExtension, TransactionBehavior, params};
use serde::Serialize;

/// Row counts written by [`SqliteStore::apply_bracket_draw`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AppliedDraw {
    pub one_brkts: usize,
    pub seeds: usize,
}

impl SqliteStore {
    /// Bracket entries of a squad with the fee each player owes for them.
    pub fn list_brkt_entries_with_fee(
        &self,
        squad_id: &str,
    ) -> Result<Vec<BrktEntryWithFee>, StoreError> {
        if !is_valid_id(squad_id, IdKind::Squad) {
            return Err(StoreError::UnknownId);
        }
        let mut stmt = self.conn.prepare_cached(
            "SELECT e.id, e.brkt_id, e.player_id, e.num_brackets, e.time_stamp, b.fee \
             FROM brkt_entries e JOIN brkts b ON b.id = e.brkt_id \
             WHERE b.squad_id=?1 ORDER BY b.sort_order ASC, e.time_stamp ASC, e.id ASC",
        )?;
        let rows = stmt.query_map(params![squad_id], |row| {
            let entry = BrktEntry {
                id: row.get(0)?,
                brkt_id: row.get(1)?,
                player_id: row.get(2)?,
                num_brackets: row.get(3)?,
                time_stamp: row.get(4)?,
            };
            let unit_fee = row.get::<_, f64>(5)?;
            let fee = entry_fee(Some(entry.num_brackets as f64), Some(unit_fee));
            Ok(BrktEntryWithFee { entry, fee })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Draw input for a brkt: its entrants and the bracket size.
    pub fn bracket_entrants(
        &self,
        brkt_id: &str,
    ) -> Result<(Vec<BracketEntrant>, usize), StoreError> {
        if !is_valid_id(brkt_id, IdKind::Brkt) {
            return Err(StoreError::UnknownId);
        }
        let players = self
            .conn
            .query_row(
                "SELECT players FROM brkts WHERE id=?1",
                params![brkt_id],
                |row| row.get::<_, i64>(0),
            )
            .optional()?
            .ok_or(StoreError::UnknownId)?;
        let players_per_bracket = usize::try_from(players)
            .map_err(|_| StoreError::InvalidInput("brkt players must not be negative"))?;

        let mut stmt = self.conn.prepare_cached(
            "SELECT player_id, num_brackets FROM brkt_entries \
             WHERE brkt_id=?1 ORDER BY time_stamp ASC, id ASC",
        )?;
        let mut rows = stmt.query(params![brkt_id])?;
        let mut entrants = Vec::new();
        while let Some(row) = rows.next()? {
            let num_brackets = usize::try_from(row.get::<_, i64>(1)?)
                .map_err(|_| StoreError::InvalidInput("num_brackets must not be negative"))?;
            entrants.push(BracketEntrant {
                player_id: row.get(0)?,
                num_brackets,
            });
        }
        Ok((entrants, players_per_bracket))
    }

    /// Replaces the one-brackets and seeds of `brkt_id` with `draw` under one commit.
    pub fn apply_bracket_draw(
        &mut self,
        brkt_id: &str,
        draw: &BracketDraw,
    ) -> Result<AppliedDraw, ReplaceError> {
        if !is_valid_id(brkt_id, IdKind::Brkt) {
            return Err(ReplaceError::InvalidParent {
                expected: IdKind::Brkt,
                parent_id: brkt_id.to_string(),
            });
        }
        let (one_brkts, seeds) = draw.to_records(brkt_id);

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|err| ReplaceError::failed::<OneBrkts>(ReplacePhase::Delete, err.into()))?;
        // Old seeds hang off the old one-brackets and must go before them.
        SqliteChildSet::<BrktSeeds>::new(&tx)
            .delete_all_for_parent(brkt_id)
            .map_err(|err| ReplaceError::failed::<BrktSeeds>(ReplacePhase::Delete, err))?;
        let applied = AppliedDraw {
            one_brkts: replace_within::<OneBrkts>(&tx, brkt_id, &one_brkts)?,
            seeds: replace_within::<BrktSeeds>(&tx, brkt_id, &seeds)?,
        };
        tx.commit().map_err(|err| {
            ReplaceError::failed::<BrktSeeds>(ReplacePhase::Commit, err.into())
        })?;

        tracing::info!(
            brkt_id,
            one_brkts = applied.one_brkts,
            seeds = applied.seeds,
            full = draw.full_count(),
            "bracket draw applied"
        );
        Ok(applied)
    }
}
