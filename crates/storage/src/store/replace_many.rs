#![forbid(unsafe_code)]

use super::children::*;
use super::replace::{ChildKind, ReplaceError, ReplacePhase, replace_children};
use super::{SqliteStore, StoreError};
use bt_core::ids::is_valid_id;
use bt_core::model::{
    Brkt, BrktEntry, BrktSeed, Div, Elim, ElimEntry, Event, Lane, OneBrkt, Player, Pot, Squad,
};
use rusqlite::{Connection, TransactionBehavior};
use std::slice;

impl SqliteStore {
    /// Replaces every `K` child of `parent_id` with `desired` in one transaction.
    ///
    /// On any failure the transaction rolls back and the previous children stay in place.
    pub fn replace_many<K: SqliteChildKind>(
        &mut self,
        parent_id: &str,
        desired: &[K::Record],
    ) -> Result<usize, ReplaceError> {
        if !is_valid_id(parent_id, K::PARENT) {
            return Err(ReplaceError::InvalidParent {
                expected: K::PARENT,
                parent_id: parent_id.to_string(),
            });
        }

        let result = self.replace_many_tx::<K>(parent_id, desired);
        match &result {
            Ok(count) => tracing::info!(kind = K::NAME, parent_id, count, "children replaced"),
            Err(err) => tracing::warn!(
                kind = K::NAME,
                parent_id,
                status = ?err.status(),
                insert_attempted = err.insert_attempted(),
                error = %err,
                "replace failed, rolled back"
            ),
        }
        result
    }

    fn replace_many_tx<K: SqliteChildKind>(
        &mut self,
        parent_id: &str,
        desired: &[K::Record],
    ) -> Result<usize, ReplaceError> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|err| ReplaceError::failed::<K>(ReplacePhase::Delete, err.into()))?;
        let inserted = replace_within::<K>(&tx, parent_id, desired)?;
        tx.commit()
            .map_err(|err| ReplaceError::failed::<K>(ReplacePhase::Commit, err.into()))?;
        Ok(inserted)
    }

    /// Single insert outside of a set replacement.
    pub fn insert_child<K: SqliteChildKind>(
        &mut self,
        record: &K::Record,
    ) -> Result<(), StoreError> {
        use super::replace::ChildSetRepository;

        let mut repo = SqliteChildSet::<K>::new(&self.conn);
        repo.insert_many(slice::from_ref(record))?;
        Ok(())
    }

    pub fn list_children<K: SqliteChildKind>(
        &self,
        parent_id: &str,
    ) -> Result<Vec<K::Record>, StoreError> {
        if !is_valid_id(parent_id, K::PARENT) {
            return Err(StoreError::UnknownId);
        }
        SqliteChildSet::<K>::new(&self.conn).list(parent_id)
    }

    pub fn replace_many_events(
        &mut self,
        events: &[Event],
        tmnt_id: &str,
    ) -> Result<usize, ReplaceError> {
        self.replace_many::<Events>(tmnt_id, events)
    }

    pub fn replace_many_divs(
        &mut self,
        divs: &[Div],
        tmnt_id: &str,
    ) -> Result<usize, ReplaceError> {
        self.replace_many::<Divs>(tmnt_id, divs)
    }

    pub fn replace_many_squads(
        &mut self,
        squads: &[Squad],
        event_id: &str,
    ) -> Result<usize, ReplaceError> {
        self.replace_many::<Squads>(event_id, squads)
    }

    pub fn replace_many_lanes(
        &mut self,
        lanes: &[Lane],
        squad_id: &str,
    ) -> Result<usize, ReplaceError> {
        self.replace_many::<Lanes>(squad_id, lanes)
    }

    pub fn replace_many_pots(
        &mut self,
        pots: &[Pot],
        squad_id: &str,
    ) -> Result<usize, ReplaceError> {
        self.replace_many::<Pots>(squad_id, pots)
    }

    pub fn replace_many_brkts(
        &mut self,
        brkts: &[Brkt],
        squad_id: &str,
    ) -> Result<usize, ReplaceError> {
        self.replace_many::<Brkts>(squad_id, brkts)
    }

    pub fn replace_many_one_brkts(
        &mut self,
        one_brkts: &[OneBrkt],
        brkt_id: &str,
    ) -> Result<usize, ReplaceError> {
        self.replace_many::<OneBrkts>(brkt_id, one_brkts)
    }

    pub fn replace_many_brkt_seeds(
        &mut self,
        seeds: &[BrktSeed],
        brkt_id: &str,
    ) -> Result<usize, ReplaceError> {
        self.replace_many::<BrktSeeds>(brkt_id, seeds)
    }

    pub fn replace_many_brkt_entries(
        &mut self,
        entries: &[BrktEntry],
        squad_id: &str,
    ) -> Result<usize, ReplaceError> {
        self.replace_many::<BrktEntries>(squad_id, entries)
    }

    pub fn replace_many_elims(
        &mut self,
        elims: &[Elim],
        squad_id: &str,
    ) -> Result<usize, ReplaceError> {
        self.replace_many::<Elims>(squad_id, elims)
    }

    pub fn replace_many_elim_entries(
        &mut self,
        entries: &[ElimEntry],
        squad_id: &str,
    ) -> Result<usize, ReplaceError> {
        self.replace_many::<ElimEntries>(squad_id, entries)
    }

    pub fn replace_many_players(
        &mut self,
        players: &[Player],
        squad_id: &str,
    ) -> Result<usize, ReplaceError> {
        self.replace_many::<Players>(squad_id, players)
    }
}

/// Runs the replace on an already open transaction and checks that every
/// inserted record landed under `parent_id`.
pub(super) fn replace_within<K: SqliteChildKind>(
    conn: &Connection,
    parent_id: &str,
    desired: &[K::Record],
) -> Result<usize, ReplaceError> {
    let mut repo = SqliteChildSet::<K>::new(conn);
    let inserted = replace_children::<K, _>(&mut repo, parent_id, desired)?;

    let in_scope = repo
        .list(parent_id)
        .map_err(|err| ReplaceError::failed::<K>(ReplacePhase::Insert, err))?
        .len();
    if in_scope != inserted {
        return Err(ReplaceError::OutOfScope {
            kind: <K as ChildKind>::NAME,
            parent_id: parent_id.to_string(),
            stray: inserted.saturating_sub(in_scope),
        });
    }
    Ok(inserted)
}
