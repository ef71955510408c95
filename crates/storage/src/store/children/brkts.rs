#![forbid(unsafe_code)]

use super::SqliteChildKind;
use crate::store::replace::ChildKind;
use bt_core::ids::IdKind;
use bt_core::model::{Brkt, BrktEntry, BrktSeed, OneBrkt};
use rusqlite::{Row, Statement, params};

pub struct Brkts;

impl ChildKind for Brkts {
    const NAME: &'static str = "brkt";
    const PARENT: IdKind = IdKind::Squad;
    type Record = Brkt;

    fn direct_parent(record: &Brkt) -> Option<&str> {
        Some(&record.squad_id)
    }
}

impl SqliteChildKind for Brkts {
    const DELETE_SQL: &'static str = "DELETE FROM brkts WHERE squad_id=?1";
    const INSERT_SQL: &'static str = "INSERT INTO brkts(id, squad_id, div_id, sort_order, start, games, players, fee, first, second, admin, fsa) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";
    const SELECT_SQL: &'static str = "SELECT id, squad_id, div_id, sort_order, start, games, players, fee, first, second, admin, fsa \
         FROM brkts WHERE squad_id=?1 ORDER BY sort_order ASC, id ASC";

    fn insert_row(stmt: &mut Statement<'_>, b: &Brkt) -> rusqlite::Result<usize> {
        stmt.execute(params![
            b.id,
            b.squad_id,
            b.div_id,
            b.sort_order,
            b.start,
            b.games,
            b.players,
            b.fee,
            b.first,
            b.second,
            b.admin,
            b.fsa,
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Brkt> {
        Ok(Brkt {
            id: row.get(0)?,
            squad_id: row.get(1)?,
            div_id: row.get(2)?,
            sort_order: row.get(3)?,
            start: row.get(4)?,
            games: row.get(5)?,
            players: row.get(6)?,
            fee: row.get(7)?,
            first: row.get(8)?,
            second: row.get(9)?,
            admin: row.get(10)?,
            fsa: row.get(11)?,
        })
    }
}

pub struct OneBrkts;

impl ChildKind for OneBrkts {
    const NAME: &'static str = "one_brkt";
    const PARENT: IdKind = IdKind::Brkt;
    type Record = OneBrkt;

    fn direct_parent(record: &OneBrkt) -> Option<&str> {
        Some(&record.brkt_id)
    }
}

impl SqliteChildKind for OneBrkts {
    const DELETE_SQL: &'static str = "DELETE FROM one_brkts WHERE brkt_id=?1";
    const INSERT_SQL: &'static str =
        "INSERT INTO one_brkts(id, brkt_id, bindex) VALUES (?1, ?2, ?3)";
    const SELECT_SQL: &'static str =
        "SELECT id, brkt_id, bindex FROM one_brkts WHERE brkt_id=?1 ORDER BY bindex ASC";

    fn insert_row(stmt: &mut Statement<'_>, o: &OneBrkt) -> rusqlite::Result<usize> {
        stmt.execute(params![o.id, o.brkt_id, o.bindex])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<OneBrkt> {
        Ok(OneBrkt {
            id: row.get(0)?,
            brkt_id: row.get(1)?,
            bindex: row.get(2)?,
        })
    }
}

/// Seeds of every one-bracket under a brkt.
pub struct BrktSeeds;

impl ChildKind for BrktSeeds {
    const NAME: &'static str = "brkt_seed";
    const PARENT: IdKind = IdKind::Brkt;
    type Record = BrktSeed;

    fn direct_parent(_: &BrktSeed) -> Option<&str> {
        None
    }
}

impl SqliteChildKind for BrktSeeds {
    const DELETE_SQL: &'static str = "DELETE FROM brkt_seeds \
         WHERE one_brkt_id IN (SELECT id FROM one_brkts WHERE brkt_id=?1)";
    const INSERT_SQL: &'static str =
        "INSERT INTO brkt_seeds(one_brkt_id, seed, player_id) VALUES (?1, ?2, ?3)";
    const SELECT_SQL: &'static str = "SELECT s.one_brkt_id, s.seed, s.player_id \
         FROM brkt_seeds s JOIN one_brkts o ON o.id = s.one_brkt_id \
         WHERE o.brkt_id=?1 ORDER BY o.bindex ASC, s.seed ASC";

    fn insert_row(stmt: &mut Statement<'_>, s: &BrktSeed) -> rusqlite::Result<usize> {
        stmt.execute(params![s.one_brkt_id, s.seed, s.player_id])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<BrktSeed> {
        Ok(BrktSeed {
            one_brkt_id: row.get(0)?,
            seed: row.get(1)?,
            player_id: row.get(2)?,
        })
    }
}

/// Bracket entries of every brkt in a squad.
pub struct BrktEntries;

impl ChildKind for BrktEntries {
    const NAME: &'static str = "brkt_entry";
    const PARENT: IdKind = IdKind::Squad;
    type Record = BrktEntry;

    fn direct_parent(_: &BrktEntry) -> Option<&str> {
        None
    }
}

impl SqliteChildKind for BrktEntries {
    const DELETE_SQL: &'static str = "DELETE FROM brkt_entries \
         WHERE brkt_id IN (SELECT id FROM brkts WHERE squad_id=?1)";
    const INSERT_SQL: &'static str = "INSERT INTO brkt_entries(id, brkt_id, player_id, num_brackets, time_stamp) \
         VALUES (?1, ?2, ?3, ?4, ?5)";
    const SELECT_SQL: &'static str = "SELECT e.id, e.brkt_id, e.player_id, e.num_brackets, e.time_stamp \
         FROM brkt_entries e JOIN brkts b ON b.id = e.brkt_id \
         WHERE b.squad_id=?1 ORDER BY b.sort_order ASC, e.time_stamp ASC, e.id ASC";

    fn insert_row(stmt: &mut Statement<'_>, e: &BrktEntry) -> rusqlite::Result<usize> {
        stmt.execute(params![e.id, e.brkt_id, e.player_id, e.num_brackets, e.time_stamp])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<BrktEntry> {
        Ok(BrktEntry {
            id: row.get(0)?,
            brkt_id: row.get(1)?,
            player_id: row.get(2)?,
            num_brackets: row.get(3)?,
            time_stamp: row.get(4)?,
        })
    }
}
