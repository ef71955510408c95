#![forbid(unsafe_code)]
#![allow(dead_code)]

use bt_core::ids::{IdKind, TypedId};
use bt_core::model::{
    Brkt, BrktEntry, Div, Elim, ElimEntry, Event, HdcpFor, Lane, Player, Pot, PotType, Squad,
};
use bt_storage::{NewTmnt, SqliteStore};
use tempfile::TempDir;

pub fn new_id(kind: IdKind) -> String {
    TypedId::generate(kind).into_string()
}

/// An on-disk store holding one tournament with one event, div and squad.
pub struct Fixture {
    _dir: TempDir,
    pub store: SqliteStore,
    pub tmnt_id: String,
    pub event_id: String,
    pub div_id: String,
    pub squad_id: String,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let mut store = SqliteStore::open(dir.path()).expect("open store");
        let tmnt = store
            .create_tmnt(NewTmnt {
                id: None,
                tmnt_name: "Spring Classic".to_string(),
                start_date: "2026-04-01".to_string(),
                end_date: "2026-04-02".to_string(),
                bowl_id: new_id(IdKind::Bowl),
                user_id: new_id(IdKind::User),
            })
            .expect("create tmnt");

        let event = event(&tmnt.id, "Singles", 1);
        store
            .replace_many_events(std::slice::from_ref(&event), &tmnt.id)
            .expect("events");
        let div = div(&tmnt.id, "Scratch", 1);
        store
            .replace_many_divs(std::slice::from_ref(&div), &tmnt.id)
            .expect("divs");
        let squad = squad(&event.id, "Morning", 1);
        store
            .replace_many_squads(std::slice::from_ref(&squad), &event.id)
            .expect("squads");

        Self {
            _dir: dir,
            store,
            tmnt_id: tmnt.id,
            event_id: event.id,
            div_id: div.id,
            squad_id: squad.id,
        }
    }

    /// Seeds `count` players into the fixture squad.
    pub fn players(&mut self, count: usize) -> Vec<Player> {
        let players = (0..count)
            .map(|i| player(&self.squad_id, &format!("Bowler{i:02}")))
            .collect::<Vec<_>>();
        self.store
            .replace_many_players(&players, &self.squad_id)
            .expect("players");
        players
    }

    pub fn brkt(&mut self, players: i64, fee: f64) -> Brkt {
        let brkt = brkt(&self.squad_id, &self.div_id, players, fee);
        self.store
            .replace_many_brkts(std::slice::from_ref(&brkt), &self.squad_id)
            .expect("brkts");
        brkt
    }
}

pub fn event(tmnt_id: &str, name: &str, sort_order: i64) -> Event {
    Event {
        id: new_id(IdKind::Event),
        tmnt_id: tmnt_id.to_string(),
        event_name: name.to_string(),
        team_size: 1,
        games: 3,
        entry_fee: 80.0,
        lineage: 18.0,
        prize_fund: 55.0,
        other: 2.0,
        expenses: 5.0,
        added_money: 0.0,
        sort_order,
    }
}

pub fn div(tmnt_id: &str, name: &str, sort_order: i64) -> Div {
    Div {
        id: new_id(IdKind::Div),
        tmnt_id: tmnt_id.to_string(),
        div_name: name.to_string(),
        hdcp_per: 0.0,
        hdcp_from: 230,
        int_hdcp: true,
        hdcp_for: HdcpFor::Game,
        sort_order,
    }
}

pub fn squad(event_id: &str, name: &str, sort_order: i64) -> Squad {
    Squad {
        id: new_id(IdKind::Squad),
        event_id: event_id.to_string(),
        squad_name: name.to_string(),
        games: 3,
        lane_count: 12,
        starting_lane: 1,
        squad_date: "2026-04-01".to_string(),
        squad_time: Some("10:00".to_string()),
        sort_order,
    }
}

pub fn lane(squad_id: &str, lane_number: i64) -> Lane {
    Lane {
        id: new_id(IdKind::Lane),
        squad_id: squad_id.to_string(),
        lane_number,
        in_use: true,
    }
}

pub fn pot(squad_id: &str, div_id: &str, pot_type: PotType, sort_order: i64) -> Pot {
    Pot {
        id: new_id(IdKind::Pot),
        squad_id: squad_id.to_string(),
        div_id: div_id.to_string(),
        sort_order,
        fee: 20.0,
        pot_type,
    }
}

pub fn player(squad_id: &str, last_name: &str) -> Player {
    Player {
        id: new_id(IdKind::Player),
        squad_id: squad_id.to_string(),
        first_name: "Pat".to_string(),
        last_name: last_name.to_string(),
        average: 190,
        lane: None,
        position: None,
    }
}

pub fn brkt(squad_id: &str, div_id: &str, players: i64, fee: f64) -> Brkt {
    let first = fee * players as f64 * 0.625;
    let second = fee * players as f64 * 0.25;
    Brkt {
        id: new_id(IdKind::Brkt),
        squad_id: squad_id.to_string(),
        div_id: div_id.to_string(),
        sort_order: 1,
        start: 1,
        games: 3,
        players,
        fee,
        first,
        second,
        admin: fee * players as f64 - first - second,
        fsa: fee * players as f64,
    }
}

pub fn brkt_entry(brkt_id: &str, player_id: &str, num_brackets: i64, time_stamp: i64) -> BrktEntry {
    BrktEntry {
        id: new_id(IdKind::BrktEntry),
        brkt_id: brkt_id.to_string(),
        player_id: player_id.to_string(),
        num_brackets,
        time_stamp,
    }
}

pub fn elim(squad_id: &str, div_id: &str, start: i64) -> Elim {
    Elim {
        id: new_id(IdKind::Elim),
        squad_id: squad_id.to_string(),
        div_id: div_id.to_string(),
        sort_order: start,
        start,
        games: 3,
        fee: 5.0,
    }
}

pub fn elim_entry(elim_id: &str, player_id: &str) -> ElimEntry {
    ElimEntry {
        id: new_id(IdKind::ElimEntry),
        elim_id: elim_id.to_string(),
        player_id: player_id.to_string(),
        fee: 5.0,
    }
}
