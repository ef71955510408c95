#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tmnt {
    pub id: String,
    pub tmnt_name: String,
    pub start_date: String,
    pub end_date: String,
    pub bowl_id: String,
    pub user_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub tmnt_id: String,
    pub event_name: String,
    pub team_size: i64,
    pub games: i64,
    pub entry_fee: f64,
    pub lineage: f64,
    pub prize_fund: f64,
    pub other: f64,
    pub expenses: f64,
    pub added_money: f64,
    pub sort_order: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HdcpFor {
    Game,
    Series,
}

impl HdcpFor {
    pub fn as_str(self) -> &'static str {
        match self {
            HdcpFor::Game => "Game",
            HdcpFor::Series => "Series",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Game" => Some(HdcpFor::Game),
            "Series" => Some(HdcpFor::Series),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Div {
    pub id: String,
    pub tmnt_id: String,
    pub div_name: String,
    /// Handicap percentage as a fraction (0.9 for 90%).
    pub hdcp_per: f64,
    pub hdcp_from: i64,
    pub int_hdcp: bool,
    pub hdcp_for: HdcpFor,
    pub sort_order: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    pub id: String,
    pub event_id: String,
    pub squad_name: String,
    pub games: i64,
    pub lane_count: i64,
    pub starting_lane: i64,
    pub squad_date: String,
    pub squad_time: Option<String>,
    pub sort_order: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub id: String,
    pub squad_id: String,
    pub lane_number: i64,
    pub in_use: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PotType {
    Game,
    #[serde(rename = "Last Game")]
    LastGame,
    Series,
}

impl PotType {
    pub fn as_str(self) -> &'static str {
        match self {
            PotType::Game => "Game",
            PotType::LastGame => "Last Game",
            PotType::Series => "Series",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Game" => Some(PotType::Game),
            "Last Game" => Some(PotType::LastGame),
            "Series" => Some(PotType::Series),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pot {
    pub id: String,
    pub squad_id: String,
    pub div_id: String,
    pub sort_order: i64,
    pub fee: f64,
    pub pot_type: PotType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Brkt {
    pub id: String,
    pub squad_id: String,
    pub div_id: String,
    pub sort_order: i64,
    /// First game of the bracket within the squad.
    pub start: i64,
    pub games: i64,
    pub players: i64,
    pub fee: f64,
    pub first: f64,
    pub second: f64,
    pub admin: f64,
    pub fsa: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneBrkt {
    pub id: String,
    pub brkt_id: String,
    pub bindex: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrktSeed {
    pub one_brkt_id: String,
    pub seed: i64,
    pub player_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrktEntry {
    pub id: String,
    pub brkt_id: String,
    pub player_id: String,
    pub num_brackets: i64,
    pub time_stamp: i64,
}

/// Bracket entry as returned by read paths, with the fee derived from the
/// number of brackets entered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrktEntryWithFee {
    #[serde(flatten)]
    pub entry: BrktEntry,
    pub fee: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Elim {
    pub id: String,
    pub squad_id: String,
    pub div_id: String,
    pub sort_order: i64,
    pub start: i64,
    pub games: i64,
    pub fee: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElimEntry {
    pub id: String,
    pub elim_id: String,
    pub player_id: String,
    pub fee: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub squad_id: String,
    pub first_name: String,
    pub last_name: String,
    pub average: i64,
    pub lane: Option<i64>,
    pub position: Option<String>,
}
