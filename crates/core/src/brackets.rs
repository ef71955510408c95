#![forbid(unsafe_code)]

//! Bracket draw: places bracket entrants into one-brackets and orders seeds.
//!
//! Every entrant lands in exactly as many distinct one-brackets as they
//! entered. Entrants with more brackets are placed first; each goes into the
//! currently smallest brackets. Open slots are byes.

use crate::ids::{IdKind, TypedId};
use crate::model::{BrktSeed, OneBrkt};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketEntrant {
    pub player_id: String,
    pub num_brackets: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OneBracketDraw {
    pub bindex: usize,
    /// One slot per seed position; `None` is a bye.
    pub seeds: Vec<Option<String>>,
}

impl OneBracketDraw {
    pub fn is_full(&self) -> bool {
        self.seeds.iter().all(Option::is_some)
    }

    pub fn player_count(&self) -> usize {
        self.seeds.iter().flatten().count()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BracketDraw {
    pub brackets: Vec<OneBracketDraw>,
}

impl BracketDraw {
    pub fn full_count(&self) -> usize {
        self.brackets.iter().filter(|b| b.is_full()).count()
    }

    /// Rows for persisting the draw under `brkt_id`. Byes produce no seed row.
    pub fn to_records(&self, brkt_id: &str) -> (Vec<OneBrkt>, Vec<BrktSeed>) {
        let mut one_brkts = Vec::with_capacity(self.brackets.len());
        let mut seeds = Vec::new();
        for bracket in &self.brackets {
            let one_brkt_id = TypedId::generate(IdKind::OneBrkt).into_string();
            for (seed, player_id) in bracket.seeds.iter().enumerate() {
                if let Some(player_id) = player_id {
                    seeds.push(BrktSeed {
                        one_brkt_id: one_brkt_id.clone(),
                        seed: seed as i64,
                        player_id: player_id.clone(),
                    });
                }
            }
            one_brkts.push(OneBrkt {
                id: one_brkt_id,
                brkt_id: brkt_id.to_string(),
                bindex: bracket.bindex as i64,
            });
        }
        (one_brkts, seeds)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    #[error("players per bracket must be positive")]
    ZeroPlayers,
    #[error("player {0} is entered more than once")]
    DuplicatePlayer(String),
    #[error(
        "player {player_id} needs {num_brackets} brackets but only {available} have open slots"
    )]
    Overfilled {
        player_id: String,
        num_brackets: usize,
        available: usize,
    },
}

pub fn draw_brackets<R: Rng + ?Sized>(
    entrants: &[BracketEntrant],
    players_per_bracket: usize,
    rng: &mut R,
) -> Result<BracketDraw, DrawError> {
    if players_per_bracket == 0 {
        return Err(DrawError::ZeroPlayers);
    }

    let mut seen = HashSet::new();
    for entrant in entrants {
        if !seen.insert(entrant.player_id.as_str()) {
            return Err(DrawError::DuplicatePlayer(entrant.player_id.clone()));
        }
    }

    let mut order = entrants
        .iter()
        .filter(|e| e.num_brackets > 0)
        .collect::<Vec<_>>();
    let bracket_count = order.iter().map(|e| e.num_brackets).max().unwrap_or(0);
    if bracket_count == 0 {
        return Ok(BracketDraw::default());
    }

    order.shuffle(rng);
    order.sort_by(|a, b| b.num_brackets.cmp(&a.num_brackets));

    let mut members: Vec<Vec<String>> = vec![Vec::new(); bracket_count];
    for entrant in order {
        let mut open = (0..bracket_count)
            .filter(|&i| members[i].len() < players_per_bracket)
            .collect::<Vec<_>>();
        if open.len() < entrant.num_brackets {
            return Err(DrawError::Overfilled {
                player_id: entrant.player_id.clone(),
                num_brackets: entrant.num_brackets,
                available: open.len(),
            });
        }
        open.sort_by_key(|&i| (members[i].len(), i));
        for &i in open.iter().take(entrant.num_brackets) {
            members[i].push(entrant.player_id.clone());
        }
    }

    let brackets = members
        .into_iter()
        .enumerate()
        .map(|(bindex, players)| {
            let mut seeds = players.into_iter().map(Some).collect::<Vec<_>>();
            seeds.resize(players_per_bracket, None);
            seeds.shuffle(rng);
            OneBracketDraw { bindex, seeds }
        })
        .collect();

    Ok(BracketDraw { brackets })
}
