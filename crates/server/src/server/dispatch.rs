#![forbid(unsafe_code)]

use super::children::ChildOp;
use super::{Server, ServerError};
use crate::support::{optional_u64, raw, require_str};
use bt_core::brackets::draw_brackets;
use bt_core::fees::{entry_fee_value, fsa_total_value};
use bt_core::ids::TypedId;
use bt_core::status::classify_value;
use bt_storage::NewTmnt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};

impl Server {
    pub(super) fn dispatch(&mut self, method: &str, params: &Value) -> Result<Value, ServerError> {
        match method {
            "ping" => Ok(json!({ "pong": true, "version": crate::SERVER_VERSION })),
            "create_tmnt" => {
                let request = serde_json::from_value::<NewTmnt>(params.clone())
                    .map_err(|err| ServerError::BadRequest(format!("invalid tmnt: {err}")))?;
                let tmnt = self.store.create_tmnt(request)?;
                Ok(serde_json::to_value(tmnt)?)
            }
            "get_tmnt" => {
                let tmnt_id = require_str(params, "tmnt_id")?;
                let tmnt = self
                    .store
                    .get_tmnt(tmnt_id)?
                    .ok_or(ServerError::NotFound("tmnt"))?;
                Ok(serde_json::to_value(tmnt)?)
            }
            "delete_tmnt" => {
                let tmnt_id = require_str(params, "tmnt_id")?;
                self.store.delete_tmnt(tmnt_id)?;
                Ok(json!({ "deleted": tmnt_id }))
            }
            "ancestry" => self.ancestry(params),
            "list_brkt_entries_with_fee" => {
                let squad_id = require_str(params, "squad_id")?;
                let entries = self.store.list_brkt_entries_with_fee(squad_id)?;
                Ok(json!({ "records": serde_json::to_value(entries)? }))
            }
            "draw_brackets" => self.draw_brackets(params),
            "entry_fee" => Ok(json!({
                "fee": entry_fee_value(raw(params, "count"), raw(params, "unit_fee")),
            })),
            "fsa_total" => Ok(json!({
                "fsa": fsa_total_value(
                    raw(params, "first"),
                    raw(params, "second"),
                    raw(params, "admin"),
                ),
            })),
            "classify" => {
                let kind = classify_value(raw(params, "code"));
                Ok(json!({ "kind": kind, "status": kind.http_status() }))
            }
            _ => {
                let routed = if let Some(plural) = method.strip_prefix("replace_") {
                    self.child_op(ChildOp::Replace, plural, params)
                } else if let Some(plural) = method.strip_prefix("list_") {
                    self.child_op(ChildOp::List, plural, params)
                } else {
                    None
                };
                routed.unwrap_or_else(|| Err(ServerError::UnknownMethod(method.to_string())))
            }
        }
    }

    fn ancestry(&self, params: &Value) -> Result<Value, ServerError> {
        let tmnt_id = require_str(params, "tmnt_id")?;
        let of = require_str(params, "of")?;
        let store = &self.store;
        let ids: Vec<TypedId> = match of {
            "events" => store.tmnt_event_ids(tmnt_id)?,
            "divs" => store.tmnt_div_ids(tmnt_id)?,
            "squads" => store.tmnt_squad_ids(tmnt_id)?,
            "lanes" => store.tmnt_lane_ids(tmnt_id)?,
            "pots" => store.tmnt_pot_ids(tmnt_id)?,
            "brkts" => store.tmnt_brkt_ids(tmnt_id)?,
            "elims" => store.tmnt_elim_ids(tmnt_id)?,
            "players" => store.tmnt_player_ids(tmnt_id)?,
            other => {
                return Err(ServerError::BadRequest(format!(
                    "unsupported ancestry target: {other}"
                )));
            }
        };
        Ok(json!({ "ids": serde_json::to_value(ids)? }))
    }

    fn draw_brackets(&mut self, params: &Value) -> Result<Value, ServerError> {
        let brkt_id = require_str(params, "brkt_id")?;
        let mut rng = match optional_u64(params, "seed")? {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let (entrants, players_per_bracket) = self.store.bracket_entrants(brkt_id)?;
        let draw = draw_brackets(&entrants, players_per_bracket, &mut rng)?;
        let applied = self.store.apply_bracket_draw(brkt_id, &draw)?;
        Ok(json!({
            "one_brkts": applied.one_brkts,
            "seeds": applied.seeds,
            "full": draw.full_count(),
            "brackets": serde_json::to_value(&draw.brackets)?,
        }))
    }
}
