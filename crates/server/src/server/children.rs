#![forbid(unsafe_code)]

use super::{Server, ServerError};
use crate::support::{require_json, require_str};
use bt_storage::{
    BrktEntries, BrktSeeds, Brkts, Divs, ElimEntries, Elims, Events, Lanes, OneBrkts, Players,
    Pots, SqliteChildKind, SqliteStore, Squads,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ChildOp {
    Replace,
    List,
}

impl Server {
    /// `None` when `plural` names no child kind.
    pub(super) fn child_op(
        &mut self,
        op: ChildOp,
        plural: &str,
        params: &Value,
    ) -> Option<Result<Value, ServerError>> {
        let store = &mut self.store;
        Some(match plural {
            "events" => run::<Events>(store, op, params),
            "divs" => run::<Divs>(store, op, params),
            "squads" => run::<Squads>(store, op, params),
            "lanes" => run::<Lanes>(store, op, params),
            "pots" => run::<Pots>(store, op, params),
            "brkts" => run::<Brkts>(store, op, params),
            "one_brkts" => run::<OneBrkts>(store, op, params),
            "brkt_seeds" => run::<BrktSeeds>(store, op, params),
            "brkt_entries" => run::<BrktEntries>(store, op, params),
            "elims" => run::<Elims>(store, op, params),
            "elim_entries" => run::<ElimEntries>(store, op, params),
            "players" => run::<Players>(store, op, params),
            _ => return None,
        })
    }
}

fn run<K>(store: &mut SqliteStore, op: ChildOp, params: &Value) -> Result<Value, ServerError>
where
    K: SqliteChildKind,
    K::Record: Serialize + DeserializeOwned,
{
    let parent_id = require_str(params, "parent_id")?;
    match op {
        ChildOp::Replace => {
            let records = require_json::<Vec<K::Record>>(params, "records")?;
            let count = store.replace_many::<K>(parent_id, &records)?;
            Ok(json!({ "count": count }))
        }
        ChildOp::List => {
            let records = store.list_children::<K>(parent_id)?;
            Ok(json!({ "records": serde_json::to_value(records)? }))
        }
    }
}
