use super::*;
use bt_core::ids::{IdKind, TypedId};
use tempfile::TempDir;

fn server() -> (TempDir, Server) {
    let dir = TempDir::new().expect("temp dir");
    let store = SqliteStore::open(dir.path()).expect("open store");
    (dir, Server::new(store))
}

fn id(kind: IdKind) -> String {
    TypedId::generate(kind).into_string()
}

fn call(server: &mut Server, method: &str, params: Value) -> Value {
    server.handle(json!({ "id": 7, "method": method, "params": params }))
}

fn status(resp: &Value) -> u64 {
    resp["status"].as_u64().expect("status")
}

/// Tournament with one event, div and squad; returns (tmnt, event, div, squad).
fn seed_tree(server: &mut Server) -> (String, String, String, String) {
    let created = call(
        server,
        "create_tmnt",
        json!({
            "tmnt_name": "Fall Open",
            "start_date": "2026-10-01",
            "end_date": "2026-10-02",
            "bowl_id": id(IdKind::Bowl),
            "user_id": id(IdKind::User),
        }),
    );
    assert_eq!(status(&created), 200, "{created}");
    let tmnt_id = created["body"]["id"].as_str().expect("tmnt id").to_string();

    let event_id = id(IdKind::Event);
    let resp = call(
        server,
        "replace_events",
        json!({
            "parent_id": tmnt_id,
            "records": [{
                "id": event_id, "tmnt_id": tmnt_id, "event_name": "Singles",
                "team_size": 1, "games": 3, "entry_fee": 80, "lineage": 18,
                "prize_fund": 55, "other": 2, "expenses": 5, "added_money": 0,
                "sort_order": 1
            }]
        }),
    );
    assert_eq!(resp["body"]["count"], 1, "{resp}");

    let div_id = id(IdKind::Div);
    let resp = call(
        server,
        "replace_divs",
        json!({
            "parent_id": tmnt_id,
            "records": [{
                "id": div_id, "tmnt_id": tmnt_id, "div_name": "Scratch",
                "hdcp_per": 0, "hdcp_from": 230, "int_hdcp": true,
                "hdcp_for": "Game", "sort_order": 1
            }]
        }),
    );
    assert_eq!(status(&resp), 200, "{resp}");

    let squad_id = id(IdKind::Squad);
    let resp = call(
        server,
        "replace_squads",
        json!({
            "parent_id": event_id,
            "records": [{
                "id": squad_id, "event_id": event_id, "squad_name": "A",
                "games": 3, "lane_count": 4, "starting_lane": 1,
                "squad_date": "2026-10-01", "sort_order": 1
            }]
        }),
    );
    assert_eq!(status(&resp), 200, "{resp}");

    (tmnt_id, event_id, div_id, squad_id)
}

fn lanes(squad_id: &str, numbers: &[i64]) -> Value {
    Value::Array(
        numbers
            .iter()
            .map(|n| {
                json!({ "id": id(IdKind::Lane), "squad_id": squad_id, "lane_number": n, "in_use": true })
            })
            .collect(),
    )
}

#[test]
fn ping_echoes_the_request_id() {
    let (_dir, mut server) = server();
    let resp = call(&mut server, "ping", Value::Null);
    assert_eq!(resp["id"], 7);
    assert_eq!(status(&resp), 200);
    assert_eq!(resp["body"]["pong"], true);
}

#[test]
fn malformed_requests_are_bad_requests() {
    let (_dir, mut server) = server();
    assert_eq!(status(&server.handle(json!([1, 2]))), 400);
    assert_eq!(status(&server.handle(json!({ "id": 1 }))), 400);
    assert_eq!(
        status(&server.handle(json!({ "id": 1, "method": "ping", "params": [] }))),
        400
    );
    let unknown = call(&mut server, "replace_widgets", json!({}));
    assert_eq!(status(&unknown), 400);
    assert_eq!(unknown["error"], "unknown method: replace_widgets");
    let missing = call(&mut server, "list_lanes", json!({}));
    assert_eq!(missing["error"], "missing param: parent_id");
}

#[test]
fn replace_and_list_lanes() {
    let (_dir, mut server) = server();
    let (_, _, _, squad_id) = seed_tree(&mut server);

    let resp = call(
        &mut server,
        "replace_lanes",
        json!({ "parent_id": squad_id, "records": lanes(&squad_id, &[1, 2, 3, 4]) }),
    );
    assert_eq!(resp["body"]["count"], 4, "{resp}");

    let resp = call(
        &mut server,
        "replace_lanes",
        json!({ "parent_id": squad_id, "records": [] }),
    );
    assert_eq!(resp["body"]["count"], 0);
    let listed = call(&mut server, "list_lanes", json!({ "parent_id": squad_id }));
    assert_eq!(listed["body"]["records"], json!([]));
}

#[test]
fn replace_failures_map_through_the_classifier() {
    let (_dir, mut server) = server();
    let (_, _, _, squad_id) = seed_tree(&mut server);

    let not_found = call(
        &mut server,
        "replace_lanes",
        json!({ "parent_id": "sqd_bogus", "records": [] }),
    );
    assert_eq!(status(&not_found), 404);

    let conflict = call(
        &mut server,
        "replace_lanes",
        json!({ "parent_id": squad_id, "records": lanes(&squad_id, &[2, 2]) }),
    );
    assert_eq!(status(&conflict), 409);
    let message = conflict["error"].as_str().expect("error message");
    assert!(message.starts_with("Failed to replace lanes: "), "{message}");

    let bad_records = call(
        &mut server,
        "replace_lanes",
        json!({ "parent_id": squad_id, "records": [{ "lane_number": 1 }] }),
    );
    assert_eq!(status(&bad_records), 400);
}

#[test]
fn tmnt_lookup_and_delete() {
    let (_dir, mut server) = server();
    let (tmnt_id, _, _, _) = seed_tree(&mut server);

    let got = call(&mut server, "get_tmnt", json!({ "tmnt_id": tmnt_id }));
    assert_eq!(got["body"]["tmnt_name"], "Fall Open");

    let squads = call(
        &mut server,
        "ancestry",
        json!({ "tmnt_id": tmnt_id, "of": "squads" }),
    );
    assert_eq!(squads["body"]["ids"].as_array().map(Vec::len), Some(1));
    let bad_target = call(
        &mut server,
        "ancestry",
        json!({ "tmnt_id": tmnt_id, "of": "bowls" }),
    );
    assert_eq!(status(&bad_target), 400);

    assert_eq!(
        status(&call(&mut server, "delete_tmnt", json!({ "tmnt_id": tmnt_id }))),
        200
    );
    assert_eq!(
        status(&call(&mut server, "get_tmnt", json!({ "tmnt_id": tmnt_id }))),
        404
    );
    assert_eq!(
        status(&call(&mut server, "delete_tmnt", json!({ "tmnt_id": tmnt_id }))),
        404
    );
}

#[test]
fn ancestry_of_a_non_tmnt_id_is_not_found() {
    let (_dir, mut server) = server();
    let (_, _, div_id, _) = seed_tree(&mut server);

    for tmnt_id in [div_id.as_str(), "garbage"] {
        let resp = call(
            &mut server,
            "ancestry",
            json!({ "tmnt_id": tmnt_id, "of": "events" }),
        );
        assert_eq!(status(&resp), 404, "{resp}");
    }
}

#[test]
fn resubmitted_divs_keep_pots_and_dropped_divs_conflict() {
    let (_dir, mut server) = server();
    let (tmnt_id, _, div_id, squad_id) = seed_tree(&mut server);
    let pots = call(
        &mut server,
        "replace_pots",
        json!({
            "parent_id": squad_id,
            "records": [{
                "id": id(IdKind::Pot), "squad_id": squad_id, "div_id": div_id,
                "sort_order": 1, "fee": 20, "pot_type": "Game"
            }]
        }),
    );
    assert_eq!(status(&pots), 200, "{pots}");

    let divs = call(&mut server, "list_divs", json!({ "parent_id": tmnt_id }));
    let records = divs["body"]["records"].clone();
    let resubmit = call(
        &mut server,
        "replace_divs",
        json!({ "parent_id": tmnt_id, "records": records }),
    );
    assert_eq!(status(&resubmit), 200, "{resubmit}");

    let dropped = call(
        &mut server,
        "replace_divs",
        json!({ "parent_id": tmnt_id, "records": [] }),
    );
    assert_eq!(status(&dropped), 409, "{dropped}");

    let listed = call(&mut server, "list_pots", json!({ "parent_id": squad_id }));
    assert_eq!(listed["body"]["records"].as_array().map(Vec::len), Some(1));
}

#[test]
fn calculators_accept_numbers_and_numeric_strings() {
    let (_dir, mut server) = server();
    let fee = call(&mut server, "entry_fee", json!({ "count": "8", "unit_fee": 5 }));
    assert_eq!(fee["body"]["fee"], 40.0);
    let none = call(&mut server, "entry_fee", json!({ "unit_fee": 5 }));
    assert_eq!(none["body"]["fee"], 0.0);

    let fsa = call(
        &mut server,
        "fsa_total",
        json!({ "first": 10.123, "second": 20.456, "admin": 30.789 }),
    );
    assert_eq!(fsa["body"]["fsa"], 61.37);
    let partial = call(&mut server, "fsa_total", json!({ "first": 25, "second": 10 }));
    assert_eq!(partial["body"]["fsa"], 0.0);

    let kind = call(&mut server, "classify", json!({ "code": "FOREIGN_KEY_VIOLATION" }));
    assert_eq!(kind["body"], json!({ "kind": "conflict", "status": 409 }));
}

#[test]
fn draw_brackets_persists_a_seeded_draw() {
    let (_dir, mut server) = server();
    let (_, _, div_id, squad_id) = seed_tree(&mut server);

    let players = (0..4).map(|_| id(IdKind::Player)).collect::<Vec<_>>();
    let records = players
        .iter()
        .enumerate()
        .map(|(i, p)| {
            json!({
                "id": p, "squad_id": squad_id, "first_name": "Sam",
                "last_name": format!("Roller{i}"), "average": 200
            })
        })
        .collect::<Vec<_>>();
    let resp = call(
        &mut server,
        "replace_players",
        json!({ "parent_id": squad_id, "records": records }),
    );
    assert_eq!(resp["body"]["count"], 4, "{resp}");

    let brkt_id = id(IdKind::Brkt);
    let resp = call(
        &mut server,
        "replace_brkts",
        json!({
            "parent_id": squad_id,
            "records": [{
                "id": brkt_id, "squad_id": squad_id, "div_id": div_id,
                "sort_order": 1, "start": 1, "games": 3, "players": 4,
                "fee": 5, "first": 15, "second": 5, "admin": 0, "fsa": 20
            }]
        }),
    );
    assert_eq!(status(&resp), 200, "{resp}");

    let entries = players
        .iter()
        .enumerate()
        .map(|(i, p)| {
            json!({
                "id": id(IdKind::BrktEntry), "brkt_id": brkt_id, "player_id": p,
                "num_brackets": 2, "time_stamp": i
            })
        })
        .collect::<Vec<_>>();
    let resp = call(
        &mut server,
        "replace_brkt_entries",
        json!({ "parent_id": squad_id, "records": entries }),
    );
    assert_eq!(resp["body"]["count"], 4, "{resp}");

    let with_fee = call(
        &mut server,
        "list_brkt_entries_with_fee",
        json!({ "squad_id": squad_id }),
    );
    assert_eq!(with_fee["body"]["records"][0]["fee"], 10.0);

    let drawn = call(
        &mut server,
        "draw_brackets",
        json!({ "brkt_id": brkt_id, "seed": 9 }),
    );
    assert_eq!(status(&drawn), 200, "{drawn}");
    assert_eq!(drawn["body"]["one_brkts"], 2);
    assert_eq!(drawn["body"]["seeds"], 8);
    assert_eq!(drawn["body"]["full"], 2);

    let seeds = call(&mut server, "list_brkt_seeds", json!({ "parent_id": brkt_id }));
    assert_eq!(seeds["body"]["records"].as_array().map(Vec::len), Some(8));
}
