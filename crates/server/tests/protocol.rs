#![forbid(unsafe_code)]

mod support;
use support::*;

use serde_json::json;

const BOWL: &str = "bwl_0123456789abcdef0123456789abcdef";
const USER: &str = "usr_0123456789abcdef0123456789abcdef";
const TMNT: &str = "tmt_00000000000000000000000000000001";
const EVENT: &str = "evt_00000000000000000000000000000001";

#[test]
fn ping_over_stdio() {
    let mut server = Server::start();
    let resp = server.request(json!({ "id": "a", "method": "ping" }));
    assert_eq!(resp["id"], "a");
    assert_eq!(resp["status"], 200);
    assert_eq!(resp["body"]["pong"], true);
}

#[test]
fn unparseable_line_gets_a_bad_request_and_the_loop_continues() {
    let mut server = Server::start();
    server.send_raw("{not json");
    let resp = server.recv();
    assert_eq!(resp["status"], 400);
    assert!(resp["id"].is_null());

    let resp = server.request(json!({ "id": 2, "method": "ping" }));
    assert_eq!(resp["status"], 200);
}

#[test]
fn replace_round_trip_over_stdio() {
    let mut server = Server::start();
    let created = server.request(json!({
        "id": 1,
        "method": "create_tmnt",
        "params": {
            "id": TMNT, "tmnt_name": "Stdio Cup", "start_date": "2026-05-01",
            "end_date": "2026-05-01", "bowl_id": BOWL, "user_id": USER
        }
    }));
    assert_eq!(created["status"], 200, "{created}");

    let events = json!([{
        "id": EVENT, "tmnt_id": TMNT, "event_name": "Singles", "team_size": 1,
        "games": 3, "entry_fee": 80.0, "lineage": 18.0, "prize_fund": 55.0,
        "other": 2.0, "expenses": 5.0, "added_money": 0.0, "sort_order": 1
    }]);
    let replaced = server.request(json!({
        "id": 2,
        "method": "replace_events",
        "params": { "parent_id": TMNT, "records": events }
    }));
    assert_eq!(replaced["body"]["count"], 1, "{replaced}");

    let duplicate = json!([events[0].clone(), events[0].clone()]);
    let failed = server.request(json!({
        "id": 3,
        "method": "replace_events",
        "params": { "parent_id": TMNT, "records": duplicate }
    }));
    assert_eq!(failed["status"], 409);
    assert!(
        failed["error"]
            .as_str()
            .is_some_and(|msg| msg.starts_with("Failed to replace events: "))
    );

    let listed = server.request(json!({
        "id": 4,
        "method": "list_events",
        "params": { "parent_id": TMNT }
    }));
    assert_eq!(listed["body"]["records"], events);

    assert!(server.storage_path().join("bt_store.db").exists());
}
