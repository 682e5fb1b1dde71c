//! End-to-end run of the fixture pipeline on a scaled-down config, checking
//! every output file line by line against the documented schema.

use std::collections::HashSet;
use std::path::Path;

use mart_config::GenConfig;
use mart_datagen::datagen::random::RandomSource;
use mart_datagen::output::jsonl::read_jsonl;
use mart_datagen::pipeline::{self, EVENTS_FILE, ITEMS_FILE, USERS_FILE};
use mart_datagen::records::{Event, Item, User};
use serde_json::Value;

fn scaled(out_dir: &Path, users: usize, items: usize, events: usize) -> GenConfig {
    GenConfig {
        num_users: users,
        num_items: items,
        num_events: events,
        out_dir: out_dir.to_path_buf(),
        ..GenConfig::default()
    }
}

fn raw_lines(path: &Path) -> Vec<serde_json::Map<String, Value>> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| match serde_json::from_str(line).unwrap() {
            Value::Object(obj) => obj,
            other => panic!("line is not a JSON object: {other}"),
        })
        .collect()
}

/// Key set of an object, sorted so it can be compared with a literal list.
fn keys(obj: &serde_json::Map<String, Value>) -> Vec<&str> {
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

#[test]
fn tiny_run_writes_expected_line_counts() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("data");
    let cfg = scaled(&out, 3, 2, 5);

    pipeline::run(&cfg, &mut RandomSource::from_seed(2025), &mut std::io::sink()).unwrap();

    let users = raw_lines(&out.join(USERS_FILE));
    let items = raw_lines(&out.join(ITEMS_FILE));
    let events = raw_lines(&out.join(EVENTS_FILE));
    assert_eq!(users.len(), 3);
    assert_eq!(items.len(), 2);
    assert_eq!(events.len(), 5);

    let user_ids: HashSet<&str> = users.iter().map(|u| u["user_id"].as_str().unwrap()).collect();
    let item_ids: HashSet<&str> = items.iter().map(|i| i["item_id"].as_str().unwrap()).collect();
    assert_eq!(user_ids, HashSet::from(["user_000001", "user_000002", "user_000003"]));
    assert_eq!(item_ids, HashSet::from(["item_000001", "item_000002"]));

    for event in &events {
        assert!(user_ids.contains(event["user_id"].as_str().unwrap()));
        assert!(item_ids.contains(event["item_id"].as_str().unwrap()));
    }
}

#[test]
fn every_line_matches_schema() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = scaled(dir.path(), 40, 15, 2000);

    pipeline::run(&cfg, &mut RandomSource::from_seed(7), &mut std::io::sink()).unwrap();

    for user in raw_lines(&dir.path().join(USERS_FILE)) {
        assert_eq!(
            keys(&user),
            ["age", "country", "gender", "registration_date", "user_id"]
        );
        assert!(user["user_id"].is_string());
        assert!(user["country"].is_string());
        assert!(user["age"].is_u64());
        assert!(["M", "F", "Other"].contains(&user["gender"].as_str().unwrap()));
        assert!(user["registration_date"].is_string());
    }

    for item in raw_lines(&dir.path().join(ITEMS_FILE)) {
        assert_eq!(keys(&item), ["brand", "category", "item_id", "name", "price"]);
        assert!(item["price"].is_number());
        assert!(item["brand"].as_str().unwrap().starts_with("Brand_"));
        assert!(item["name"].as_str().unwrap().starts_with("Product "));
    }

    let start = cfg.start.and_utc().timestamp();
    let end = cfg.end.and_utc().timestamp();
    for event in raw_lines(&dir.path().join(EVENTS_FILE)) {
        assert_eq!(
            keys(&event),
            ["event_id", "event_type", "item_id", "props", "ts", "user_id"]
        );
        let ts = event["ts"].as_i64().unwrap();
        assert!(ts >= start && ts <= end);

        let props = event["props"].as_object().unwrap();
        match event["event_type"].as_str().unwrap() {
            "purchase" => {
                assert_eq!(keys(props), ["price"]);
                assert!(props["price"].is_number());
            }
            "view" => {
                assert_eq!(keys(props), ["duration"]);
                let d = props["duration"].as_u64().unwrap();
                assert!((1..=300).contains(&d));
            }
            "add_to_cart" => {
                assert_eq!(keys(props), ["quantity"]);
                let q = props["quantity"].as_u64().unwrap();
                assert!((1..=5).contains(&q));
            }
            "click" | "remove_from_cart" => assert!(props.is_empty()),
            other => panic!("unknown event_type {other}"),
        }
    }
}

/// Decode every line into `T`, then re-encode and compare byte for byte.
fn assert_lines_round_trip<T>(path: &Path, expected: usize)
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let records: Vec<T> = read_jsonl(path).unwrap();
    assert_eq!(records.len(), expected);

    let text = std::fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), records.len());
    for (idx, (line, record)) in lines.iter().zip(&records).enumerate() {
        assert_eq!(
            serde_json::to_string(record).unwrap(),
            *line,
            "{}:{} does not re-encode identically",
            path.display(),
            idx + 1
        );
    }
}

#[test]
fn files_read_back_into_records() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = scaled(dir.path(), 10, 5, 300);

    let summary =
        pipeline::run(&cfg, &mut RandomSource::from_seed(11), &mut std::io::sink()).unwrap();

    assert_lines_round_trip::<User>(&summary.users.path, summary.users.records);
    assert_lines_round_trip::<Item>(&summary.items.path, summary.items.records);
    assert_lines_round_trip::<Event>(&summary.events.path, summary.events.records);
}

#[test]
fn rerun_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();

    let big = scaled(dir.path(), 20, 10, 100);
    pipeline::run(&big, &mut RandomSource::from_seed(1), &mut std::io::sink()).unwrap();
    let small = scaled(dir.path(), 3, 2, 5);
    pipeline::run(&small, &mut RandomSource::from_seed(1), &mut std::io::sink()).unwrap();

    assert_eq!(raw_lines(&dir.path().join(USERS_FILE)).len(), 3);
    assert_eq!(raw_lines(&dir.path().join(EVENTS_FILE)).len(), 5);
}

#[test]
fn seeded_runs_are_reproducible() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();

    for dir in [&a, &b] {
        let cfg = scaled(dir.path(), 25, 8, 400);
        pipeline::run(&cfg, &mut RandomSource::from_seed(99), &mut std::io::sink()).unwrap();
    }

    for name in [USERS_FILE, ITEMS_FILE, EVENTS_FILE] {
        let left = std::fs::read_to_string(a.path().join(name)).unwrap();
        let right = std::fs::read_to_string(b.path().join(name)).unwrap();
        assert_eq!(left, right, "{name} differs between seeded runs");
    }
}
