//! Integration tests for the stores: day upsert/delete and the player hall.

use arena_volley_day::storage::saved_day_summaries;
use arena_volley_day::{DayStore, GameDay, JsonFileStore, MemoryStore, StorageError};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
}

fn drawn_day(d: u32) -> GameDay {
    let mut day = GameDay::new(date(d));
    for name in ["Ana", "Bia", "Caio", "Duda", "Edu", "Fabi"] {
        day.add_player(name).unwrap();
    }
    day.draw_teams(&mut StdRng::seed_from_u64(u64::from(d))).unwrap();
    day
}

fn exercise_days(store: &mut impl DayStore) {
    assert!(store.load_all_days().unwrap().is_empty());

    let first = drawn_day(5);
    store.save_day(&first).unwrap();
    store.save_day(&drawn_day(12)).unwrap();
    assert_eq!(store.load_all_days().unwrap().len(), 2);

    // Same date replaces the earlier entry.
    let mut updated = first.clone();
    updated.update_score(1, Some(21), Some(19)).unwrap();
    store.save_day(&updated).unwrap();
    let days = store.load_all_days().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(store.load_day(date(5)).unwrap(), Some(updated));

    store.delete_day(date(5)).unwrap();
    assert_eq!(store.load_day(date(5)).unwrap(), None);
    assert_eq!(store.load_all_days().unwrap().len(), 1);
}

fn exercise_hall(store: &mut impl DayStore) {
    assert!(store.load_player_hall().unwrap().is_empty());
    store.add_to_player_hall("caio").unwrap();
    store.add_to_player_hall("Ana").unwrap();
    let hall = store.add_to_player_hall("Bia").unwrap();
    assert_eq!(hall, vec!["Ana", "Bia", "caio"]);

    // Case-insensitive duplicate is ignored.
    assert_eq!(store.add_to_player_hall("ANA").unwrap().len(), 3);
    assert_eq!(store.add_to_player_hall("  ").unwrap().len(), 3);

    let hall = store.remove_from_player_hall("Bia").unwrap();
    assert_eq!(hall, vec!["Ana", "caio"]);
    assert_eq!(store.load_player_hall().unwrap(), hall);

    store.clear_player_hall().unwrap();
    assert!(store.load_player_hall().unwrap().is_empty());
}

#[test]
fn memory_store_days() {
    exercise_days(&mut MemoryStore::new());
}

#[test]
fn memory_store_hall() {
    exercise_hall(&mut MemoryStore::new());
}

#[test]
fn json_store_days() {
    let dir = tempfile::tempdir().unwrap();
    exercise_days(&mut JsonFileStore::new(dir.path()));
}

#[test]
fn json_store_hall() {
    let dir = tempfile::tempdir().unwrap();
    exercise_hall(&mut JsonFileStore::new(dir.path()));
}

#[test]
fn json_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let day = drawn_day(19);
    JsonFileStore::new(dir.path()).save_day(&day).unwrap();

    let reopened = JsonFileStore::new(dir.path());
    assert_eq!(reopened.load_all_days().unwrap(), vec![day]);
}

#[test]
fn json_store_reads_corrupt_file_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("days.json"), "{ not json").unwrap();
    let store = JsonFileStore::new(dir.path());
    assert!(store.load_all_days().unwrap().is_empty());
}

#[test]
fn json_store_refuses_to_overwrite_a_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("days.json");
    std::fs::write(&path, "{ not json").unwrap();
    let mut store = JsonFileStore::new(dir.path());

    assert!(matches!(store.save_day(&drawn_day(26)), Err(StorageError::Json(_))));
    assert!(matches!(store.delete_day(date(26)), Err(StorageError::Json(_))));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn json_store_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path());
    store.save_day(&drawn_day(8)).unwrap();
    store.add_to_player_hall("Ana").unwrap();

    let mut files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    files.sort();
    assert_eq!(files, vec!["days.json", "player_hall.json"]);
}

#[test]
fn saved_days_newest_first_and_only_with_teams() {
    let mut finished = drawn_day(3);
    for m in &mut finished.matches {
        m.score_1 = Some(21);
        m.score_2 = Some(10);
        m.finished = true;
    }
    let days = vec![finished, drawn_day(17), GameDay::new(date(20))];
    let summaries = saved_day_summaries(&days);
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].date, date(17));
    assert!(!summaries[0].all_finished);
    assert_eq!(summaries[1].date, date(3));
    assert!(summaries[1].all_finished);
    assert_eq!(summaries[1].matches, 3);
}
