use popupflow_core::{
    seed_windows, InMemoryWindowRepository, Priority, WindowDraft, WindowRecord, WindowRepository,
    WindowType,
};

fn record(id: &str, line: u32) -> WindowRecord {
    WindowRecord::new(id, format!("window {id}"), WindowType::Event, Priority::Medium, line, "")
}

fn ids(repo: &impl WindowRepository) -> Vec<&str> {
    repo.list_windows().iter().map(|w| w.id.as_str()).collect()
}

#[test]
fn seeded_store_holds_seed_in_order() {
    let repo = InMemoryWindowRepository::seeded();

    assert_eq!(repo.list_windows(), seed_windows().as_slice());
    assert_eq!(repo.list_windows()[0].content, "Обновление");
    assert_eq!(repo.list_windows()[38].id, "39");
}

#[test]
fn replace_swaps_whole_sequence() {
    let mut repo = InMemoryWindowRepository::seeded();

    repo.replace_windows(vec![record("3", 2), record("1", 1)]);
    assert_eq!(ids(&repo), vec!["3", "1"]);
}

#[test]
fn update_replaces_in_place_without_reordering() {
    let mut repo = InMemoryWindowRepository::from_windows(vec![
        record("1", 1),
        record("2", 1),
        record("3", 2),
    ]);

    let mut changed = record("2", 5);
    changed.content = "renamed".to_string();
    assert!(repo.update_window(changed.clone()));

    assert_eq!(ids(&repo), vec!["1", "2", "3"]);
    assert_eq!(repo.get_window("2"), Some(&changed));
}

#[test]
fn update_of_missing_id_is_a_noop() {
    let mut repo = InMemoryWindowRepository::from_windows(vec![record("1", 1)]);
    let before = repo.clone();

    assert!(!repo.update_window(record("99", 3)));
    assert_eq!(repo, before);
}

#[test]
fn create_allocates_max_plus_one_and_appends() {
    let mut repo = InMemoryWindowRepository::seeded();
    let draft = WindowDraft::default().with_kind(WindowType::Offer).with_line(4);

    let created = repo.create_window(draft);

    assert_eq!(created.id, "40");
    assert_eq!(repo.list_windows().last(), Some(&created));
    let loaded = repo.get_window("40").unwrap();
    assert_eq!(loaded.kind, WindowType::Offer);
    assert_eq!(loaded.line, 4);
    assert_eq!(loaded.priority, Priority::Medium);
}

#[test]
fn create_uses_numeric_max_after_reorder_and_delete() {
    let mut repo = InMemoryWindowRepository::from_windows(vec![record("12", 1), record("3", 1)]);
    assert!(repo.delete_window("3"));

    assert_eq!(repo.create_window(WindowDraft::default()).id, "13");
}

#[test]
fn create_on_empty_store_starts_at_one() {
    let mut repo = InMemoryWindowRepository::new();

    let created = repo.create_window(WindowDraft::default());
    assert_eq!(created.id, "1");
    assert_eq!(repo.len(), 1);
}

#[test]
fn create_with_blank_content_uses_default_title() {
    let mut repo = InMemoryWindowRepository::new();

    let created = repo.create_window(WindowDraft::default().with_content("  "));
    assert_eq!(created.content, WindowDraft::DEFAULT_CONTENT);
    assert!(created.validate().is_ok());

    let json = serde_json::to_string(repo.list_windows()).unwrap();
    let reloaded: Vec<WindowRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded, repo.into_windows());
}

#[test]
fn create_never_reuses_an_overflowing_max_id() {
    let max = u64::MAX.to_string();
    let mut repo = InMemoryWindowRepository::from_windows(vec![record(&max, 1), record("1", 1)]);

    let created = repo.create_window(WindowDraft::default());
    assert_eq!(created.id, "2");
    assert_eq!(ids(&repo), vec![max.as_str(), "1", "2"]);
}

#[test]
fn update_with_invalid_record_is_rejected() {
    let mut repo = InMemoryWindowRepository::from_windows(vec![record("1", 1), record("2", 1)]);
    let before = repo.clone();

    let mut blank = record("2", 4);
    blank.content = " ".to_string();
    assert!(!repo.update_window(blank));
    assert_eq!(repo, before);
}

#[test]
fn delete_removes_record_and_shrinks_by_one() {
    let mut repo = InMemoryWindowRepository::seeded();
    let before = repo.len();

    assert!(repo.delete_window("17"));
    assert_eq!(repo.len(), before - 1);
    assert!(repo.list_windows().iter().all(|w| w.id != "17"));
}

#[test]
fn delete_of_missing_id_keeps_collection() {
    let mut repo = InMemoryWindowRepository::seeded();
    let before = repo.len();

    assert!(!repo.delete_window("1000"));
    assert_eq!(repo.len(), before);
}

#[test]
fn duplicate_ids_resolve_to_last_match() {
    let mut first = record("7", 1);
    first.content = "first".to_string();
    let mut second = record("7", 2);
    second.content = "second".to_string();
    let mut repo =
        InMemoryWindowRepository::from_windows(vec![first.clone(), record("8", 1), second]);

    assert_eq!(repo.position_of("7"), Some(2));
    assert_eq!(repo.get_window("7").unwrap().content, "second");

    let mut updated = record("7", 3);
    updated.content = "updated".to_string();
    assert!(repo.update_window(updated));
    assert_eq!(repo.list_windows()[0], first);
    assert_eq!(repo.list_windows()[2].content, "updated");

    assert!(repo.delete_window("7"));
    assert_eq!(ids(&repo), vec!["8"]);
}

fn create_two<R: WindowRepository>(mut repo: R) {
    repo.create_window(WindowDraft::default());
    repo.create_window(WindowDraft::default());
}

#[test]
fn mutable_borrow_acts_as_a_repository() {
    let mut repo = InMemoryWindowRepository::new();

    create_two(&mut repo);
    assert_eq!(ids(&repo), vec!["1", "2"]);
}
