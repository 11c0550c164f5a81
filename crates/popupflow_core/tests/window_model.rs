use popupflow_core::{
    Placement, Priority, WindowDraft, WindowRecord, WindowType, WindowValidationError,
};

#[test]
fn draft_defaults_match_editor_new_window() {
    let record = WindowDraft::default().into_record("40");

    assert_eq!(record.id, "40");
    assert_eq!(record.content, "Новое окно");
    assert_eq!(record.kind, WindowType::System);
    assert_eq!(record.priority, Priority::Medium);
    assert_eq!(record.line, 2);
    assert_eq!(record.description, "Описание нового окна");
}

#[test]
fn draft_overrides_only_the_fields_it_sets() {
    let record = WindowDraft::default()
        .with_content("Daily Spin")
        .with_priority(Priority::Low)
        .into_record("7");

    assert_eq!(record.content, "Daily Spin");
    assert_eq!(record.priority, Priority::Low);
    assert_eq!(record.kind, WindowType::System);
    assert_eq!(record.line, 2);
}

#[test]
fn reprioritize_moves_to_canonical_lane() {
    let mut record =
        WindowRecord::new("5", "Анлок фичи", WindowType::System, Priority::Medium, 4, "");

    record.reprioritize(Priority::High);
    assert_eq!((record.priority, record.line), (Priority::High, 1));

    record.reprioritize(Priority::Low);
    assert_eq!((record.priority, record.line), (Priority::Low, 3));
}

#[test]
fn validate_rejects_blank_id_and_content() {
    let blank_id = WindowRecord::new(" ", "title", WindowType::Offer, Priority::Low, 3, "");
    assert_eq!(blank_id.validate().unwrap_err(), WindowValidationError::EmptyId);

    let blank_content = WindowRecord::new("3", "  ", WindowType::Offer, Priority::Low, 3, "");
    assert_eq!(
        blank_content.validate().unwrap_err(),
        WindowValidationError::EmptyContent { id: "3".to_string() }
    );
}

#[test]
fn placement_is_derived_from_numeric_id() {
    let main = WindowRecord::new("50", "a", WindowType::Reward, Priority::High, 1, "");
    let exit = WindowRecord::new("51", "b", WindowType::Reward, Priority::High, 1, "");
    let named = WindowRecord::new("promo", "c", WindowType::Reward, Priority::High, 1, "");

    assert_eq!(main.placement(), Some(Placement::MainScreen));
    assert_eq!(exit.placement(), Some(Placement::LevelExit));
    assert_eq!(named.placement(), None);
}

#[test]
fn serialization_uses_front_end_field_names() {
    let record = WindowRecord::new(
        "14",
        "Win Streak",
        WindowType::Reward,
        Priority::High,
        1,
        "Win Streak Reward - получение награды",
    );

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], "14");
    assert_eq!(json["content"], "Win Streak");
    assert_eq!(json["type"], "reward");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["line"], 1);
    assert_eq!(json["description"], "Win Streak Reward - получение награды");

    let decoded: WindowRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn deserialize_rejects_blank_content() {
    let value = serde_json::json!({
        "id": "9",
        "content": "",
        "type": "progress",
        "priority": "medium",
        "line": 2,
        "description": "Прогресс"
    });

    let err = serde_json::from_value::<WindowRecord>(value).unwrap_err();
    assert!(
        err.to_string().contains("window `9` content must not be blank"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_unknown_type_name() {
    let value = serde_json::json!({
        "id": "9",
        "content": "Прогресс",
        "type": "banner",
        "priority": "medium",
        "line": 2,
        "description": ""
    });

    assert!(serde_json::from_value::<WindowRecord>(value).is_err());
}
