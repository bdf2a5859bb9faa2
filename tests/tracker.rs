use bet_tracker::{BetField, BetPersistence, Controller, EditState, MemoryBackend, Numeric, Store};

fn open(backend: &MemoryBackend) -> Controller<MemoryBackend> {
    Controller::new(Store::open(backend.clone()))
}

fn add(c: &mut Controller<MemoryBackend>, title: &str, name: &str, amount: &str, multiplier: &str) {
    c.set_draft_field(BetField::Title, title);
    c.set_draft_field(BetField::Name, name);
    c.set_draft_field(BetField::Amount, amount);
    c.set_draft_field(BetField::Multiplier, multiplier);
    c.add_from_draft().unwrap();
}

#[test]
fn session_survives_reload() {
    let backend = MemoryBackend::new();
    let mut c = open(&backend);
    add(&mut c, "Match A", "Juan", "100", "1.5");
    add(&mut c, "Match B", "Ana", "20", "3");
    add(&mut c, "Match C", "Juan", "10", "1.25");

    c.begin_edit(2);
    c.update_field(2, BetField::Multiplier, "2");
    c.end_edit();
    c.delete_at(1);

    let reloaded = open(&backend);
    let records = reloaded.store().records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].return_amount, "150.00");
    assert_eq!(records[1].title, "Match C");
    assert_eq!(records[1].multiplier, Numeric::Text("2".into()));
    assert_eq!(records[1].return_amount, "20.00");
    assert_eq!(reloaded.editing(), EditState::Idle);
    assert_eq!(reloaded.suggestions_for("ju", BetField::Name), vec!["Juan"]);
}

#[test]
fn persisted_json_layout() {
    let backend = MemoryBackend::new();
    let mut c = open(&backend);
    add(&mut c, "Match A", "Juan", "125.5", "1");

    let raw: serde_json::Value = serde_json::from_str(&backend.raw().unwrap()).unwrap();
    assert_eq!(
        raw,
        serde_json::json!([{
            "title": "Match A",
            "name": "Juan",
            "amount": 125.5,
            "multiplier": 1.0,
            "returnAmount": "125.50"
        }])
    );
}

#[test]
fn foreign_data_with_string_numbers_loads() {
    let backend = MemoryBackend::with_raw(
        r#"[{"title":"Old","name":"Luis","amount":"10","multiplier":"oops","returnAmount":"30.00"}]"#,
    );
    let mut c = open(&backend);
    assert_eq!(c.store().len(), 1);

    // Multiplier is still unparseable, so the return stays as stored.
    c.update_field(0, BetField::Amount, "12");
    assert_eq!(c.store().records()[0].return_amount, "30.00");

    c.update_field(0, BetField::Multiplier, "3");
    assert_eq!(c.store().records()[0].return_amount, "36.00");
}

#[test]
fn corrupt_storage_starts_empty_and_recovers() {
    let backend = MemoryBackend::with_raw("[{\"title\": ");
    let mut c = open(&backend);
    assert!(c.store().is_empty());

    add(&mut c, "Fresh", "Eva", "1", "2");
    assert_eq!(backend.load().len(), 1);
}

#[test]
fn clear_all_empties_storage() {
    let backend = MemoryBackend::new();
    let mut c = open(&backend);
    add(&mut c, "A", "B", "1", "1");
    add(&mut c, "C", "D", "1", "1");
    c.clear_all();
    assert!(open(&backend).store().is_empty());
    assert!(c.suggestions_for("a", BetField::Title).is_empty());
}
