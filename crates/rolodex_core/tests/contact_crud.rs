use rolodex_core::{
    Contact, ContactStore, MemoryStorage, NewContact, SequentialIdGenerator, StoreError,
    DEFAULT_DOCUMENT_KEY,
};

fn store() -> ContactStore<MemoryStorage> {
    ContactStore::with_id_generator(
        MemoryStorage::new(),
        DEFAULT_DOCUMENT_KEY,
        Box::new(SequentialIdGenerator::starting_at(100)),
    )
}

fn bare_contact(id: &str, name: &str) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        linked_in_url: None,
        linked_in_username: None,
        email: None,
        phone: None,
        company: None,
        position: None,
        last_contact_date: None,
        next_contact_date: None,
        notes: Vec::new(),
        tags: Vec::new(),
        profile_image: None,
        created_at: "2023-01-01".to_string(),
        updated_at: "2023-01-01".to_string(),
    }
}

#[test]
fn add_then_get_round_trips() {
    let store = store();

    let created = store
        .add(NewContact {
            name: "Jane Doe".to_string(),
            email: Some("jane@example.com".to_string()),
            company: Some("Acme".to_string()),
            ..NewContact::default()
        })
        .unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(created.created_at, created.updated_at);
    assert!(created.tags.is_empty());
    assert!(created.notes.is_empty());

    let loaded = store.get(&created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn add_normalizes_tags_preserving_entry_order() {
    let store = store();

    let created = store
        .add(NewContact {
            name: "Tagged".to_string(),
            tags: vec![
                "Tech".to_string(),
                "  ".to_string(),
                "design".to_string(),
                "Tech".to_string(),
            ],
            ..NewContact::default()
        })
        .unwrap();

    assert_eq!(created.tags, vec!["Tech".to_string(), "design".to_string()]);
}

#[test]
fn update_replaces_record_wholesale_and_stamps_updated_at() {
    let store = store();
    let created = store
        .add(NewContact {
            name: "Before".to_string(),
            ..NewContact::default()
        })
        .unwrap();

    let mut edited = created.clone();
    edited.name = "After".to_string();
    edited.company = Some("NewCo".to_string());

    let updated = store.update(&edited).unwrap();
    assert_eq!(updated.name, "After");
    assert_eq!(updated.company.as_deref(), Some("NewCo"));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= updated.created_at);

    let loaded = store.get(&created.id).unwrap().unwrap();
    assert_eq!(loaded, updated);
}

#[test]
fn update_unknown_id_is_not_found_and_persists_nothing() {
    let store = store();
    let before = store.list().unwrap();

    let err = store.update(&bare_contact("ghost", "Ghost")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == "ghost"));

    assert_eq!(store.list().unwrap(), before);
}

#[test]
fn delete_removes_record_and_is_idempotent() {
    let store = store();
    let created = store
        .add(NewContact {
            name: "Short Lived".to_string(),
            ..NewContact::default()
        })
        .unwrap();

    store.delete(&created.id).unwrap();
    assert!(store.get(&created.id).unwrap().is_none());

    let before = store.list().unwrap();
    store.delete("nonexistent-id").unwrap();
    assert_eq!(store.list().unwrap(), before);
}

#[test]
fn save_then_list_returns_the_exact_collection() {
    let store = store();
    let contacts = vec![bare_contact("a", "Ada"), bare_contact("b", "Ben")];

    store.save(&contacts).unwrap();
    assert_eq!(store.list().unwrap(), contacts);
}

#[test]
fn get_unknown_id_returns_none_without_error() {
    let store = store();
    assert!(store.get("no-such-contact").unwrap().is_none());
}
