use super::*;
use crate::util::storage::{MemoryStorage, RecordStorage};

fn store() -> VaultStore<MemoryStorage> {
    VaultStore::new(MemoryStorage::default())
}

fn photo(student_id: &str, category: &str) -> ExamPhoto {
    ExamPhoto::new(
        student_id,
        category,
        "https://vault.example/paper.jpg",
        FileType::Image,
        "2024-06-01T10:00:00.000Z".to_owned(),
    )
}

// =============================================================
// records
// =============================================================

#[test]
fn new_photos_get_distinct_ids() {
    let a = photo("neo", "8th");
    let b = photo("neo", "8th");
    assert_ne!(a.id, b.id);
}

#[test]
fn photo_serializes_camel_case() {
    let p = photo("sparsh_rathore", "9th");
    let value = serde_json::to_value(&p).unwrap();
    assert_eq!(value["studentId"], serde_json::json!("sparsh_rathore"));
    assert_eq!(value["fileType"], serde_json::json!("image"));
    assert_eq!(value["imageUrl"], serde_json::json!("https://vault.example/paper.jpg"));
    // Absent metadata is omitted from the record entirely.
    assert!(value.get("analysis").is_none());
    assert!(value.get("fileName").is_none());
}

#[test]
fn photo_deserializes_without_optional_fields() {
    let raw = r#"{
        "id": "p-1",
        "studentId": "neo",
        "category": "8th",
        "imageUrl": "u",
        "fileType": "pdf",
        "timestamp": "t"
    }"#;
    let p: ExamPhoto = serde_json::from_str(raw).unwrap();
    assert_eq!(p.file_type, FileType::Pdf);
    assert!(p.labels.is_none());
}

#[test]
fn mock_exams_seed_general_paper() {
    let exams = mock_exams();
    assert_eq!(exams.len(), 1);
    assert_eq!(exams[0].code, "GP-01");
}

// =============================================================
// persistence
// =============================================================

#[test]
fn add_persists_immediately() {
    let mut vault = store();
    vault.add(photo("neo", "8th"));

    let mut reloaded = VaultStore::new(vault.storage.clone());
    reloaded.load();
    assert_eq!(reloaded.photos().len(), 1);
    assert_eq!(reloaded.photos()[0].student_id, "neo");
}

#[test]
fn remove_deletes_and_persists() {
    let mut vault = store();
    let p = photo("neo", "8th");
    let id = p.id.clone();
    vault.add(p);
    vault.add(photo("neo", "9th"));

    assert!(vault.remove(&id));
    assert!(!vault.remove(&id));

    let mut reloaded = VaultStore::new(vault.storage.clone());
    reloaded.load();
    assert_eq!(reloaded.photos().len(), 1);
    assert_eq!(reloaded.photos()[0].category, "9th");
}

#[test]
fn load_with_corrupted_record_yields_empty_vault() {
    let mut vault = store();
    vault.storage.write(VAULT_KEY, "[{\"id\": ");
    vault.load();
    assert!(vault.photos().is_empty());
}

#[test]
fn load_with_empty_storage_yields_empty_vault() {
    let mut vault = store();
    vault.load();
    assert!(vault.photos().is_empty());
}

// =============================================================
// queries
// =============================================================

#[test]
fn photos_for_filters_by_category_newest_first() {
    let mut vault = store();
    let first = photo("neo", "8th");
    let second = photo("trinity", "8th");
    let first_id = first.id.clone();
    let second_id = second.id.clone();
    vault.add(first);
    vault.add(photo("neo", "9th"));
    vault.add(second);

    let eighth = vault.photos_for("8th");
    assert_eq!(eighth.len(), 2);
    assert_eq!(eighth[0].id, second_id);
    assert_eq!(eighth[1].id, first_id);
}

#[test]
fn photos_by_filters_by_owner() {
    let mut vault = store();
    vault.add(photo("neo", "8th"));
    vault.add(photo("trinity", "9th"));
    vault.add(photo("neo", "9th"));

    let neos = vault.photos_by("neo");
    assert_eq!(neos.len(), 2);
    assert!(neos.iter().all(|p| p.student_id == "neo"));
}
