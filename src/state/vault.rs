//! Paper vault: persisted exam-paper photo records.
//!
//! Same persistence rules as the session store: every mutation is mirrored
//! to storage before it returns, and a malformed persisted record is
//! discarded silently (the vault starts empty rather than crashing).

#[cfg(test)]
#[path = "vault_test.rs"]
mod vault_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::RecordStorage;

/// localStorage key for the persisted vault record.
pub const VAULT_KEY: &str = "paperslol_vault_v1";

/// Kind of file behind a vault entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    Pdf,
}

/// One uploaded exam-paper photo. Wire shape is camelCase for compatibility
/// with records persisted by earlier deployments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamPhoto {
    pub id: String,
    /// Owning user's derived id.
    pub student_id: String,
    /// Paper category label, e.g. `"8th"` or `"9th"`.
    pub category: String,
    pub image_url: String,
    pub file_type: FileType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl ExamPhoto {
    /// Build a new entry with a fresh v4 id and no analysis metadata.
    pub fn new(
        student_id: &str,
        category: &str,
        image_url: &str,
        file_type: FileType,
        timestamp: String,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            student_id: student_id.to_owned(),
            category: category.to_owned(),
            image_url: image_url.to_owned(),
            file_type,
            file_name: None,
            timestamp,
            analysis: None,
            labels: None,
        }
    }
}

/// A known exam, shown on the home panel schedule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    pub name: String,
    pub code: String,
    pub date: String,
}

/// Seed exam list shown until a real schedule source exists.
pub fn mock_exams() -> Vec<Exam> {
    vec![Exam {
        id: "1".to_owned(),
        name: "General Paper".to_owned(),
        code: "GP-01".to_owned(),
        date: "2024-01-01".to_owned(),
    }]
}

/// Persisted photo collection with category and owner queries.
#[derive(Clone, Debug)]
pub struct VaultStore<S: RecordStorage> {
    storage: S,
    photos: Vec<ExamPhoto>,
}

impl<S: RecordStorage> VaultStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            photos: Vec::new(),
        }
    }

    /// Rehydrate the photo list. Malformed records leave the vault empty.
    pub fn load(&mut self) {
        self.photos = match self.storage.read(VAULT_KEY) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(photos) => photos,
                Err(err) => {
                    log::warn!("discarding malformed vault record: {err}");
                    Vec::new()
                }
            },
        };
    }

    pub fn photos(&self) -> &[ExamPhoto] {
        &self.photos
    }

    /// Photos in a category, newest first (insertion order reversed).
    pub fn photos_for(&self, category: &str) -> Vec<ExamPhoto> {
        self.photos
            .iter()
            .rev()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Photos owned by a student, newest first.
    pub fn photos_by(&self, student_id: &str) -> Vec<ExamPhoto> {
        self.photos
            .iter()
            .rev()
            .filter(|p| p.student_id == student_id)
            .cloned()
            .collect()
    }

    /// Append an entry and persist before returning.
    pub fn add(&mut self, photo: ExamPhoto) {
        self.photos.push(photo);
        self.persist();
    }

    /// Remove an entry by id. Returns whether anything was removed; only a
    /// real removal rewrites storage.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.photos.len();
        self.photos.retain(|p| p.id != id);
        let removed = self.photos.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    fn persist(&mut self) {
        if let Ok(json) = serde_json::to_string(&self.photos) {
            self.storage.write(VAULT_KEY, &json);
        }
    }
}
