//! JSON-file record store for the candidate collection.
//!
//! The whole collection lives in one human-readable document shaped
//! `{ "candidates": [...] }`, rewritten wholesale on every mutation.
//! Reads fail soft (any error masks to an empty collection); writes fail
//! loud (the error is logged and returned, never swallowed).

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::models::candidate::{Candidate, CandidateDocument};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Whole-document storage of the candidate collection.
///
/// Carried in `AppState` as `Arc<dyn CandidateStore>` so handlers stay
/// decoupled from the backing file.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Reads the persisted document. An absent, unreadable, or malformed
    /// file is logged and masked as an empty collection.
    async fn load(&self) -> CandidateDocument;

    /// Serializes the full document and replaces the persisted file.
    async fn save(&self, doc: &CandidateDocument) -> Result<(), StoreError>;

    /// Appends one candidate via a serialized read-modify-write cycle and
    /// returns it as stored. A failed save leaves the append uncommitted.
    async fn append(&self, candidate: Candidate) -> Result<Candidate, StoreError>;

    /// Writes the fixed sample dataset when the store holds no candidates.
    /// Returns whether seeding happened.
    async fn seed_if_empty(&self) -> Result<bool, StoreError>;
}

/// Production store over a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles so concurrent appends cannot
    /// overwrite each other.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Writes through a named temp file in the target directory, then
    /// renames over the destination so readers never observe a partial
    /// document.
    fn write_document(&self, doc: &CandidateDocument) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(doc)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

#[async_trait]
impl CandidateStore for JsonFileStore {
    async fn load(&self) -> CandidateDocument {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "Could not read candidate database at {}: {e}",
                    self.path.display()
                );
                return CandidateDocument::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(
                    "Malformed candidate database at {}: {e}",
                    self.path.display()
                );
                CandidateDocument::default()
            }
        }
    }

    async fn save(&self, doc: &CandidateDocument) -> Result<(), StoreError> {
        if let Err(e) = self.write_document(doc) {
            error!(
                "Failed to write candidate database at {}: {e}",
                self.path.display()
            );
            return Err(e);
        }
        Ok(())
    }

    async fn append(&self, candidate: Candidate) -> Result<Candidate, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.load().await;
        doc.candidates.push(candidate.clone());
        self.save(&doc).await?;
        Ok(candidate)
    }

    async fn seed_if_empty(&self) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        if !self.load().await.candidates.is_empty() {
            return Ok(false);
        }
        let doc = CandidateDocument {
            candidates: sample_candidates(),
        };
        self.save(&doc).await?;
        info!("Initialized candidate database with sample data");
        Ok(true)
    }
}

/// Fixed demo dataset written on first run.
pub fn sample_candidates() -> Vec<Candidate> {
    fn entry(
        id: &str,
        name: &str,
        title: &str,
        department: &str,
        description: &str,
        skills: &[&str],
        experience: &str,
        location: &str,
    ) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: name.to_string(),
            title: title.to_string(),
            department: department.to_string(),
            description: description.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: experience.to_string(),
            location: location.to_string(),
        }
    }

    vec![
        entry(
            "1",
            "Alex Johnson",
            "Senior Software Engineer",
            "Engineering",
            "Experienced full-stack developer with expertise in JavaScript frameworks.",
            &["JavaScript", "React", "Node.js", "TypeScript"],
            "7",
            "San Francisco",
        ),
        entry(
            "2",
            "Maria Garcia",
            "UX Designer",
            "Design",
            "Creative designer focused on user-centered design principles.",
            &["UI/UX", "Figma", "Prototyping", "User Research"],
            "4",
            "New York",
        ),
        entry(
            "3",
            "James Wilson",
            "Marketing Manager",
            "Marketing",
            "Digital marketing expert with strong analytics skills.",
            &["Digital Marketing", "SEO", "Content Strategy"],
            "5",
            "Chicago",
        ),
        entry(
            "4",
            "Sarah Lee",
            "HR Specialist",
            "HR",
            "Dedicated HR professional with focus on talent development.",
            &["Recruitment", "Training", "Employee Relations"],
            "3",
            "Boston",
        ),
        entry(
            "5",
            "David Kim",
            "Sales Director",
            "Sales",
            "Proven track record in enterprise sales and account management.",
            &["B2B Sales", "Account Management", "Negotiation"],
            "8",
            "Austin",
        ),
        entry(
            "6",
            "Priya Patel",
            "Quality Assurance Engineer",
            "Engineering",
            "Detail-oriented QA engineer with automation experience.",
            &["Testing", "Automation", "Selenium", "Python"],
            "2",
            "Remote",
        ),
    ]
}
