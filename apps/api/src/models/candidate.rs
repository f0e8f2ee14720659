//! Candidate entity, the persisted collection document, and the typed
//! payload accepted at the add boundary.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single directory entry describing one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub title: String,
    pub department: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub location: String,
}

/// The persisted document: the full ordered collection of candidates,
/// insertion order preserved. Single source of truth on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateDocument {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Incoming payload for the add endpoint.
///
/// Every field defaults when absent so malformed submissions reach the
/// required-field validation instead of failing at deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCandidate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub location: String,
}

impl NewCandidate {
    /// `name`, `title`, and `department` must be non-empty after trimming.
    pub fn has_required_fields(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.title.trim().is_empty()
            && !self.department.trim().is_empty()
    }

    /// Consumes the payload, stamping a fresh id from the current Unix
    /// epoch milliseconds. Collisions under rapid concurrent adds are an
    /// accepted limitation.
    pub fn into_candidate(self) -> Candidate {
        Candidate {
            id: Utc::now().timestamp_millis().to_string(),
            name: self.name,
            title: self.title,
            department: self.department,
            description: self.description,
            skills: self.skills,
            experience: self.experience,
            location: self.location,
        }
    }
}
