//! Explicit view state over the directory: the fetched candidate list plus
//! the currently selected filter criteria. Replaces the ambient mutable
//! state a thin client would otherwise hold; applying new criteria replaces
//! the previous view and every derived value is recomputed from scratch.

use crate::directory::analytics::{insight, summarize, top_skills, FrequencyEntry, Summary};
use crate::directory::filter::{filter_candidates, FilterCriteria};
use crate::models::candidate::Candidate;

#[derive(Debug, Clone, Default)]
pub struct DirectoryView {
    candidates: Vec<Candidate>,
    criteria: FilterCriteria,
}

impl DirectoryView {
    /// A view over a freshly fetched candidate list, unfiltered.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            criteria: FilterCriteria::default(),
        }
    }

    /// Replaces the selected criteria.
    pub fn apply(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Candidates visible under the current criteria, storage order kept.
    pub fn visible(&self) -> Vec<Candidate> {
        filter_candidates(&self.candidates, &self.criteria)
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.visible())
    }

    pub fn top_skills(&self, k: usize) -> Vec<FrequencyEntry> {
        top_skills(&self.visible(), k)
    }

    pub fn insight(&self) -> String {
        insight(&self.visible())
    }
}
