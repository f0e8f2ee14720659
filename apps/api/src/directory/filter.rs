//! Pure, order-preserving filtering over an in-memory candidate list.

use crate::models::candidate::Candidate;

/// Experience bands offered by the directory filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceBand {
    /// 0–2 years.
    Junior,
    /// 3–5 years.
    Mid,
    /// 5 years or more.
    Senior,
}

impl ExperienceBand {
    /// Parses a band value as it arrives from the UI. Unknown values yield
    /// `None`, which matches everything downstream.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "0-2" => Some(Self::Junior),
            "3-5" => Some(Self::Mid),
            "5+" => Some(Self::Senior),
            _ => None,
        }
    }

    fn contains(self, years: u32) -> bool {
        match self {
            Self::Junior => years <= 2,
            Self::Mid => (3..=5).contains(&years),
            Self::Senior => years >= 5,
        }
    }
}

/// The combined set of filter predicates, applied with logical AND.
/// An absent or empty criterion matches everything.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name, title, department,
    /// description, location, or any skill.
    pub term: Option<String>,
    /// Exact department match.
    pub department: Option<String>,
    /// Skill membership (exact tag).
    pub skill: Option<String>,
    pub experience: Option<ExperienceBand>,
}

impl FilterCriteria {
    pub fn matches(&self, candidate: &Candidate) -> bool {
        self.matches_term(candidate)
            && self.matches_department(candidate)
            && self.matches_skill(candidate)
            && self.matches_experience(candidate)
    }

    fn matches_term(&self, candidate: &Candidate) -> bool {
        let term = match self.term.as_deref() {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => return true,
        };
        let hit = |field: &str| field.to_lowercase().contains(&term);
        hit(&candidate.name)
            || hit(&candidate.title)
            || hit(&candidate.department)
            || hit(&candidate.description)
            || hit(&candidate.location)
            || candidate.skills.iter().any(|s| hit(s))
    }

    fn matches_department(&self, candidate: &Candidate) -> bool {
        match self.department.as_deref() {
            Some(d) if !d.is_empty() => candidate.department == d,
            _ => true,
        }
    }

    fn matches_skill(&self, candidate: &Candidate) -> bool {
        match self.skill.as_deref() {
            Some(s) if !s.is_empty() => candidate.skills.iter().any(|tag| tag == s),
            _ => true,
        }
    }

    fn matches_experience(&self, candidate: &Candidate) -> bool {
        match self.experience {
            Some(band) => {
                matches!(parse_years(&candidate.experience), Some(years) if band.contains(years))
            }
            None => true,
        }
    }
}

/// Returns the subsequence matching `criteria`, input order preserved.
pub fn filter_candidates(candidates: &[Candidate], criteria: &FilterCriteria) -> Vec<Candidate> {
    candidates
        .iter()
        .filter(|c| criteria.matches(c))
        .cloned()
        .collect()
}

/// Parses the leading integer of an experience value ("7" and "7 years"
/// both give 7). `None` when the text has no leading digits; such values
/// never match an experience band.
pub fn parse_years(raw: &str) -> Option<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
