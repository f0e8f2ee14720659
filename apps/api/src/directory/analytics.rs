//! Summary statistics, frequency tables, and the derived insight string.
//! Everything here is a pure function over a candidate sequence.

use std::collections::HashMap;
use std::fmt::Write;

use serde::Serialize;

use crate::directory::filter::parse_years;
use crate::models::candidate::Candidate;

/// Headline numbers for a candidate sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    /// Arithmetic mean of experience years, rounded to one decimal place.
    /// Zero for an empty sequence.
    pub average_experience: f64,
}

/// One ranked label, shaped for the skills chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyEntry {
    pub label: String,
    pub count: usize,
}

/// Fixed message for an empty filtered view.
pub const NO_DATA_INSIGHT: &str = "No talent found. Adjust filters for new insights.";

pub fn summarize(candidates: &[Candidate]) -> Summary {
    if candidates.is_empty() {
        return Summary {
            count: 0,
            average_experience: 0.0,
        };
    }
    let total: u32 = candidates
        .iter()
        .map(|c| parse_years(&c.experience).unwrap_or(0))
        .sum();
    Summary {
        count: candidates.len(),
        average_experience: round_one_decimal(f64::from(total) / candidates.len() as f64),
    }
}

/// Top-`k` most frequent values, descending by count. Ties keep the order
/// the values were first encountered in the input.
pub fn top_frequencies<'a, I>(values: I, k: usize) -> Vec<FrequencyEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut entries: Vec<FrequencyEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for value in values {
        match index.get(value) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(value.to_string(), entries.len());
                entries.push(FrequencyEntry {
                    label: value.to_string(),
                    count: 1,
                });
            }
        }
    }
    // sort_by is stable, so equal counts stay in first-seen order
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(k);
    entries
}

pub fn top_departments(candidates: &[Candidate], k: usize) -> Vec<FrequencyEntry> {
    top_frequencies(candidates.iter().map(|c| c.department.as_str()), k)
}

/// Skills flattened across all candidates.
pub fn top_skills(candidates: &[Candidate], k: usize) -> Vec<FrequencyEntry> {
    top_frequencies(
        candidates
            .iter()
            .flat_map(|c| c.skills.iter().map(String::as_str)),
        k,
    )
}

/// Derived natural-language summary for the insight panel: count, dominant
/// department, most prevalent skill, and average experience.
pub fn insight(candidates: &[Candidate]) -> String {
    if candidates.is_empty() {
        return NO_DATA_INSIGHT.to_string();
    }

    let summary = summarize(candidates);
    let mut text = format!("Current talent pool: {} entities. ", summary.count);
    if let Some(dept) = top_departments(candidates, 1).first() {
        let _ = write!(
            text,
            "Dominant department: {} ({} individuals). ",
            dept.label, dept.count
        );
    }
    if let Some(skill) = top_skills(candidates, 1).first() {
        let _ = write!(
            text,
            "Most prevalent skill: {} ({} instances). ",
            skill.label, skill.count
        );
    }
    let _ = write!(
        text,
        "Average neural index (experience): {:.1} years.",
        summary.average_experience
    );
    text
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
