//! Daily time allocation heuristic.
//!
//! Weak subjects each get 60% of the daily budget. The remaining 40% is divided
//! by the *total* subject count (weak ones included) and handed to each normal
//! subject. The divisor is intentional and must stay the total count.

use serde::{Deserialize, Serialize};

/// Share of the daily budget given to every weak subject.
pub const WEAK_WEIGHT: f64 = 0.6;

/// Share of the daily budget split across normal subjects.
pub const NORMAL_WEIGHT: f64 = 0.4;

/// The daily study time assigned to one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub subject: String,
    /// Hours per day, rounded to one decimal place.
    pub hours: f64,
    pub is_weak: bool,
}

impl AllocationEntry {
    /// Render the entry as one line of the prompt.
    pub fn render(&self) -> String {
        if self.is_weak {
            format!(
                "{}: {} hours (focus on weak areas)",
                self.subject,
                format_hours(self.hours)
            )
        } else {
            format!("{}: {} hours", self.subject, format_hours(self.hours))
        }
    }
}

/// Split `daily_hours` across subjects.
///
/// Weak entries come first in the order of `weak_subjects`, followed by every
/// subject of `subjects` that is not weak, in input order. `weak_subjects` is
/// not required to be a subset of `subjects`. Never fails.
pub fn allocate<S: AsRef<str>>(
    daily_hours: f64,
    subjects: &[S],
    weak_subjects: &[S],
) -> Vec<AllocationEntry> {
    let weak_share = round1(daily_hours * WEAK_WEIGHT);
    let normal_share = round1(daily_hours * NORMAL_WEIGHT);
    let divisor = subjects.len().max(1) as f64;
    let per_normal = round1(normal_share / divisor);

    let is_weak = |subject: &str| weak_subjects.iter().any(|w| w.as_ref() == subject);

    let weak = weak_subjects.iter().map(|s| AllocationEntry {
        subject: s.as_ref().to_string(),
        hours: weak_share,
        is_weak: true,
    });

    let normal = subjects
        .iter()
        .filter(|s| !is_weak(s.as_ref()))
        .map(|s| AllocationEntry {
            subject: s.as_ref().to_string(),
            hours: per_normal,
            is_weak: false,
        });

    weak.chain(normal).collect()
}

/// Round to one decimal place.
///
/// Rounds the exact binary value, so `0.15` (stored as 0.1499…) becomes `0.1`
/// and only true ties such as `0.25` go to the even digit. Scaling by ten first
/// would push near-ties onto `.5` and round them the wrong way.
pub fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Format an already-rounded hour value with exactly one decimal (`2.0`, `0.4`).
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.1}")
}
