//! Study request value types and form-boundary validation.

use serde::{Deserialize, Serialize};

use crate::allocation::{AllocationEntry, allocate, round1};
use crate::error::ValidationError;

/// Everything the student tells us about their preparation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyRequest {
    pub class_level: String,
    pub subjects: Vec<String>,
    /// Subjects needing extra focus. Not checked against `subjects`.
    #[serde(default)]
    pub weak_subjects: Vec<String>,
    pub daily_hours: f64,
    pub exam_days: u32,
}

impl StudyRequest {
    /// Run the allocation heuristic for this request.
    pub fn allocation(&self) -> Vec<AllocationEntry> {
        allocate(self.daily_hours, &self.subjects, &self.weak_subjects)
    }

    /// Headline numbers shown next to the form.
    pub fn summary(&self) -> PlanSummary {
        let total_hours = self.daily_hours * f64::from(self.exam_days);
        let subject_count = self.subjects.len();
        let hours_per_subject = if subject_count == 0 {
            0.0
        } else {
            round1(total_hours / subject_count as f64)
        };

        PlanSummary {
            total_hours,
            subject_count,
            hours_per_subject,
        }
    }

    /// File name used when the plan is exported.
    pub fn export_file_name(&self) -> String {
        export_file_name(&self.class_level)
    }
}

/// `study_plan_<class level, spaces replaced by underscores>.txt`
pub fn export_file_name(class_level: &str) -> String {
    format!("study_plan_{}.txt", class_level.replace(' ', "_"))
}

/// Quick statistics for a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub total_hours: f64,
    pub subject_count: usize,
    pub hours_per_subject: f64,
}

/// Range constraints enforced at the interactive boundary.
///
/// The allocator itself accepts any input; these limits only gate what a user
/// may submit through the form or the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormLimits {
    pub min_exam_days: u32,
    pub max_exam_days: u32,
    pub min_daily_hours: f64,
    pub max_daily_hours: f64,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            min_exam_days: 1,
            max_exam_days: 365,
            min_daily_hours: 1.0,
            max_daily_hours: 8.0,
        }
    }
}

impl FormLimits {
    /// Check a request against the form constraints.
    pub fn validate(&self, request: &StudyRequest) -> Result<(), ValidationError> {
        if request.class_level.trim().is_empty() {
            return Err(ValidationError::BlankClassLevel);
        }

        if request.subjects.is_empty() {
            return Err(ValidationError::NoSubjects);
        }

        if !(self.min_exam_days..=self.max_exam_days).contains(&request.exam_days) {
            return Err(ValidationError::ExamDaysOutOfRange {
                value: request.exam_days,
                min: self.min_exam_days,
                max: self.max_exam_days,
            });
        }

        // NaN fails the range check as well
        if !(self.min_daily_hours..=self.max_daily_hours).contains(&request.daily_hours) {
            return Err(ValidationError::DailyHoursOutOfRange {
                value: request.daily_hours,
                min: self.min_daily_hours,
                max: self.max_daily_hours,
            });
        }

        Ok(())
    }
}
