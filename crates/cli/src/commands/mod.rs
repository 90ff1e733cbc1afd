pub mod doctor;
pub mod init;
pub mod plan;
pub mod preview;
pub mod serve;

use clap::Args;
use studyplan_config::FormConfig;
use studyplan_core::StudyRequest;

/// Student inputs shared by `plan` and `preview`.
///
/// Anything left out falls back to the `[form]` defaults in config.toml.
#[derive(Debug, Clone, Default, Args)]
pub struct RequestArgs {
    /// Class or education level, e.g. "Class 10"
    #[arg(long)]
    pub class_level: Option<String>,

    /// Comma-separated subjects
    #[arg(long, value_delimiter = ',')]
    pub subjects: Option<Vec<String>>,

    /// Comma-separated subjects needing extra focus (pass "" for none)
    #[arg(long, value_delimiter = ',')]
    pub weak: Option<Vec<String>>,

    /// Daily study hours available
    #[arg(long)]
    pub daily_hours: Option<f64>,

    /// Days until the exam
    #[arg(long)]
    pub exam_days: Option<u32>,
}

impl RequestArgs {
    /// Merge the flags over the configured form defaults.
    pub fn to_request(&self, form: &FormConfig) -> StudyRequest {
        StudyRequest {
            class_level: self
                .class_level
                .clone()
                .unwrap_or_else(|| form.default_class_level.clone()),
            subjects: self
                .subjects
                .as_deref()
                .map(clean_list)
                .unwrap_or_else(|| form.default_subjects.clone()),
            weak_subjects: self
                .weak
                .as_deref()
                .map(clean_list)
                .unwrap_or_else(|| form.default_weak_subjects.clone()),
            daily_hours: self.daily_hours.unwrap_or(form.default_daily_hours),
            exam_days: self.exam_days.unwrap_or(form.default_exam_days),
        }
    }
}

fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
