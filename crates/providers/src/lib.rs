//! Completion provider implementations for StudyPlan.
//!
//! All providers implement the `studyplan_core::Provider` trait.
//! [`builder::build_from_config`] turns an `AppConfig` into a ready provider.

pub mod builder;
pub mod openai_compat;

pub use builder::{build_from_config, default_base_url};
pub use openai_compat::OpenAiCompatProvider;
