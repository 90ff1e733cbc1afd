//! # StudyPlan Core
//!
//! Domain types, traits, and error definitions for the StudyPlan generator.
//! This crate has **no I/O** — it holds the allocation heuristic, the prompt
//! template, and the `Provider` abstraction the other crates implement against.
//!
//! ## Pipeline
//!
//! 1. [`allocation::allocate`] splits the daily hours across subjects
//! 2. [`prompt::build_prompt`] renders the request and allocation into a prompt
//! 3. A [`Provider`] turns the prompt into the final plan text

pub mod allocation;
pub mod error;
pub mod message;
pub mod prompt;
pub mod provider;
pub mod request;

// Re-export key types at crate root for ergonomics
pub use allocation::{AllocationEntry, allocate};
pub use error::{Error, ProviderError, Result, ValidationError};
pub use message::{Message, Role};
pub use prompt::{SYSTEM_PROMPT, build_prompt};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
pub use request::{FormLimits, PlanSummary, StudyRequest, export_file_name};
