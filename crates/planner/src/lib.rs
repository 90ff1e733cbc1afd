//! Study plan orchestration.
//!
//! A plan is produced by one fixed chain:
//!
//! 1. **Allocate** the daily hours across subjects
//! 2. **Build** the prompt from the request and allocation
//! 3. **Complete** the prompt with the configured provider, exactly once
//!
//! The completion text is returned unchanged. If the provider call fails the
//! whole operation fails; no partial plan is ever handed out.

pub mod planner;

pub use planner::{GeneratedPlan, PlanDraft, StudyPlanner};
