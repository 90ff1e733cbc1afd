//! The study planner: allocation → prompt → single completion call.

use std::sync::Arc;

use serde::Serialize;
use studyplan_config::{AppConfig, ConfigError};
use studyplan_core::allocation::AllocationEntry;
use studyplan_core::message::Message;
use studyplan_core::prompt::{SYSTEM_PROMPT, build_prompt};
use studyplan_core::provider::{Provider, ProviderRequest, Usage};
use studyplan_core::request::StudyRequest;
use tracing::{debug, info, warn};

/// The deterministic half of a plan: allocation plus the rendered prompt.
#[derive(Debug, Clone, Serialize)]
pub struct PlanDraft {
    pub allocation: Vec<AllocationEntry>,
    pub prompt: String,
}

impl PlanDraft {
    /// Allocate and render without contacting any provider.
    pub fn new(request: &StudyRequest) -> Self {
        let allocation = request.allocation();
        let prompt = build_prompt(request, &allocation);
        Self { allocation, prompt }
    }
}

/// A finished plan together with the inputs that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPlan {
    /// The completion text, verbatim
    pub plan: String,
    pub allocation: Vec<AllocationEntry>,
    /// Model that actually answered
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// Configured handle that turns study requests into plans.
///
/// Holds no mutable state, so one instance can serve concurrent requests
/// behind an `Arc`.
pub struct StudyPlanner {
    /// The completion provider
    provider: Arc<dyn Provider>,

    /// Model identifier sent with every request
    model: String,

    /// Sampling temperature
    temperature: f32,

    /// Max tokens per plan
    max_tokens: u32,
}

impl StudyPlanner {
    /// Create a planner with the reference sampling parameters.
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: 0.6,
            max_tokens: 400,
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the max tokens per plan.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    /// Build a planner from configuration.
    ///
    /// This is the explicit initialization step: a missing credential is
    /// reported here, before any request is allocated or sent.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let provider = studyplan_providers::build_from_config(config)?;
        Ok(Self::new(provider, &config.model)
            .with_temperature(config.temperature)
            .with_max_tokens(config.max_tokens))
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Model identifier used for completions.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Reachability check against the provider.
    pub async fn ping(&self) -> studyplan_core::Result<bool> {
        Ok(self.provider.health_check().await?)
    }

    /// The provider request for a rendered prompt: persona + prompt.
    pub fn provider_request(&self, prompt: &str) -> ProviderRequest {
        ProviderRequest {
            model: self.model.clone(),
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(prompt)],
            temperature: self.temperature,
            max_tokens: Some(self.max_tokens),
        }
    }

    /// Generate a study plan and return the completion text unchanged.
    pub async fn generate(&self, request: &StudyRequest) -> studyplan_core::Result<String> {
        Ok(self.generate_detailed(request).await?.plan)
    }

    /// Generate a study plan, keeping the allocation and usage alongside it.
    pub async fn generate_detailed(
        &self,
        request: &StudyRequest,
    ) -> studyplan_core::Result<GeneratedPlan> {
        let draft = PlanDraft::new(request);

        info!(
            class_level = %request.class_level,
            subjects = request.subjects.len(),
            weak_subjects = request.weak_subjects.len(),
            exam_days = request.exam_days,
            "Generating study plan"
        );
        debug!(prompt_len = draft.prompt.len(), "Prompt built");

        let response = self
            .provider
            .complete(self.provider_request(&draft.prompt))
            .await
            .inspect_err(|e| warn!(provider = %self.provider.name(), error = %e, "Completion failed"))?;

        info!(
            model = %response.model,
            plan_len = response.message.content.len(),
            "Study plan generated"
        );

        Ok(GeneratedPlan {
            plan: response.message.content,
            allocation: draft.allocation,
            model: response.model,
            usage: response.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use studyplan_core::error::{Error, ProviderError};
    use studyplan_core::message::Role;
    use studyplan_core::provider::ProviderResponse;

    /// Records every request and answers with a fixed outcome.
    struct RecordingProvider {
        outcome: Result<String, ProviderError>,
        requests: Mutex<Vec<ProviderRequest>>,
    }

    impl RecordingProvider {
        fn replying(text: &str) -> Self {
            Self {
                outcome: Ok(text.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: ProviderError) -> Self {
            Self {
                outcome: Err(err),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl Provider for RecordingProvider {
        fn name(&self) -> &str {
            "recording_mock"
        }

        async fn complete(
            &self,
            request: ProviderRequest,
        ) -> Result<ProviderResponse, ProviderError> {
            let model = request.model.clone();
            self.requests.lock().unwrap().push(request);
            self.outcome.clone().map(|text| ProviderResponse {
                message: Message::assistant(text),
                usage: None,
                model,
            })
        }
    }

    fn sample() -> StudyRequest {
        StudyRequest {
            class_level: "Class 10".into(),
            subjects: vec!["Maths".into(), "Science".into(), "English".into()],
            weak_subjects: vec!["Maths".into()],
            daily_hours: 3.0,
            exam_days: 20,
        }
    }

    #[tokio::test]
    async fn returns_completion_verbatim() {
        let provider = Arc::new(RecordingProvider::replying("  Week 1:\n- Maths drills\n"));
        let planner = StudyPlanner::new(provider.clone(), "llama-3.1-8b-instant");

        let plan = planner.generate(&sample()).await.unwrap();
        assert_eq!(plan, "  Week 1:\n- Maths drills\n");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn request_carries_persona_prompt_and_parameters() {
        let provider = Arc::new(RecordingProvider::replying("ok"));
        let planner = StudyPlanner::new(provider.clone(), "llama-3.1-8b-instant");
        planner.generate(&sample()).await.unwrap();

        let requests = provider.requests.lock().unwrap();
        let req = &requests[0];
        assert_eq!(req.model, "llama-3.1-8b-instant");
        assert!((req.temperature - 0.6).abs() < f32::EPSILON);
        assert_eq!(req.max_tokens, Some(400));
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, Role::System);
        assert_eq!(req.messages[0].content, SYSTEM_PROMPT);
        assert_eq!(req.messages[1].role, Role::User);
        assert!(req.messages[1].content.contains("Maths: 1.8 hours (focus on weak areas)"));
        assert!(req.messages[1].content.contains("Science: 0.4 hours"));
    }

    #[tokio::test]
    async fn zero_hours_still_calls_provider() {
        let provider = Arc::new(RecordingProvider::replying("rest up"));
        let planner = StudyPlanner::new(provider.clone(), "m");
        let request = StudyRequest {
            daily_hours: 0.0,
            ..sample()
        };

        let generated = planner.generate_detailed(&request).await.unwrap();
        assert!(generated.allocation.iter().all(|e| e.hours == 0.0));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn upstream_failure_fails_whole_operation_once() {
        let provider = Arc::new(RecordingProvider::failing(ProviderError::ApiError {
            status_code: 503,
            message: "overloaded".into(),
        }));
        let planner = StudyPlanner::new(provider.clone(), "m");

        let err = planner.generate(&sample()).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Upstream(ProviderError::ApiError { status_code: 503, .. })
        ));
        assert_eq!(provider.calls(), 1, "no retries");
    }

    #[tokio::test]
    async fn builder_overrides_sampling() {
        let provider = Arc::new(RecordingProvider::replying("ok"));
        let planner = StudyPlanner::new(provider.clone(), "m")
            .with_temperature(0.2)
            .with_max_tokens(128);
        planner.generate(&sample()).await.unwrap();

        let requests = provider.requests.lock().unwrap();
        assert!((requests[0].temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(requests[0].max_tokens, Some(128));
    }

    #[test]
    fn from_config_without_key_is_config_error() {
        let result = StudyPlanner::from_config(&AppConfig::default());
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn from_config_uses_configured_model() {
        let config = AppConfig {
            api_key: Some("gsk-test".into()),
            model: "llama-3.3-70b-versatile".into(),
            ..AppConfig::default()
        };
        let planner = StudyPlanner::from_config(&config).unwrap();
        assert_eq!(planner.model(), "llama-3.3-70b-versatile");
        assert_eq!(planner.provider_name(), "groq");
    }

    #[test]
    fn draft_matches_prompt_builder() {
        let draft = PlanDraft::new(&sample());
        assert_eq!(draft.allocation.len(), 3);
        assert!(draft.prompt.starts_with("Student details:\n"));
    }
}
