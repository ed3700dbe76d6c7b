//! Shared test helpers for service tests.

use async_trait::async_trait;
use parley_core::error::{KnowledgeError, ProviderError};
use parley_core::knowledge::{KnowledgeSource, ReferenceResult};
use parley_core::provider::{Provider, ProviderRequest, ProviderResponse, Usage};
use std::sync::Mutex;

/// A mock provider that plays back scripted outcomes in order and records
/// every request it receives.
///
/// Panics if more calls are made than outcomes provided.
pub struct ScriptedProvider {
    outcomes: Mutex<Vec<Result<String, ProviderError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedProvider {
    pub fn new(outcomes: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().rev().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Successful replies only.
    pub fn replies<const N: usize>(texts: [&str; N]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let model = request.model.clone();
        self.requests.lock().unwrap().push(request);
        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .pop()
            .expect("ScriptedProvider: no more outcomes");
        outcome.map(|content| ProviderResponse {
            content,
            usage: Some(Usage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            }),
            model,
        })
    }
}

/// A knowledge source with one fixed answer.
pub struct StaticKnowledge {
    result: Option<ReferenceResult>,
}

impl StaticKnowledge {
    pub fn new(result: Option<ReferenceResult>) -> Self {
        Self { result }
    }
}

#[async_trait]
impl KnowledgeSource for StaticKnowledge {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_summary(&self, _query: &str) -> Result<Option<ReferenceResult>, KnowledgeError> {
        Ok(self.result.clone())
    }
}
