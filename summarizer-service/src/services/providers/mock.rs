//! Mock provider implementation for testing.

use super::{GenerationRequest, ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Deterministic stand-in for a hosted model.
///
/// Always returns the scripted outcome and remembers the last request it saw.
pub struct MockTextProvider {
    outcome: Result<String, ProviderError>,
    last_request: Mutex<Option<GenerationRequest>>,
    calls: AtomicUsize,
}

impl MockTextProvider {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_outcome(Ok(text.into()))
    }

    pub fn failing(error: ProviderError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<String, ProviderError>) -> Self {
        Self {
            outcome,
            last_request: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request.clone());
        }
        self.outcome.clone()
    }
}
