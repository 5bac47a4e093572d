//! Query handler: one submission, one outbound request, one state change

use hesabyar_providers::{
    AccountExplanation, ExplainRequest, ExplanationSource, ProviderError,
};
use tracing::{debug, warn};

use crate::reference::fallback_lookup;

/// Shown when the fallback filter yields nothing
pub const NO_RESULTS_MESSAGE: &str = "نتیجه‌ای پیدا نشد.";

/// Non-fatal warning shown when the service call failed and the table answered
pub const SEARCH_FAILED_MESSAGE: &str = "خطا در جستجو، از داده جدول استفاده شد.";

/// Result of one completed query
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    /// The service returned a parsed structured explanation
    Structured(AccountExplanation),
    /// The service answered without usable content; table text stands in
    Fallback(String),
}

/// State of the current request cycle
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    /// Nothing submitted yet
    Idle,
    /// A request is outstanding; further submissions are ignored
    Loading,
    /// The last submission produced a result
    Succeeded(QueryResult),
    /// The last submission failed; fallback text renders in place of an
    /// explanation
    Failed { message: String, fallback: String },
}

impl RequestState {
    /// True while a request is outstanding
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

/// What `submit` did with the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// One request was dispatched and the state changed exactly once
    Dispatched,
    /// Empty or whitespace-only input; no request, no state change
    IgnoredEmpty,
    /// A request was already outstanding; no second request
    IgnoredPending,
}

/// Drives one explanation request at a time against an injected source
pub struct QueryHandler<S> {
    source: S,
    model: String,
    state: RequestState,
}

impl<S: ExplanationSource> QueryHandler<S> {
    /// Create an idle handler over the given source and model id
    pub fn new(source: S, model: impl Into<String>) -> Self {
        Self {
            source,
            model: model.into(),
            state: RequestState::Idle,
        }
    }

    /// Current request state
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Submit one query
    ///
    /// Trimmed-empty input and submissions while a request is outstanding
    /// are no-ops. Otherwise exactly one request is dispatched, and every
    /// exit path leaves a non-loading state: the match over the source's
    /// result is exhaustive and each arm replaces `Loading`.
    pub async fn submit(&mut self, raw: &str) -> SubmitOutcome {
        let query = raw.trim();
        if query.is_empty() {
            return SubmitOutcome::IgnoredEmpty;
        }
        if self.state.is_loading() {
            warn!("submission ignored, a request is already outstanding");
            return SubmitOutcome::IgnoredPending;
        }

        self.state = RequestState::Loading;
        let request = ExplainRequest::new(query, self.model.clone());

        self.state = match self.source.explain(request).await {
            Ok(explanation) => {
                debug!("structured explanation received for {}", query);
                RequestState::Succeeded(QueryResult::Structured(explanation))
            }
            Err(ProviderError::EmptyResponse) => {
                debug!("response had no usable content, answering from table");
                RequestState::Succeeded(QueryResult::Fallback(fallback_or_no_results(query)))
            }
            Err(e) => {
                warn!("explanation request failed: {}", e);
                RequestState::Failed {
                    message: SEARCH_FAILED_MESSAGE.to_string(),
                    fallback: fallback_or_no_results(query),
                }
            }
        };

        SubmitOutcome::Dispatched
    }
}

/// Table text for the query, or the no-results literal; never empty
fn fallback_or_no_results(query: &str) -> String {
    fallback_lookup(query).unwrap_or_else(|| NO_RESULTS_MESSAGE.to_string())
}
