//! The explanation-source seam

use async_trait::async_trait;

use crate::{
    error::ProviderError,
    models::{AccountExplanation, ExplainRequest},
};

/// Trait the query handler is generic over
///
/// One implementation talks to Gemini ([`crate::GeminiClient`]); tests
/// substitute their own.
#[async_trait]
pub trait ExplanationSource: Send + Sync {
    /// Request a structured explanation for one query
    ///
    /// Exactly one outbound call per invocation; implementations do not
    /// retry.
    async fn explain(&self, request: ExplainRequest) -> Result<AccountExplanation, ProviderError>;
}
