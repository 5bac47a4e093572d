//! Data models for the explanation seam

use serde::{Deserialize, Serialize};

/// Structured explanation of one account, as returned by the service
///
/// Field values are rendered exactly as received; nothing downstream
/// rewrites them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountExplanation {
    /// Account name, normalized by the model
    pub account_name: String,
    /// Classification: asset, liability, equity, revenue or expense
    pub account_type: String,
    /// Debit or credit nature
    pub nature: String,
    /// Short explanation of why the account has that nature
    pub explanation: String,
    /// A practical bookkeeping tip for this account
    pub practical_tip: String,
}

/// One explanation request
#[derive(Debug, Clone)]
pub struct ExplainRequest {
    /// The user-entered account or transaction name
    pub query: String,
    /// Model to use
    pub model: String,
}

impl ExplainRequest {
    /// Build a request for the given query against a model id
    pub fn new(query: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            model: model.into(),
        }
    }
}

/// Information about an available model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Unique model identifier
    pub id: String,
    /// Human-readable model name
    pub name: String,
    /// Maximum context window in tokens
    pub context_window: usize,
}
