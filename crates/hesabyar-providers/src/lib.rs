//! Hesabyar providers - Gemini integration behind a mockable seam
//!
//! This crate owns everything that talks to the generative-language API:
//! the [`ExplanationSource`] trait the query handler is generic over, the
//! [`GeminiClient`] implementation, and the wire/configuration types.

pub mod config;
pub mod error;
pub mod gemini;
pub mod models;
pub mod source;

// Re-export commonly used types
pub use config::GeminiSettings;
pub use error::ProviderError;
pub use gemini::GeminiClient;
pub use models::{AccountExplanation, ExplainRequest, ModelInfo};
pub use source::ExplanationSource;
