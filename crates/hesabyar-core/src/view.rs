//! Pure projection from request state to a renderable description
//!
//! The CLI maps [`View`] variants to terminal output; nothing here prints.

use hesabyar_providers::AccountExplanation;

use crate::handler::{QueryResult, RequestState};

/// Shown while a request is outstanding
pub const LOADING_MESSAGE: &str = "در حال دریافت پاسخ...";

/// Renderable description of the current state
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Nothing to show yet
    Idle,
    /// Loading indicator
    Loading,
    /// Four labelled rows plus the practical-tip panel
    Table { explanation: AccountExplanation },
    /// Fallback text shown as the result, without a warning
    Text { body: String },
    /// Warning line plus fallback text
    Error { message: String, body: String },
}

/// Map a request state to its view
pub fn view(state: &RequestState) -> View {
    match state {
        RequestState::Idle => View::Idle,
        RequestState::Loading => View::Loading,
        RequestState::Succeeded(QueryResult::Structured(explanation)) => View::Table {
            explanation: explanation.clone(),
        },
        RequestState::Succeeded(QueryResult::Fallback(body)) => View::Text { body: body.clone() },
        RequestState::Failed { message, fallback } => View::Error {
            message: message.clone(),
            body: fallback.clone(),
        },
    }
}
