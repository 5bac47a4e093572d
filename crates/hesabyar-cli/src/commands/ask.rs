//! One-shot question command

use hesabyar_core::QueryHandler;
use hesabyar_providers::{GeminiClient, GeminiSettings};

use crate::commands::submit_and_render;
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;

/// Ask about one account name and render the outcome
///
/// A degraded or failed lookup still renders and exits zero; only startup
/// problems (no usable API key) error out.
pub async fn run(query: &str, settings: &GeminiSettings) -> CliResult<()> {
    let client =
        GeminiClient::from_settings(settings).map_err(|e| CliError::Config(e.to_string()))?;
    let mut handler = QueryHandler::new(client, settings.model());
    let style = OutputStyle::default();

    submit_and_render(&mut handler, query, &style).await;
    Ok(())
}
