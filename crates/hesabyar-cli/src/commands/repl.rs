//! Interactive prompt loop
//!
//! The terminal stand-in for the original submission form. The loop is
//! sequential, so a new line can never overlap an outstanding request.

use hesabyar_core::QueryHandler;
use hesabyar_providers::{GeminiClient, GeminiSettings};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::commands::submit_and_render;
use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;

const PROMPT: &str = "حساب> ";

pub async fn run(settings: &GeminiSettings) -> CliResult<()> {
    let client =
        GeminiClient::from_settings(settings).map_err(|e| CliError::Config(e.to_string()))?;
    let mut handler = QueryHandler::new(client, settings.model());
    let style = OutputStyle::default();

    let mut editor = DefaultEditor::new().map_err(|e| CliError::Internal(e.to_string()))?;

    println!("{}", style.header("آموزش ماهیت حساب‌ها"));
    println!("{}", style.info("نام حساب را وارد کنید (خروج با Ctrl+D)"));

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);
                submit_and_render(&mut handler, &line, &style).await;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(CliError::Internal(e.to_string())),
        }
    }

    Ok(())
}
