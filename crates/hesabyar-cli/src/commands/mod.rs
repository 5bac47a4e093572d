//! Command implementations

pub mod ask;
pub mod repl;
pub mod table;

use hesabyar_core::view::LOADING_MESSAGE;
use hesabyar_core::{view, QueryHandler, SubmitOutcome};
use hesabyar_providers::ExplanationSource;

use crate::output::OutputStyle;
use crate::progress;

/// Submit one line and print the resulting view
///
/// The spinner clears on every path: `submit` always returns with a
/// non-loading state, success or not.
pub(crate) async fn submit_and_render<S: ExplanationSource>(
    handler: &mut QueryHandler<S>,
    input: &str,
    style: &OutputStyle,
) {
    let spinner = progress::create_spinner(LOADING_MESSAGE);
    let outcome = handler.submit(input).await;
    spinner.finish_and_clear();

    if outcome != SubmitOutcome::Dispatched {
        return;
    }

    let rendered = style.render_view(&view(handler.state()));
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
}
