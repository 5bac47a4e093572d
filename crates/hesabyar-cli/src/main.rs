// Hesabyar CLI entry point

use hesabyar_cli::{output, router::CommandRouter};

#[tokio::main]
async fn main() {
    // Pick up GEMINI_API_KEY from a local .env if present
    dotenv::dotenv().ok();

    let result = CommandRouter::route().await;

    if let Err(e) = result {
        output::print_error(&e.user_message());
        std::process::exit(1);
    }
}
