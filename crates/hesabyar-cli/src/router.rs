// Command routing and dispatch

use clap::{Parser, Subcommand};
use hesabyar_providers::GeminiSettings;

use crate::commands;
use crate::error::CliResult;
use crate::logging;

/// Hesabyar - terminal tutor for double-entry account natures
#[derive(Parser, Debug)]
#[command(name = "hesab")]
#[command(bin_name = "hesab")]
#[command(about = "Terminal tutor for double-entry account natures")]
#[command(
    long_about = "Hesabyar: ask about any account or transaction name and get a structured \
explanation of its classification and debit/credit nature from Gemini.\n\nWhen the service is \
unreachable, answers come from the built-in reference table instead.\n\nQuick start:\n  \
hesab                 Interactive prompt loop\n  hesab ask بانک        One-shot question\n  \
hesab table           Print the reference table"
)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// API key (default: the GEMINI_API_KEY environment variable)
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Model to use
    #[arg(short, long, global = true, value_name = "MODEL")]
    pub model: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Explain one account name and exit
    #[command(about = "Explain one account name and exit")]
    Ask {
        /// Account or transaction name to explain
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Interactive prompt loop (default)
    #[command(about = "Enter the interactive prompt loop")]
    Repl,

    /// Print the built-in reference table
    #[command(about = "Print the built-in reference table of account natures")]
    Table,
}

impl Cli {
    /// Settings carried into the provider layer
    pub fn settings(&self) -> GeminiSettings {
        GeminiSettings {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            ..GeminiSettings::default()
        }
    }
}

/// Parses arguments and dispatches to command implementations
pub struct CommandRouter;

impl CommandRouter {
    /// Route and execute the invoked command
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();
        logging::init(cli.verbose, cli.quiet);

        let settings = cli.settings();
        match cli.command.unwrap_or(Commands::Repl) {
            Commands::Ask { query } => commands::ask::run(&query, &settings).await,
            Commands::Repl => commands::repl::run(&settings).await,
            Commands::Table => commands::table::run(),
        }
    }
}
