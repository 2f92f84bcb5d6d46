//! # fest CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

use fest_state::Action;

/// fest — participation lifecycle tooling for contribution drives.
///
/// Creates participant records and moves them through the campaign
/// lifecycle against a JSON file store.
#[derive(Parser, Debug)]
#[command(name = "fest", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Write a campaign configuration file.
    Init(fest_cli::campaign::InitArgs),
    /// Create a new participant record.
    Create(fest_cli::participant::CreateArgs),
    /// Register a participant (new -> registered).
    Register(fest_cli::participant::TransitionArgs),
    /// Start the waiting period (registered -> waiting).
    Wait(fest_cli::participant::TransitionArgs),
    /// Complete the campaign (waiting -> completed).
    Complete(fest_cli::participant::TransitionArgs),
    /// Drop back after losing qualification (waiting -> registered).
    Ineligible(fest_cli::participant::TransitionArgs),
    /// Mark incomplete once the campaign has ended (registered -> incompleted).
    Incomplete(fest_cli::participant::TransitionArgs),
    /// Show a participant record.
    Show(fest_cli::participant::ShowArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => fest_cli::campaign::init(args),
        Commands::Create(args) => fest_cli::participant::create(args),
        Commands::Register(args) => fest_cli::participant::transition(args, Action::Register),
        Commands::Wait(args) => fest_cli::participant::transition(args, Action::Wait),
        Commands::Complete(args) => fest_cli::participant::transition(args, Action::Complete),
        Commands::Ineligible(args) => fest_cli::participant::transition(args, Action::Ineligible),
        Commands::Incomplete(args) => fest_cli::participant::transition(args, Action::Incomplete),
        Commands::Show(args) => fest_cli::participant::show(args),
    }
}
