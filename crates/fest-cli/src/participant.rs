//! # Participant Commands
//!
//! Creates records and drives lifecycle transitions against the JSON file
//! store. The eligible pull-request count is supplied by the operator with
//! `--prs` — activity review is an external collaborator, so the CLI takes
//! its answer as input.

use std::path::PathBuf;

use clap::Args;

use fest_core::ParticipantId;
use fest_service::{
    CampaignConfig, FixedCampaignWindow, JsonFileStore, LifecycleService, LoggingNotifier,
    LoggingSegmentUpdater, ServiceError, StaticActivitySource,
};
use fest_state::Action;

/// The service wiring every CLI command runs against.
pub type CliService = LifecycleService<
    JsonFileStore,
    StaticActivitySource,
    FixedCampaignWindow,
    LoggingNotifier,
    LoggingSegmentUpdater,
>;

/// Store and configuration locations shared by all participant commands.
#[derive(Args, Debug)]
pub struct StoreOpts {
    /// Path to the participant store file.
    #[arg(long, default_value = "fest-store.json")]
    pub store: PathBuf,

    /// Path to the campaign configuration file.
    #[arg(long, default_value = "fest.yaml")]
    pub config: PathBuf,
}

impl StoreOpts {
    /// Build the service over the file store, with `prs` as the activity
    /// answer for every record.
    pub fn service(&self, prs: u32) -> anyhow::Result<CliService> {
        let config = CampaignConfig::load_or_default(&self.config)?;
        let store = JsonFileStore::open(&self.store)?;
        Ok(LifecycleService::new(
            store,
            StaticActivitySource::with_default(prs),
            config.window(),
            LoggingNotifier,
            LoggingSegmentUpdater,
            config.policy(),
        ))
    }
}

/// Arguments for `fest create`.
#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub store: StoreOpts,

    /// Contact email for the participant.
    #[arg(long)]
    pub email: Option<String>,

    /// Accept the participation terms at creation.
    #[arg(long)]
    pub accept_terms: bool,
}

/// Arguments for the transition commands (`register`, `wait`, ...).
#[derive(Args, Debug)]
pub struct TransitionArgs {
    #[command(flatten)]
    pub store: StoreOpts,

    /// Participant identifier.
    pub id: String,

    /// Eligible pull-request count, as reported by the activity reviewer.
    #[arg(long, default_value_t = 0)]
    pub prs: u32,
}

/// Arguments for `fest show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub store: StoreOpts,

    /// Participant identifier.
    pub id: String,
}

/// Create a new participant record and print its identifier.
pub fn create(args: CreateArgs) -> anyhow::Result<()> {
    let mut svc = args.store.service(0)?;
    let participant = svc.create_participant(args.email, args.accept_terms)?;
    println!("{} {}", participant.id, participant.state);
    Ok(())
}

/// Attempt a lifecycle transition and print the resulting state.
///
/// A guard rejection prints each keyed error and exits non-zero.
pub fn transition(args: TransitionArgs, action: Action) -> anyhow::Result<()> {
    let id = ParticipantId::parse(&args.id)?;
    let mut svc = args.store.service(args.prs)?;

    let result = match action {
        Action::Register => svc.register(&id),
        Action::Wait => svc.wait(&id),
        Action::Complete => svc.complete(&id),
        Action::Ineligible => svc.ineligible(&id),
        Action::Incomplete => svc.incomplete(&id),
    };

    match result {
        Ok(participant) => {
            println!("{} {}", participant.id, participant.state);
            Ok(())
        }
        Err(ServiceError::Rejected { errors }) => {
            for (key, messages) in errors.iter() {
                for message in messages {
                    eprintln!("{key}: {message}");
                }
            }
            anyhow::bail!("transition rejected")
        }
        Err(e) => Err(e.into()),
    }
}

/// Print a participant record as pretty JSON.
pub fn show(args: ShowArgs) -> anyhow::Result<()> {
    let id = ParticipantId::parse(&args.id)?;
    let svc = args.store.service(0)?;
    let participant = svc.participant(&id)?;
    println!("{}", serde_json::to_string_pretty(&participant)?);
    Ok(())
}
