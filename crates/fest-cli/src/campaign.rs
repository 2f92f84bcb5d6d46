//! # Campaign Configuration Commands
//!
//! Writes the YAML campaign configuration the other commands read their
//! thresholds and campaign window from.

use std::path::PathBuf;

use clap::Args;

use fest_core::Timestamp;
use fest_service::CampaignConfig;

/// Arguments for `fest init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path to write the campaign configuration.
    #[arg(long, default_value = "fest.yaml")]
    pub config: PathBuf,

    /// Campaign name.
    #[arg(long, default_value = "hacktoberfest")]
    pub name: String,

    /// Campaign end, RFC 3339 (e.g. 2026-11-01T00:00:00Z).
    #[arg(long)]
    pub ends_at: Option<String>,
}

/// Write a campaign configuration file with default thresholds.
pub fn init(args: InitArgs) -> anyhow::Result<()> {
    let ends_at = args.ends_at.as_deref().map(Timestamp::parse).transpose()?;
    let config = CampaignConfig {
        name: args.name,
        ends_at,
        ..CampaignConfig::default()
    };
    config.save(&args.config)?;
    tracing::info!(path = %args.config.display(), "campaign configuration written");
    Ok(())
}
