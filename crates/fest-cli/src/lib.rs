//! # fest-cli — Operator Tooling for fest-stack
//!
//! Subcommand handler modules for the `fest` binary. Each module exposes its
//! clap `Args` struct and a `run`-style function; `main.rs` assembles the
//! command tree and dispatches.

pub mod campaign;
pub mod participant;
