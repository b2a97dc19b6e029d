#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! worldbook — knowledge-base lookups for agents from the CLI.

mod api;
mod cli;
mod commands;
mod config;
mod types;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    commands::dispatch(&cli);
}
