//! Command line definition for the `seed` binary.

use clap::Parser;

use crate::command::HELP;

/// The seed command takes no arguments; `--help` prints [`HELP`].
#[derive(Parser, Debug)]
#[command(name = "seed")]
#[command(about = HELP)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct SeedArgs {}
