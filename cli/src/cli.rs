use clap::{Parser, Subcommand};
use eyre::Result as EyreResult;

mod presets;
mod run;

use presets::PresetsCommand;
use run::RunCommand;

pub const AFTER_HELP: &str = r"Environment variables:
  RUST_LOG    Log filter (default: queue_sim=info,queue_simulator_core_rs=warn)

Examples:
  # Run the 5-client demo
  $ queue-sim run --preset demo

  # Two servers with VIP passes, seeded samples, JSON output
  $ queue-sim run --preset multi-server-vip --seed 42 --format json

  # Custom configuration and samples
  $ queue-sim run --config line.json --samples samples.json
";

#[derive(Debug, Parser)]
#[command(author, version, about = "Discrete-event waiting-line simulator", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct RootCommand {
    #[command(subcommand)]
    pub action: SubCommands,
}

#[derive(Debug, Subcommand)]
pub enum SubCommands {
    /// Run one simulation and print its results
    Run(RunCommand),
    /// List the built-in presets
    Presets(PresetsCommand),
}

impl RootCommand {
    pub fn run(self) -> EyreResult<()> {
        match self.action {
            SubCommands::Run(run) => run.run(),
            SubCommands::Presets(presets) => presets.run(),
        }
    }
}
