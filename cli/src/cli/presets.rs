use clap::Parser;
use eyre::Result as EyreResult;
use queue_simulator_core_rs::Preset;

/// List the built-in presets
#[derive(Debug, Parser)]
pub struct PresetsCommand {
    /// Print each preset's configuration and samples as JSON
    #[arg(long)]
    pub json: bool,
}

impl PresetsCommand {
    pub fn run(self) -> EyreResult<()> {
        for name in Preset::NAMES {
            let Some(preset) = Preset::by_name(name) else {
                continue;
            };
            if self.json {
                println!("{}", serde_json::to_string_pretty(&preset)?);
            } else {
                let config = &preset.config;
                println!(
                    "{:<20} {} client(s), {} server(s), policy {:?}",
                    preset.name,
                    config.client_count,
                    config.server_count,
                    config.policy()
                );
            }
        }
        Ok(())
    }
}
