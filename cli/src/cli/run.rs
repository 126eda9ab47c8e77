use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use eyre::{bail, eyre, Result as EyreResult, WrapErr};
use queue_simulator_core_rs::metrics::GroupMetrics;
use queue_simulator_core_rs::report::TABLE_COLUMNS;
use queue_simulator_core_rs::{simulate, Preset, SampleSet, SimulationConfig, SimulationResult};
use tracing::info;

/// Run one simulation
#[derive(Debug, Parser)]
pub struct RunCommand {
    /// Built-in preset (see `queue-sim presets`)
    #[arg(long, value_name = "NAME", conflicts_with = "config")]
    pub preset: Option<String>,

    /// JSON file holding a simulation configuration
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON file holding the sample set
    #[arg(long, value_name = "PATH", conflicts_with_all = ["seed", "random"])]
    pub samples: Option<PathBuf>,

    /// Draw reproducible samples from this seed
    #[arg(long, conflicts_with = "random")]
    pub seed: Option<u64>,

    /// Draw non-reproducible samples
    #[arg(long)]
    pub random: bool,

    /// Override the number of clients
    #[arg(long, value_name = "N")]
    pub clients: Option<usize>,

    /// Override the number of servers
    #[arg(long, value_name = "N")]
    pub servers: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Result table followed by the metrics summary
    #[default]
    Table,
    /// Complete result set as JSON
    Json,
}

impl RunCommand {
    pub fn run(self) -> EyreResult<()> {
        let (mut config, preset_samples) = self.load_config()?;

        if let Some(clients) = self.clients {
            config.client_count = clients;
        }
        if let Some(servers) = self.servers {
            config.server_count = servers;
        }

        let samples = if let Some(path) = &self.samples {
            read_json(path)?
        } else if let Some(seed) = self.seed {
            SampleSet::seeded(seed)
        } else if self.random {
            SampleSet::entropy()
        } else {
            preset_samples
        };

        info!(
            clients = config.client_count,
            servers = config.server_count,
            reproducible = samples.is_reproducible(),
            "running simulation"
        );

        let result = simulate(&config, &samples)?;

        match self.format {
            OutputFormat::Table => print_table(&result),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        }
        Ok(())
    }

    fn load_config(&self) -> EyreResult<(SimulationConfig, SampleSet)> {
        if let Some(path) = &self.config {
            return Ok((read_json(path)?, SampleSet::default()));
        }

        let name = self.preset.as_deref().unwrap_or("demo");
        let Some(preset) = Preset::by_name(name) else {
            bail!(
                "unknown preset {:?}; expected one of {}",
                name,
                Preset::NAMES.join(", ")
            );
        };
        Ok((preset.config, preset.samples))
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> EyreResult<T> {
    let text = fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| eyre!("failed to parse {}: {}", path.display(), e))
}

fn print_table(result: &SimulationResult) {
    println!("{}", TABLE_COLUMNS.map(|c| format!("{c:>16}")).join(""));
    for row in result.table_rows() {
        println!("{}", row.cells().map(|c| format!("{c:>16}")).join(""));
    }

    let summary = result.metrics.summary();
    println!();
    print_group("all clients", &summary.overall);
    if let Some(vip) = &summary.vip {
        print_group("vip", vip);
        print_group("regular", &summary.regular);
    }
    println!("total span:   {:.2}", summary.total_span);
    println!("utilization:  {:.0}%", summary.utilization);
    for server in &summary.servers {
        println!(
            "  server {}: {} client(s), busy {:.2}, {:.0}%",
            server.server_id, server.clients_served, server.busy_time, server.utilization
        );
    }

    for warning in &result.warnings {
        println!("warning: {warning}");
    }
    println!("config hash:  {}", result.config_hash);
}

fn print_group(label: &str, group: &GroupMetrics) {
    println!(
        "{label:<12}  {} client(s), mean wait {:.2}, max wait {:.2}, satisfaction {:.0}%, {} without waiting",
        group.count, group.mean_wait, group.max_wait, group.mean_satisfaction, group.zero_wait_count
    );
}
