// core/src/cli.rs
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::ConvertConfig;
use crate::course::build_breakpoints;
use crate::error::WozResult;
use crate::storage::{convert_file, read_workout};

#[derive(Debug, Parser)]
#[command(
    name = "woz2mrc",
    version,
    about = "Konverterer en .woz-øktbeskrivelse til en MRC-kursfil"
)]
pub struct Cli {
    /// .woz-fil (én blokk per linje)
    pub input: PathBuf,

    /// Diskretiseringssteg for ramper, i minutter (overstyrer --config)
    pub step: Option<f64>,

    /// JSON-config ({"step_min": .., "drop_final_breakpoint": ..})
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Utfil (default: <input>.mrc)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Skriv breakpoints som JSON til stdout i stedet for .mrc-fil
    #[arg(long)]
    pub json: bool,

    /// Fjern siste breakpoint (som det gamle verktøyet)
    #[arg(long)]
    pub drop_final: bool,

    /// Debug-logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Config-fil (eller default), deretter flagg og posisjonelt steg på toppen.
    pub fn resolve_config(&self) -> WozResult<ConvertConfig> {
        let mut cfg = match &self.config {
            Some(path) => ConvertConfig::load(path)?,
            None => ConvertConfig::default(),
        };
        if let Some(step) = self.step {
            cfg.step_min = step;
        }
        if self.drop_final {
            cfg.drop_final_breakpoint = true;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

/// `log`-poster fra biblioteket rutes inn i tracing-subscriberen.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let cfg = cli.resolve_config().context("ugyldig konfigurasjon")?;

    if cli.json {
        let lines = read_workout(&cli.input)
            .with_context(|| format!("kunne ikke lese {}", cli.input.display()))?;
        let points = build_breakpoints(&lines, &cfg)
            .with_context(|| format!("konvertering av {} feilet", cli.input.display()))?;
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    convert_file(&cli.input, cli.output.as_deref(), &cfg)
        .with_context(|| format!("konvertering av {} feilet", cli.input.display()))?;
    Ok(())
}
