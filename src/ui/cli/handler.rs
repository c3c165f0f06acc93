// Wed Oct 14 2026 - Alex

use super::args::Args;
use crate::config::Config;
use crate::converter::{resolve_input, MapToDefConverter};
use crate::output::ConversionStats;
use anyhow::Context;
use colored::Colorize;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        if args.no_color {
            colored::control::set_override(false);
        }

        self.setup_logging(&args)?;

        let mut config = Config::new(&args.map_file).with_summary(args.summary && !args.quiet);
        if let Some(output) = args.output {
            config = config.with_output(output);
        }
        let converter = MapToDefConverter::from_config(&config)?;

        if !args.quiet {
            eprintln!("{}", resolve_input(&config.input).display());
        }

        let conversion = converter
            .convert(&config.input)
            .with_context(|| format!("failed to convert {}", config.input.display()))?;

        if config.show_summary {
            self.print_summary(&conversion.stats);
        }
        if args.json {
            println!("{}", conversion.stats.to_json()?);
        }

        Ok(())
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Warn,
        };

        // A logger may already be installed when driven more than once in-process.
        if let Err(e) = env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()
        {
            log::debug!("logger already initialised: {}", e);
        }

        Ok(())
    }

    fn print_summary(&self, stats: &ConversionStats) {
        eprintln!("{}", "Summary".cyan().bold());
        for line in stats.summary_lines() {
            eprintln!("  {}", line);
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
