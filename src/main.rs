use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use marathon_pace::OutputFormat;
use marathon_pace::chart::Unit;
use marathon_pace::commands;
use marathon_pace::config;
use marathon_pace::locale::Lang;

#[derive(Parser)]
#[command(name = "mpace")]
#[command(about = "Marathon pace chart: even splits, pace, and shareable targets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the split chart for the saved or given target time
    Chart {
        #[arg(long, help = "Target time override (H:MM:SS or H-MM-SS), not saved")]
        time: Option<String>,
        #[arg(long, value_enum, help = "Unit system (saved as the new preference)")]
        unit: Option<Unit>,
        #[arg(long, value_enum, help = "Display language (saved as the new preference)")]
        lang: Option<Lang>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Set and save the target finish time
    Set {
        #[arg(help = "Target time (H:MM:SS or H-MM-SS)")]
        time: Option<String>,
        #[arg(long, conflicts_with = "time", help = "Target in total minutes")]
        minutes: Option<f64>,
        #[arg(
            long,
            conflicts_with_all = ["time", "minutes"],
            help = "Preset label, e.g. 3:30"
        )]
        preset: Option<String>,
    },
    /// Print the shareable link for the current target
    Share {
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List target time presets
    Presets {
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load().unwrap_or_else(|err| {
        eprintln!("Warning: {:#}. Using defaults.", err);
        config::Config::default()
    });

    match &cli.command {
        Commands::Chart {
            time,
            unit,
            lang,
            format,
        } => {
            commands::chart::chart(
                &config,
                time.clone(),
                *unit,
                *lang,
                format.unwrap_or_default(),
            )?;
        }
        Commands::Set {
            time,
            minutes,
            preset,
        } => {
            commands::set::set(&config, time.clone(), *minutes, preset.clone())?;
        }
        Commands::Share { format } => {
            commands::share::share(&config, format.unwrap_or_default())?;
        }
        Commands::Presets { format } => {
            commands::presets::presets(format.unwrap_or_default())?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}
