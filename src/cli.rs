use crate::config::{AppConfig, ConfigManager, PolicyConfig, SlotPolicy};
use crate::data::CsvConnector;
use crate::engines::{AssignmentEngine, TrialRunner};
use crate::export::ScheduleExporter;
use crate::types::Parameters;
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "airsched")]
#[command(about = "Assign broadcast programs to time slots, seeded by GA-style parameters")]
#[command(version)]
pub struct Cli {
    /// TOML config file; sections omitted there fall back to defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single assignment over a program table
    Run {
        /// CSV program table (named columns)
        #[arg(short, long)]
        data: PathBuf,

        /// Crossover rate, range 0.00 to 0.95
        #[arg(long)]
        crossover_rate: Option<f64>,

        /// Mutation rate, range 0.01 to 0.05
        #[arg(long)]
        mutation_rate: Option<f64>,

        /// How slot labels are derived from the table
        #[arg(long)]
        slot_policy: Option<SlotPolicyArg>,

        /// Use this column as the program source instead of detection
        #[arg(long)]
        program_column: Option<String>,

        /// Write the schedule as CSV here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the configured trials (up to three parameter pairs) over one table
    Trials {
        /// CSV program table (named columns)
        #[arg(short, long)]
        data: PathBuf,

        /// How slot labels are derived from the table
        #[arg(long)]
        slot_policy: Option<SlotPolicyArg>,

        /// Directory for per-trial CSV files (trial_1_schedule.csv, ...)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Show table shape, columns, and detected program/slot columns
    Inspect {
        /// CSV program table (named columns)
        #[arg(short, long)]
        data: PathBuf,
    },

    /// Write a default config file
    InitConfig {
        /// Destination path
        #[arg(short, long, default_value = "airsched.toml")]
        path: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SlotPolicyArg {
    /// Time-related column names become the labels
    ColumnNames,
    /// Values of the first time-related column become the labels
    ColumnValues,
    /// Synthesize "Slot 1" .. "Slot N"
    Synthesized,
    /// Canonical six hourly labels, 08:00 AM .. 01:00 PM
    FixedDefaults,
}

impl From<SlotPolicyArg> for SlotPolicy {
    fn from(arg: SlotPolicyArg) -> Self {
        match arg {
            SlotPolicyArg::ColumnNames => SlotPolicy::ColumnNames,
            SlotPolicyArg::ColumnValues => SlotPolicy::ColumnValues,
            SlotPolicyArg::Synthesized => SlotPolicy::Synthesized,
            SlotPolicyArg::FixedDefaults => SlotPolicy::FixedDefaults,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let manager = ConfigManager::new();
    if let Some(path) = &cli.config {
        manager
            .load_from_file(path)
            .with_context(|| format!("Loading config from {}", path.display()))?;
    }
    let config = manager.get();

    match cli.command {
        Commands::Run {
            data,
            crossover_rate,
            mutation_rate,
            slot_policy,
            program_column,
            output,
        } => {
            let params = Parameters::new(
                crossover_rate.unwrap_or(config.parameters.crossover_rate),
                mutation_rate.unwrap_or(config.parameters.mutation_rate),
            );
            let policy = merge_policy(&config, slot_policy, program_column);

            let df = CsvConnector::load_and_validate(&data)
                .with_context(|| format!("Loading table from {}", data.display()))?;
            log::info!(
                "Loaded table: {} rows, {} columns",
                df.height(),
                df.width()
            );

            let schedule = AssignmentEngine::run(&df, &params, &policy)?;
            if schedule.is_empty() {
                log::warn!("Schedule is empty: no programs were extracted");
            }

            match output {
                Some(path) => {
                    ScheduleExporter::write_csv_file(&schedule, &path)?;
                    println!("Schedule written to {}", path.display());
                }
                None => {
                    let df = ScheduleExporter::to_dataframe(&schedule)?;
                    println!("{}", df);
                }
            }
        }

        Commands::Trials {
            data,
            slot_policy,
            output_dir,
        } => {
            let policy = merge_policy(&config, slot_policy, None);

            let df = CsvConnector::load_and_validate(&data)
                .with_context(|| format!("Loading table from {}", data.display()))?;

            let outcomes = TrialRunner::run(&df, &config.trials, &policy)?;
            for outcome in &outcomes {
                println!(
                    "{} (CO_R={}, MUT_R={})",
                    outcome.label,
                    outcome.parameters.crossover_rate,
                    outcome.parameters.mutation_rate
                );
                let df = ScheduleExporter::to_dataframe(&outcome.schedule)?;
                println!("{}", df);

                if let Some(dir) = &output_dir {
                    std::fs::create_dir_all(dir)?;
                    let path = ScheduleExporter::trial_file_path(dir, outcome);
                    ScheduleExporter::write_csv_file(&outcome.schedule, &path)?;
                    println!("Written to {}", path.display());
                }
            }
        }

        Commands::Inspect { data } => {
            let df = CsvConnector::load_and_validate(&data)
                .with_context(|| format!("Loading table from {}", data.display()))?;
            let preview = CsvConnector::create_preview(&data, &df)?;

            let meta = &preview.metadata;
            println!("{}: {} rows, {} columns", meta.file_path, meta.num_rows, meta.num_columns);
            println!("Columns: {}", meta.columns.join(", "));
            match &meta.program_column {
                Some(col) => println!("Detected program column: {}", col),
                None => println!("Detected program column: none"),
            }
            if meta.slot_columns.is_empty() {
                println!("Time-related columns: none");
            } else {
                println!("Time-related columns: {}", meta.slot_columns.join(", "));
            }
            for row in &preview.first_rows {
                println!("{}", row.join(" | "));
            }
        }

        Commands::InitConfig { path } => {
            if path.exists() {
                anyhow::bail!("{} already exists; refusing to overwrite", path.display());
            }
            ConfigManager::new().save_to_file(&path)?;
            println!("Default config written to {}", path.display());
        }
    }

    Ok(())
}

fn merge_policy(
    config: &AppConfig,
    slot_policy: Option<SlotPolicyArg>,
    program_column: Option<String>,
) -> PolicyConfig {
    PolicyConfig {
        slot_policy: slot_policy
            .map(SlotPolicy::from)
            .unwrap_or(config.policy.slot_policy),
        program_column_override: program_column.or_else(|| config.policy.program_column_override.clone()),
    }
}
