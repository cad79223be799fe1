//! CLI Adapter.

mod edit;
mod grid;

use std::path::{Path, PathBuf};

use crate::app::api::{self, ShiftChange};
use crate::domain::{AppError, DayOfWeek, FilterState, Hour, Preset, cell_text};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "foyer")]
#[command(version)]
#[command(
    about = "Edit and export the weekly general staff schedule of the residence",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to ./foyer.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FilterArgs {
    /// Only show personnel with this exact poste ("all" for every poste)
    #[arg(long)]
    poste: Option<String>,
    /// Only show personnel whose name contains this text (case-insensitive)
    #[arg(long)]
    name: Option<String>,
}

impl FilterArgs {
    fn into_filters(self) -> FilterState {
        FilterState::new(self.poste.as_deref(), self.name.as_deref())
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the weekly grid with shift ranges and weekly hours
    #[clap(visible_alias = "ls")]
    Show {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Create or update the shift of a cell
    #[clap(visible_alias = "s")]
    Set {
        /// Personnel identifier
        personnel: String,
        /// Day (Lundi..Dimanche, English names and abbreviations accepted)
        day: DayOfWeek,
        /// Start from a preset (day, morning, afternoon, night, 24h)
        #[arg(short, long)]
        preset: Option<Preset>,
        /// Start hour (0-23)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=23))]
        start: Option<u8>,
        /// End hour (0-23); equal to start means a continuous 24h shift
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=23))]
        end: Option<u8>,
        /// Mark the day as a day off
        #[arg(long, conflicts_with = "work")]
        day_off: bool,
        /// Mark the day as a working day
        #[arg(long)]
        work: bool,
        /// Notes, or the reason of a day off
        #[arg(short, long)]
        notes: Option<String>,
        /// Append a task (repeatable)
        #[arg(short, long = "task")]
        tasks: Vec<String>,
        /// Drop existing tasks before appending
        #[arg(long)]
        clear_tasks: bool,
    },
    /// Edit the shift of a cell interactively
    #[clap(visible_alias = "e")]
    Edit {
        /// Personnel identifier
        personnel: String,
        /// Day (Lundi..Dimanche)
        day: DayOfWeek,
    },
    /// Delete the shift of a cell
    #[clap(visible_alias = "rm")]
    Delete {
        /// Personnel identifier
        personnel: String,
        /// Day (Lundi..Dimanche)
        day: DayOfWeek,
    },
    /// Export the schedule as a PDF document
    #[clap(visible_alias = "x")]
    Export {
        #[command(flatten)]
        filters: FilterArgs,
        /// Target file (defaults to <output_dir>/planning-general-<date>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List shift presets
    Presets,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result: Result<(), AppError> = match cli.command {
        Commands::Show { filters } => run_show(config, filters.into_filters()),
        Commands::Set {
            personnel,
            day,
            preset,
            start,
            end,
            day_off,
            work,
            notes,
            tasks,
            clear_tasks,
        } => build_change(preset, start, end, day_off, work, notes, tasks, clear_tasks)
            .and_then(|change| run_set(config, &personnel, day, change)),
        Commands::Edit { personnel, day } => edit::run_edit(config, &personnel, day),
        Commands::Delete { personnel, day } => run_delete(config, &personnel, day),
        Commands::Export { filters, output } => {
            run_export(config, filters.into_filters(), output)
        }
        Commands::Presets => {
            run_presets();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_show(config: Option<&Path>, filters: FilterState) -> Result<(), AppError> {
    let view = api::show(config, filters)?;
    if let Some(error) = &view.load_error {
        eprintln!("⚠️  Données indisponibles : {}", error);
    }
    print!("{}", grid::render_grid(&view));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn build_change(
    preset: Option<Preset>,
    start: Option<u8>,
    end: Option<u8>,
    day_off: bool,
    work: bool,
    notes: Option<String>,
    tasks: Vec<String>,
    clear_tasks: bool,
) -> Result<ShiftChange, AppError> {
    let day_off = match (day_off, work) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    };
    Ok(ShiftChange {
        preset,
        start: start.map(Hour::new).transpose()?,
        end: end.map(Hour::new).transpose()?,
        day_off,
        notes,
        clear_tasks,
        tasks,
    })
}

fn run_set(
    config: Option<&Path>,
    personnel: &str,
    day: DayOfWeek,
    change: ShiftChange,
) -> Result<(), AppError> {
    let outcome = api::set_shift(config, personnel, day, change)?;
    let verb = if outcome.updated { "Updated" } else { "Added" };
    println!("✅ {} shift for {} on {}", verb, outcome.personnel_name, outcome.day);
    for line in cell_text(Some(&outcome.shift)).lines() {
        println!("  {}", line);
    }
    Ok(())
}

fn run_delete(
    config: Option<&Path>,
    personnel: &str,
    day: DayOfWeek,
) -> Result<(), AppError> {
    match api::delete_shift(config, personnel, day)? {
        Some(_) => println!("✅ Deleted shift for {} on {}", personnel, day),
        None => println!("No shift for {} on {}", personnel, day),
    }
    Ok(())
}

fn run_export(
    config: Option<&Path>,
    filters: FilterState,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let outcome = api::export(config, filters, output.as_deref())?;
    println!("✅ Exported {} row(s) to {}", outcome.rows, outcome.path.display());
    Ok(())
}

fn run_presets() {
    for preset in Preset::ALL {
        let hours = preset.span().duration().hours;
        println!("  {:<10} {} · {}h", preset.key(), preset, hours);
    }
}
