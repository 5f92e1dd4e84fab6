mod config;
mod history_cmd;
mod meal_cmds;
mod plan_cmds;
#[cfg(test)]
mod test_util;

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};

use weekmenu_core::{Opened, Planner};
use weekmenu_store::models::Day;
use weekmenu_store::{Store, StoreConfig};

use config::WeekmenuConfig;

#[derive(Parser)]
#[command(name = "weekmenu", about = "Weekly lunch and dinner planner")]
struct Cli {
    /// Data directory (overrides WEEKMENU_DATA_DIR env var)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a weekmenu config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Meal catalog management
    Meal {
        #[command(subcommand)]
        command: MealCommands,
    },
    /// Week plan management
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Show generated plans from the last two weeks, newest first
    History,
    /// Print shell completions to stdout
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum MealCommands {
    /// Add a meal to the catalog
    Add {
        /// Meal name (blank names are ignored)
        name: String,
        /// Only suitable for dinner
        #[arg(long)]
        dinner_only: bool,
    },
    /// List all meals in the catalog
    List,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the current week plan
    Show,
    /// Generate a new week plan without repeats and record it in history
    Generate,
    /// Clear every slot of the week plan
    Reset,
    /// Pick a different lunch for one day
    RerollLunch {
        /// Day name or abbreviation (e.g. monday, tue)
        day: Day,
    },
    /// Pick a different dinner for one day
    RerollDinner {
        /// Day name or abbreviation (e.g. monday, tue)
        day: Day,
    },
    /// Serve a day's lunch again as its dinner
    Leftovers {
        /// Day name or abbreviation (e.g. monday, tue)
        day: Day,
    },
}

/// Execute the `weekmenu init` command: write config file.
fn cmd_init(cli_data_dir: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let data_dir = cli_data_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| StoreConfig::from_env().data_dir);

    let cfg = config::ConfigFile {
        storage: config::StorageSection {
            data_dir: data_dir.clone(),
        },
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  storage.data_dir = {}", data_dir.display());
    println!();
    println!("Next: run `weekmenu meal list` to create the meal catalog.");

    Ok(())
}

/// Resolve config, open the store and load the planner state.
///
/// Returns `None` on the first run, after seeding the catalog: the current
/// command is not carried out.
fn open_planner(cli_data_dir: Option<&Path>) -> anyhow::Result<Option<Planner>> {
    let resolved = WeekmenuConfig::resolve(cli_data_dir)?;
    tracing::debug!(data_dir = %resolved.store_config.data_dir.display(), "opening store");
    let store = Store::open(&resolved.store_config)?;

    match Planner::open(store)? {
        Opened::Ready(planner) => Ok(Some(planner)),
        Opened::Seeded { meals } => {
            println!("Meal catalog initialized with {meals} meals.");
            println!("Run the command again to continue.");
            Ok(None)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Commands::Init { force } => {
            cmd_init(data_dir, force)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "weekmenu", &mut std::io::stdout());
        }
        Commands::Meal { command } => {
            if let Some(mut planner) = open_planner(data_dir)? {
                meal_cmds::run_meal_command(command, &mut planner)?;
            }
        }
        Commands::Plan { command } => {
            if let Some(mut planner) = open_planner(data_dir)? {
                plan_cmds::run_plan_command(command, &mut planner)?;
            }
        }
        Commands::History => {
            if let Some(planner) = open_planner(data_dir)? {
                history_cmd::run_history(&planner)?;
            }
        }
    }

    Ok(())
}
