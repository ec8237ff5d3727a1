use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use expense_cli::cli::{handle_export_command, ExportFormat, Shell};
use expense_cli::config::{paths::ExpensePaths, settings::Settings};
use expense_cli::logging::init_tracing;
use expense_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record expenses against your own categories, see where the money \
                  went, and export everything to a spreadsheet. Run without a \
                  command to open the interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,

    /// Export saved expenses without opening the menu
    Export {
        /// Output file path (defaults to the data directory)
        output: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "xlsx")]
        format: ExportFormat,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            paths.ensure_directories()?;
            let storage = Storage::open(paths.data_file()).with_context(|| {
                format!("Could not load {}", paths.data_file().display())
            })?;

            let stdin = io::stdin();
            let mut shell = Shell::new(storage, settings, &paths, stdin.lock(), io::stdout());
            shell.run()?;
        }
        Commands::Init => {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.data_file().display());
            println!("Export file:    {}", paths.export_file().display());
            println!("CSV export:     {}", paths.csv_export_file().display());
            println!("Chart file:     {}", paths.chart_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Chart title:       {}", settings.chart_title);
            println!("  Chart start angle: {}", settings.chart_start_angle);
        }
        Commands::Export { output, format } => {
            let storage = Storage::open(paths.data_file()).with_context(|| {
                format!("Could not load {}", paths.data_file().display())
            })?;
            let (written, rows) = handle_export_command(&storage, &paths, format, output)?;
            println!("Exported {} expenses to {}", rows, written.display());
        }
    }

    Ok(())
}
