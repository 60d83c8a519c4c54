use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::config::{paths::ExpensePaths, settings::Settings, Theme};
use expense_tracker::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Track expenses for the length of a session: add and delete \
                  records, filter them by title, category and date, watch the \
                  totals and trend on a dashboard, and export what you see to CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        /// Starting theme (overrides the settings file)
        #[arg(long, value_enum)]
        theme: Option<Theme>,

        /// Directory CSV exports are written to
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui { theme, export_dir }) => {
            init_tracing(&paths)?;
            if export_dir.is_some() {
                settings.export_dir = export_dir;
            }
            let theme = theme.unwrap_or(settings.theme);
            expense_tracker::tui::run_tui(&settings, theme)?;
        }
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to {}", paths.settings_file().display());
            println!("Run 'expenses tui' to start tracking.");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Theme:             {}", settings.theme);
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Export directory:  {}", settings.export_dir().display());
            println!("  CSV quoting:       {:?}", settings.csv_quoting);
            println!("  Notification secs: {}", settings.notification_secs);
        }
        None => {
            println!("Expense Tracker - terminal-based expense tracking");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
