use crate::export::ExportFormat;
use crate::models::IdentityScheme;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rVenueReport
/// CLI application to rank seminar venues for a new booking window
#[derive(Parser)]
#[command(
    name = "rvenuereport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile seminar attendance exports and build ranked, per-market venue reports",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view, edit, check or migrate)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List configuration keys missing from the file")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing keys with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Validate the columns of an input file without building a report
    Check {
        /// Input file (.csv, .xlsx, .xls, .ods)
        #[arg(long, short, value_name = "FILE")]
        input: String,
    },

    /// List the deduplicated venues found in an input file
    List {
        /// Input file (.csv, .xlsx, .xls, .ods)
        #[arg(long, short, value_name = "FILE")]
        input: String,

        /// Ignore rows whose dates all predate this (MM/DD/YY, MM/DD/YYYY or YYYY-MM-DD).
        /// Default: `cutoff_months` before today.
        #[arg(long, value_name = "DATE")]
        cutoff: Option<String>,

        /// Show a single market only
        #[arg(long, short, value_name = "MKT")]
        market: Option<String>,

        /// Venue identity scheme (overrides config)
        #[arg(long, value_enum)]
        identity: Option<IdentityScheme>,
    },

    /// Build the ranked per-market venue report for a scheduling window
    Report {
        /// Input file (.csv, .xlsx, .xls, .ods)
        #[arg(long, short, value_name = "FILE")]
        input: String,

        /// First day of the scheduling window (MM/DD/YY, MM/DD/YYYY or YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        start: String,

        /// Last day of the scheduling window
        #[arg(long, value_name = "DATE")]
        end: String,

        /// Directory in which the VEN_REPORT_... folder is created (default: current dir)
        #[arg(long, short, value_name = "DIR")]
        out: Option<String>,

        /// Ignore rows whose dates all predate this. Default: `cutoff_months` before today.
        #[arg(long, value_name = "DATE")]
        cutoff: Option<String>,

        /// Weeks before the window start during which any job saturates its zone
        #[arg(long = "saturation-weeks", value_name = "N")]
        saturation_weeks: Option<u32>,

        /// Margin in weeks around last year's equivalent period
        #[arg(long = "prox-weeks", value_name = "N")]
        prox_weeks: Option<u32>,

        /// Minimum RSVPs of a venue's latest job
        #[arg(long = "min-rsvps", value_name = "N")]
        min_rsvps: Option<i64>,

        /// Minimum ROR percent of a venue's latest job
        #[arg(long = "min-ror", value_name = "PCT")]
        min_ror: Option<f64>,

        /// Maximum venues written per market
        #[arg(long, value_name = "N")]
        cap: Option<usize>,

        /// Market codes to include (e.g. --markets HOU PDX). Default: all markets
        #[arg(long, num_args = 1.., value_name = "MKT")]
        markets: Vec<String>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Venue identity scheme
        #[arg(long, value_enum)]
        identity: Option<IdentityScheme>,

        /// Overwrite existing report files without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        /// Only print warnings, errors and written files
        #[arg(long, short = 'q')]
        quiet: bool,
    },
}
