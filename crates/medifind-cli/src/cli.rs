//! CLI argument definitions using clap.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use medifind::RawListingParams;

/// MediFind: searchable directory of healthcare providers
#[derive(Parser)]
#[command(name = "medifind")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the provider data file
    #[arg(
        short,
        long,
        global = true,
        env = "MEDIFIND_DATA",
        default_value = "data/doctors.json"
    )]
    pub data: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "MEDIFIND_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Host address to bind to
        #[arg(long, env = "MEDIFIND_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "MEDIFIND_PORT", default_value = "3000")]
        port: u16,

        /// Allow cross-origin requests
        #[arg(
            long,
            env = "MEDIFIND_ENABLE_CORS",
            default_value = "true",
            action = ArgAction::Set
        )]
        enable_cors: bool,
    },

    /// List providers with the same filters the API accepts
    List {
        #[command(flatten)]
        filters: ListArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a provider from a JSON payload file
    Add {
        /// Path to the JSON payload, or - for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show distinct specializations, locations, and languages
    Facets {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Populate the data file with sample providers
    Seed {
        /// Replace existing providers
        #[arg(long)]
        force: bool,
    },
}

/// Listing filters, mirroring the `GET /api/doctors` query string.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive specialization substring
    #[arg(short, long)]
    pub specialization: Option<String>,

    /// Case-insensitive location substring
    #[arg(short, long)]
    pub location: Option<String>,

    /// Comma-separated days that must all be available (e.g. mon,tue)
    #[arg(short, long)]
    pub availability: Option<String>,

    /// Exact gender (male, female, other)
    #[arg(short, long)]
    pub gender: Option<String>,

    /// Minimum years of experience
    #[arg(long)]
    pub min_experience: Option<String>,

    /// Maximum consultation fee
    #[arg(long)]
    pub max_fee: Option<String>,

    /// Field to sort by (name, experience, consultationFee, rating, ...)
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort direction (asc or desc)
    #[arg(long)]
    pub sort_order: Option<String>,

    /// Page number, starting at 1
    #[arg(short, long)]
    pub page: Option<String>,

    /// Providers per page
    #[arg(long)]
    pub limit: Option<String>,
}

impl From<ListArgs> for RawListingParams {
    fn from(args: ListArgs) -> Self {
        RawListingParams {
            specialization: args.specialization,
            location: args.location,
            availability: args.availability,
            gender: args.gender,
            min_experience: args.min_experience,
            max_fee: args.max_fee,
            sort_by: args.sort_by,
            sort_order: args.sort_order,
            page: args.page,
            limit: args.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_args_become_query_params() {
        let cli = Cli::parse_from([
            "medifind",
            "list",
            "--specialization",
            "cardio",
            "--availability",
            "mon,tue",
            "--sort-by",
            "experience",
            "--page",
            "2",
        ]);

        let Commands::List { filters, json } = cli.command else {
            panic!("expected list command");
        };
        assert!(!json);

        let params = RawListingParams::from(filters);
        assert_eq!(params.specialization.as_deref(), Some("cardio"));
        assert_eq!(params.availability.as_deref(), Some("mon,tue"));
        assert_eq!(params.sort_by.as_deref(), Some("experience"));
        assert_eq!(params.page.as_deref(), Some("2"));
    }

    #[test]
    fn test_serve_cors_can_be_disabled() {
        let cli = Cli::parse_from(["medifind", "serve", "--enable-cors", "false", "-p", "8088"]);

        let Commands::Serve {
            port, enable_cors, ..
        } = cli.command
        else {
            panic!("expected serve command");
        };
        assert_eq!(port, 8088);
        assert!(!enable_cors);
    }
}
