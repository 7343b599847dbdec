use clap::{Parser, Subcommand};

pub const DEFAULT_EXPORT_PATH: &str = "afairhome_analysis_results.json";

#[derive(Parser, Debug)]
#[command(name = "afairhome", version, about = "AFairHome cost-benefit research CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "TOML file overriding the default model assumptions"
    )]
    pub assumptions: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the cost-benefit analysis and export the results artifact.
    Analyze {
        #[arg(long, default_value = DEFAULT_EXPORT_PATH)]
        out: String,
        #[arg(long, default_value_t = false)]
        skip_export: bool,
    },
    /// Compare the conservative/base/optimistic scenario variants.
    Scenarios,
    /// Encampment-cleanup cost verification tooling.
    Verify {
        #[command(subcommand)]
        command: VerifyCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum VerifyCommands {
    Report {
        #[arg(
            long = "assume-verified",
            help = "Treat the named budget source as verified for this report"
        )]
        assume_verified: Vec<String>,
    },
    Checklist,
    Urls,
    Components,
    Frequency,
}
