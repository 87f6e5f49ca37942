use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hostprobe")]
#[command(about = "Host-monitoring probes for software RAID and hardware environment health", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to the config file")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true, help = "Output format")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Check software RAID array health from an mdstat report")]
    Mdstat {
        #[arg(long, help = "Report location; '-' reads standard input")]
        file: Option<PathBuf>,

        #[arg(short, long, help = "Print parsed device records to stderr")]
        verbose: bool,
    },

    #[command(about = "Check hardware environment readings against thresholds")]
    Envstats {
        #[arg(long, help = "Value table, one integer per line; '-' reads standard input")]
        values: PathBuf,

        #[arg(long, help = "Description table, one label per line")]
        descriptions: Option<PathBuf>,

        #[arg(
            short,
            long,
            requires = "crit",
            help = "Comma-separated warning levels, one per reading"
        )]
        warn: Option<String>,

        #[arg(
            short,
            long,
            requires = "warn",
            help = "Comma-separated critical levels, one per reading"
        )]
        crit: Option<String>,

        #[arg(short, long, help = "Append performance data to the status line")]
        perfdata: bool,

        #[arg(short, long, help = "Print threshold decisions to stderr")]
        verbose: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single `STATUS: message` line
    Plain,
    /// Single-line JSON object
    Json,
}
