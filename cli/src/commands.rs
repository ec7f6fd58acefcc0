pub mod check;
pub mod expand;
pub mod filter;
pub mod init;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use scopr_common::config::{Config, RepresentativePolicy};

#[derive(Parser)]
#[command(name = "scopr")]
#[command(about = "Keeps reconnaissance inside the authorized address space.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Reduce output, repeat for less (-q, -qq)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether a resolved hostname lies in scope
    #[command(alias = "c")]
    Check {
        /// Resolved address(es), newline separated. Empty if resolution failed
        ip: String,
        /// The hostname the address(es) belong to
        hostname: String,
        /// File with one in-scope CIDR or address per line
        #[arg(long)]
        cidr_file: PathBuf,
        /// Append in-scope records to this file
        #[arg(long)]
        f_keep: Option<PathBuf>,
        /// Append out-of-scope records to this file
        #[arg(long)]
        f_discard: Option<PathBuf>,
        /// Organization owning the address, added to every record
        #[arg(long)]
        organization: Option<String>,
        /// Registrar of the address, added to every record
        #[arg(long)]
        registrar: Option<String>,
        /// Check every resolved address instead of only the first
        #[arg(long)]
        all_addresses: bool,
    },
    /// Expand the scope into one address per line
    #[command(alias = "e")]
    Expand {
        #[arg(long)]
        cidr_file: PathBuf,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the known addresses that lie in scope
    #[command(alias = "f")]
    Filter {
        /// File with one known address per line
        known_ips: PathBuf,
        #[arg(long)]
        cidr_file: PathBuf,
    },
    /// Set up a project directory with scope artifacts
    #[command(alias = "i")]
    Init {
        /// Project root directory
        directory: PathBuf,
        /// File with one in-scope CIDR or address per line
        #[arg(long, required_unless_present = "resume")]
        cidr_file: Option<PathBuf>,
        /// File with addresses known to be in scope
        #[arg(long)]
        known_ips: Option<PathBuf>,
        /// Delete an existing project directory first
        #[arg(long, conflicts_with = "resume")]
        force: bool,
        /// Reuse the scope of an existing project directory
        #[arg(long)]
        resume: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let policy = match &self.command {
            Commands::Check { all_addresses: true, .. } => RepresentativePolicy::AnyAddress,
            _ => RepresentativePolicy::FirstAddress,
        };
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            policy,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
