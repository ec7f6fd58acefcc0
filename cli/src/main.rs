mod commands;
mod project;
mod records;
mod terminal;

use commands::{CommandLine, Commands, check, expand, filter, init};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init(commands.debug, cfg.quiet);
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Check {
            ip,
            hostname,
            cidr_file,
            f_keep,
            f_discard,
            organization,
            registrar,
            ..
        } => {
            let outputs = check::Outputs {
                keep: f_keep.as_deref(),
                discard: f_discard.as_deref(),
            };
            let registration = check::Registration {
                organization: organization.as_deref(),
                registrar: registrar.as_deref(),
            };
            check::check(&ip, &hostname, &cidr_file, outputs, registration, &cfg)
        }
        Commands::Expand { cidr_file, output } => {
            print::header("expanding scope", cfg.quiet);
            expand::expand(&cidr_file, output.as_deref())
        }
        Commands::Filter { known_ips, cidr_file } => {
            print::header("filtering known addresses", cfg.quiet);
            filter::filter(&known_ips, &cidr_file)
        }
        Commands::Init {
            directory,
            cidr_file,
            known_ips,
            force,
            resume,
        } => {
            print::header("setting up project", cfg.quiet);
            let options = init::InitOptions {
                cidr_file,
                known_ips,
                force,
                resume,
            };
            init::init(&directory, options, &cfg)
        }
    }
}
