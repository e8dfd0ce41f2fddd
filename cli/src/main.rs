mod commands;
mod terminal;

use commands::{CommandLine, Commands, iss, link, scan, version, wake};
use terminal::{input::TerminalConfirm, logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    match commands.command {
        Commands::Version(args) => {
            print::header("version");
            version::version(args, &TerminalConfirm)
        }
        Commands::Iss(args) => {
            print::header("inno setup version");
            iss::iss(args)
        }
        Commands::Wake(args) => {
            print::header("wake on lan");
            wake::wake(args)
        }
        Commands::Scan(args) => {
            print::header("network scan");
            scan::scan(args).await
        }
        Commands::Link(args) => {
            print::header("make link");
            link::link(args)
        }
    }
}
