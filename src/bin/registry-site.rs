extern crate log;
extern crate pretty_env_logger;

use log::debug;
use structopt::StructOpt;

use registry_site::{
    self,
    listing::ListingOptions,
    opts::{fatal, Cli, Command},
    stats::StatsOptions,
    window::WindowOptions,
    Result,
};

fn process_command(cmd: Command) -> Result<()> {
    match cmd {
        Command::Window {
            total_count,
            per_page,
            page,
            json,
        } => {
            let opts = WindowOptions {
                total_count,
                per_page,
                page,
                json,
            };
            registry_site::window::window(opts)?;
        }
        Command::Listing {
            input,
            query,
            config,
            json,
        } => {
            let opts = ListingOptions {
                input,
                query,
                config,
                json,
            };
            registry_site::listing::listing(opts)?;
        }
        Command::Stats {
            input,
            config,
            json,
        } => {
            let opts = StatsOptions {
                input,
                config,
                json,
            };
            registry_site::stats::stats(opts)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::from_args();

    registry_site::opts::panic_hook();

    if let Err(e) = registry_site::logger::log_level(&*args.log_level) {
        return fatal(e);
    }

    debug!("{:?}", args.cmd);

    if let Err(e) = process_command(args.cmd) {
        return fatal(e);
    }

    Ok(())
}
