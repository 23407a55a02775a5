mod cli;
mod commands;
mod libs;
mod logger;
mod schemas;

use clap::Parser;
use cli::cmd_enums::{Cli, Commands};
use commands::pull::{self, PullOptions};

fn main() {
    let cli = Cli::parse();
    logger::init(cli.debug);

    let result = match cli.command {
        Commands::Pull { path } => pull::run(
            &path,
            PullOptions {
                config: cli.config,
                account: cli.account.into(),
                api_url: cli.api_url,
            },
        ),
    };

    if let Err(e) = result {
        log_error!("{:#}", e);
        std::process::exit(1);
    }
}
