use clap::Parser;

use pixscribe_core::PixscribeError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub(crate) type CliResult<T> = Result<T, PixscribeError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Conceal(cmd) => cmd.run(),
        Commands::Reveal(cmd) => cmd.run(),
        Commands::Check(cmd) => cmd.run(),
    }
}
