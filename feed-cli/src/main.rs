use clap::Parser;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::error::AppError;
use crate::util::{open_state, provide_storage_path};

mod cli;
mod commands;
mod error;
mod render;
mod util;

fn main() {
    env_logger::init();

    let args = Cli::parse();

    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: Cli) -> Result<(), AppError> {
    let path = provide_storage_path(&args.storage)?;

    // Reset works on the raw file, every other command needs
    // readable storage.
    match &args.command {
        Commands::Reset(reset) => reset.run(&path),
        Commands::Login(login) => login.run(&mut open_state(&path)?),
        Commands::Signup(signup) => signup.run(&mut open_state(&path)?),
        Commands::Logout(logout) => logout.run(&mut open_state(&path)?),
        Commands::Whoami(whoami) => whoami.run(&mut open_state(&path)?),
        Commands::Profile { subcommand } => {
            subcommand.run(&mut open_state(&path)?)
        }
        Commands::Feed(feed) => feed.run(&mut open_state(&path)?),
        Commands::Post { subcommand } => {
            subcommand.run(&mut open_state(&path)?)
        }
        Commands::Navigate(navigate) => navigate.run(&mut open_state(&path)?),
    }
}
