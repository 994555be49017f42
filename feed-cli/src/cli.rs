use crate::commands::Commands;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "linkfeed")]
#[clap(about = "Browse and post to a local professional feed", long_about = None)]
pub struct Cli {
    #[clap(
        long,
        global = true,
        value_parser,
        help = "Storage file, defaults to the user data directory"
    )]
    pub storage: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
