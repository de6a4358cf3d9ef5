use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::dao::DEFAULT_STORE_PATH;

#[derive(Parser, Debug)]
#[command(name = "koppel")]
#[command(version = "0.1.0")]
#[command(about = "Koppel is an IP tracker CLI tool")]
#[command(
    long_about = "Koppel is a CLI tool to track IP addresses and save the information in a JSON file."
)]
pub struct Args {
    /// JSON file holding the tracked IP list
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_STORE_PATH)]
    pub store: PathBuf,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Track an IP address
    #[command(long_about = "Track an IP address and save its information to a JSON file.")]
    Track {
        /// IP address to look up; exactly one is expected
        #[arg(value_name = "IP_ADDRESS", num_args = 0..)]
        args: Vec<String>,
    },
    /// List tracked IP addresses
    #[command(long_about = "List all tracked IP addresses along with their information.")]
    List,
    /// Clear tracked IP list
    #[command(long_about = "Clear all tracked IP addresses from the list.")]
    Clear,
}
