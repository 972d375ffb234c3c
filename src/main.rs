use clap::Parser;
use minilang::cli::{run_cli, Cli};
use std::process::exit;

fn main() {
    let cli = Cli::parse();
    exit(run_cli(cli));
}
