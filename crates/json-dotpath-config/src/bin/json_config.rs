//! `json-config`: read and edit a JSON configuration file by dot-path.
//!
//! See [`json_dotpath_config::cli`] for the commands. Log output goes to
//! stderr and is controlled with `RUST_LOG`.

use clap::Parser;
use json_dotpath_config::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
