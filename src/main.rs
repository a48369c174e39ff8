use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

#[derive(Parser)]
#[command(name = "vlw2array", version)]
#[command(about = "Convert a VLW font file to a PROGMEM byte-array header")]
struct Cli {
    /// Input VLW font file
    font_file: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match vlw2array::convert(&cli.font_file) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
