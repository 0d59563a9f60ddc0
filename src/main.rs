//! jumpsfx — render a swept-oscillator sound effect to a WAV file.

use std::process::ExitCode;

use clap::Parser;
use log::error;

use jumpsfx::cli::Args;
use jumpsfx::render_to_file;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let params = match args.sweep_parameters() {
        Ok(params) => params,
        Err(report) => {
            eprintln!("{report}");
            return ExitCode::FAILURE;
        }
    };

    match render_to_file(&params, &args.output) {
        Ok(_) => {
            println!("Generated {}", args.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("render failed: {e}");
            eprintln!("{}: {e}", args.output.display());
            ExitCode::FAILURE
        }
    }
}
