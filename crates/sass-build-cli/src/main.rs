//! sass-build action entry point.

use anyhow::Context;
use clap::Parser;
use sass_build_cli::cli::Cli;
use sass_build_cli::logging::init_logging;
use sass_build_cli::run::{RunOutcome, execute, prepare};
use sass_build_cli::summary::print_options;
use sass_build_core::{GrassCompiler, LocalFs, RawInputs};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(outcome) => {
            println!("Wrote file -> {}", outcome.final_path.display());
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<RunOutcome> {
    let inputs = RawInputs::from_env(&cli.input_prefix).context("read action inputs")?;
    let config = prepare(&inputs)?;
    if config.debug {
        print_options(&config.options);
    }
    execute(&config, &GrassCompiler::new(), &LocalFs)
}
