use std::process;
use log::{error, LevelFilter};

use grayscaler::utils::logger::Logger;
use grayscaler::commands::{build_cli, CommandFactory, GrayscalerCommandFactory};
use grayscaler::commands::args::log_file_from_args;

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file = log_file_from_args(&matches);
    let logger = match Logger::init_global_logger(&log_file, level) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let factory = GrayscalerCommandFactory::new();

    let command_result = factory.create_command(&matches, logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("An error occurred: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            process::exit(1);
        }
    };
}
