use std::process;
use log::{error, Level};

use geobounds::utils::logger::Logger;
use geobounds::commands::{build_cli, CommandFactory, GeoboundsCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    // Global options are propagated into the selected subcommand
    let options = matches.subcommand().map(|(_, sub)| sub).unwrap_or(&matches);
    let level = if options.get_flag("verbose") { Level::Debug } else { Level::Info };

    let logger = if options.get_flag("no-log-file") {
        env_logger::Builder::new()
            .filter_level(level.to_level_filter())
            .init();
        Logger::console()
    } else {
        let log_file = options.get_one::<String>("log-file")
            .map(String::as_str)
            .unwrap_or("geobounds.log");
        let logger = match Logger::new(log_file) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error initializing logger: {}", e);
                process::exit(1);
            }
        };
        if let Err(e) = Logger::init_global_logger("geobounds-global.log", level) {
            eprintln!("Error setting up global logger: {}", e);
            process::exit(1);
        }
        logger
    };

    let factory = GeoboundsCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
