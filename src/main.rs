use clap::Parser;

use inkstreak::cli::Cli;
use inkstreak::commands::{self, context::color_choice_to_mode};
use inkstreak::output::ErrorOutput;
use inkstreak::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match commands::run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_error(&e);
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}
