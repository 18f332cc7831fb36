use std::process::ExitCode;

use clap::Parser;

use gadocalc_cli::args::{Cli, Command};
use gadocalc_cli::commands::{agents_output, run_evaluation};
use gadocalc_cli::exit::{EXIT_OK, evaluation_exit_code, parse_error_exit_code};
use gadocalc_cli::form::load_form;
use gadocalc_cli::logging::init_logging;

fn main() -> eyre::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            return Ok(ExitCode::from(parse_error_exit_code(&err)));
        }
    };
    init_logging(cli.log_format, cli.verbose);

    match cli.command {
        Command::Agents { age } => {
            print!("{}", agents_output(age, cli.format)?);
            Ok(ExitCode::from(EXIT_OK))
        }
        Command::Evaluate(args) => {
            let form = match &args.input {
                Some(path) => load_form(path)?,
                None => args.to_form(),
            };

            let (output, evaluation) = run_evaluation(form, cli.format)?;
            print!("{output}");
            Ok(ExitCode::from(evaluation_exit_code(&evaluation)))
        }
    }
}
