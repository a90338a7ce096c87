use clap::Parser;
use line_length_cli::args::Args;
use line_length_cli::error::AppError;
use line_length_cli::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => return fail(&AppError::from(err)),
    };

    logging::init_tracing(logging::level_for(args.verbose, args.quiet), args.log_format);

    match line_length_cli::run(&args) {
        Ok(true) => ExitCode::FAILURE,
        Ok(false) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}

fn fail(err: &AppError) -> ExitCode {
    err.report();
    ExitCode::from(err.exit_code())
}
