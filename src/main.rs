use std::env::args_os;
use std::process::ExitCode;

use pixel_mismatch_bench::{run, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run(&arguments) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Benchmark failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
