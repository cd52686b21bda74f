use std::io;
use std::process::ExitCode;

use clap::Parser;
use mazepath_lib::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = args.logger().try_init() {
        eprintln!("warning: {e}");
    }

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    match mazepath_lib::run(&args, &mut input, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
