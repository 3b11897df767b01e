mod error;
mod parser;
mod process;
mod utils;

use parser::Invocation;
use process::ProcessIds;
use std::env;
use std::ffi::OsString;
use tracing::debug;

fn main() {
    utils::init_logger();

    // Parse command-line arguments.
    let args: Vec<OsString> = env::args_os().skip(1).collect();
    let (options, diagnostics) = match parser::parse_args(&args) {
        Invocation::Help => {
            utils::print_usage();
            std::process::exit(0);
        }
        Invocation::Run {
            options,
            diagnostics,
        } => (options, diagnostics),
    };
    for err in &diagnostics {
        eprintln!("Error: {}", err);
    }
    debug!(?options, "parsed options");

    let ids = match ProcessIds::current() {
        Ok(ids) => ids,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    println!("{}", ids);

    if options.sleep_seconds > 0 {
        debug!(secs = options.sleep_seconds, "sleeping");
        process::sleep_secs(options.sleep_seconds);
    }

    if options.exit_code != 0 {
        debug!(code = options.exit_code, "exiting");
        std::process::exit(options.exit_code);
    }
}
