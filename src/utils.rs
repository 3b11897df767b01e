use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const USAGE: &str = "
print <pid>:<ppid> of this command process

Usage:
 -s <num>
            sleep time.
            this program exit after sleep seconds.
            time SHOULD be greater than 0.
            default is 0.
 -x <num>
            exit code.
            exit code can be changed by -x option.
            default is 0.
";

pub fn print_usage() {
    eprintln!("{}", USAGE);
}

/// Installs the stderr logger. Filtered by `RUST_LOG`; quiet by default so
/// that stderr only carries usage text and argument diagnostics.
pub fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pidppid=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}
