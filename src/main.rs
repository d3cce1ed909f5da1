use station_uptime::cli::{self, Args};
use station_uptime::config::LoggingConfig;
use station_uptime::report;
use std::env;
use std::io;
use std::process;
use tracing::error;

fn main() {
    // Any argument shape other than a single input path is a failed run
    let Ok(args) = Args::from_raw(env::args_os().skip(1)) else {
        fail();
    };

    cli::setup_logging(&LoggingConfig::from_env());

    match cli::run(&args) {
        Ok(uptimes) => {
            if let Err(e) = report::write_report(&mut io::stdout().lock(), &uptimes) {
                error!("Failed to write report: {}", e);
                process::exit(1);
            }
            process::exit(0);
        }
        Err(e) => {
            error!("Fatal error: {:#}", e);
            fail();
        }
    }
}

/// Emit the failure marker and exit with a non-zero status
fn fail() -> ! {
    // Nothing useful can be done if stdout itself is gone
    let _ = report::write_failure(&mut io::stdout().lock());
    process::exit(1);
}
