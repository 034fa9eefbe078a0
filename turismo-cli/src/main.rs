//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = turismo_cli::run() {
        if let turismo_cli::CliError::ArgumentParsing(parse_err) = &err {
            parse_err.exit();
        }
        report(&err);
        std::process::exit(err.exit_code());
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn report(err: &turismo_cli::CliError) {
    eprintln!("turismo: {err}");
}
