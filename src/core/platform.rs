//! Platform-specific functionality and error handling.

/// Handle application errors: print the error chain to stderr and exit
/// with code 1.
pub fn handle_error(error: anyhow::Error) {
    eprintln!();
    eprintln!("Error starting pointlayer:");
    eprintln!("{error:#}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse CLI arguments from the process command line.
pub fn get_cli_args() -> crate::core::config::CliArgs {
    use clap::Parser;
    crate::core::config::CliArgs::parse()
}
