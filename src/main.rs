//! An editor for the point markers of a level, built with Rust and Bevy.

use anyhow::Result;
use pointlayer::core;

/// Run the application with the given CLI arguments.
fn run(cli_args: core::CliArgs) -> Result<()> {
    core::run_app(cli_args)
}

fn main() {
    let cli_args = core::platform::get_cli_args();
    match run(cli_args) {
        Ok(()) => {}
        Err(error) => core::platform::handle_error(error),
    }
}
