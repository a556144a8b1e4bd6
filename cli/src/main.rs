//! pcinstaller - detect applications and configure metrics agent integrations

use std::process::ExitCode;

use clap::Parser;
use pcinstaller_cli::cli::Cli;
use pcinstaller_cli::domain::error::is_interrupt;

const INTERRUPT_MESSAGE: &str = "\nQuitting the installer via keyboard interrupt.";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let handle = tokio::runtime::Handle::current();
    // The session blocks on terminal reads; it runs off the async workers so
    // the signal handler below stays live.
    let session = tokio::task::spawn_blocking(move || cli.run(&handle));

    tokio::select! {
        joined = session => match joined {
            Ok(Ok(code)) => code,
            Ok(Err(e)) if is_interrupt(&e) => interrupted(),
            Ok(Err(e)) => {
                eprintln!("Error: {e:#}");
                ExitCode::FAILURE
            }
            Err(e) => {
                eprintln!("Error: installer task failed: {e}");
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => interrupted(),
    }
}

/// Exits immediately: a blocking read may still hold the session thread,
/// which runtime shutdown would otherwise wait on.
fn interrupted() -> ! {
    let _ = console::Term::stdout().show_cursor();
    eprintln!("{INTERRUPT_MESSAGE}");
    std::process::exit(1)
}
