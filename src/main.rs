//! Binary entrypoint for the `utilkit` CLI.

use std::process::ExitCode;

use utilkit::notice::Notice;

fn main() -> ExitCode {
    // A missing .env file is fine; configuration then comes from the real environment.
    let _ = dotenvy::dotenv();
    utilkit::logging::init();

    // Recording and replay are handled in commands::dispatch via UTILKIT_RECORD / UTILKIT_REPLAY.
    match utilkit::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            Notice::error(err).show();
            ExitCode::FAILURE
        }
    }
}
