use std::process::ExitCode;

fn main() -> ExitCode {
    chipscout_cli::run()
}
