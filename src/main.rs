use std::process::ExitCode;

fn main() -> ExitCode {
    chandas::cli::run()
}
