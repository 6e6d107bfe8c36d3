use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = notes::run() {
        eprintln!("✗ Error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
