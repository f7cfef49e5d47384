use std::process::ExitCode;

fn main() -> ExitCode {
    match solverbench::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
