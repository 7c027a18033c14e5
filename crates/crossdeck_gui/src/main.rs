//! Crossdeck desktop binary.

use std::fmt::Display;
use std::process::ExitCode;

fn main() -> ExitCode {
    match launch_failure(crossdeck_gui::run()) {
        None => ExitCode::SUCCESS,
        Some(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

/// Message for a window that failed to open or crashed, `None` on a clean exit.
fn launch_failure<E: Display>(result: Result<(), E>) -> Option<String> {
    result.err().map(|err| {
        format!(
            "crossdeck: desktop window failed: {}\n(set RUST_LOG=crossdeck_gui=debug for details)",
            err
        )
    })
}

#[cfg(test)]
mod tests {
    use super::launch_failure;

    #[test]
    fn clean_exit_reports_nothing() {
        assert_eq!(launch_failure(Ok::<(), &str>(())), None);
    }

    #[test]
    fn failed_launch_names_cause_and_debug_hint() {
        let message = launch_failure(Err::<(), &str>("no wgpu adapter")).expect("failure message");
        assert!(message.starts_with("crossdeck: desktop window failed: no wgpu adapter"));
        assert!(message.contains("RUST_LOG=crossdeck_gui=debug"));
    }
}
