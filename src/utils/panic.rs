//! Panic reporting
//!
//! A panic can happen while the terminal is in raw mode on the alternate screen. The hook puts
//! the terminal back first, then reports: a `human-panic` dump in release builds, a full
//! `better-panic` trace in debug builds. Either way the plain-text report lands in the log file.

use std::{panic, path::PathBuf, process};

use better_panic::Settings;
use color_eyre::{config::HookBuilder, eyre::Result};
use tracing::error;

use super::paths::{get_data_dir, LOG_FILE};
use crate::infrastructure::tui::{real::RealTui, TuiLike};

fn log_path() -> PathBuf {
    get_data_dir().join(LOG_FILE.as_str())
}

/// Footer printed under every report
fn report_section() -> String {
    format!(
        "stigterm {} crashed. The terminal has been restored.\nFull report: {}",
        env!("CARGO_PKG_VERSION"),
        log_path().display()
    )
}

/// Single log line for a colored eyre report
fn log_line(report: &str) -> String {
    let plain = strip_ansi_escapes::strip_str(report);
    format!("panic: {}", plain.trim_end())
}

#[cfg(not(debug_assertions))]
fn report_metadata() -> human_panic::Metadata {
    human_panic::Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
        .support(format!("Attach {} when reporting", log_path().display()))
}

fn restore_terminal() {
    match RealTui::new() {
        Ok(mut tui) => {
            if let Err(e) = tui.exit() {
                error!("Unable to restore terminal: {e:?}");
            }
        }
        Err(e) => error!("Unable to reach terminal: {e:?}"),
    }
}

pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(report_section())
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();

        let report = panic_hook.panic_report(panic_info).to_string();

        #[cfg(not(debug_assertions))]
        {
            let meta = report_metadata();
            let file_path = human_panic::handle_dump(&meta, panic_info);
            if let Err(e) = human_panic::print_msg(file_path, &meta) {
                eprintln!("human-panic: printing error message to console failed: {e}");
            }
            eprintln!("{report}");
        }
        log::error!("{}", log_line(&report));

        #[cfg(debug_assertions)]
        {
            Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_report_section_names_crate_and_log() {
        let section = report_section();
        assert!(section.starts_with(&format!("stigterm {} crashed.", env!("CARGO_PKG_VERSION"))));
        assert!(section.ends_with(&log_path().display().to_string()));
    }

    #[test]
    fn test_log_path_uses_log_file_name() {
        assert_eq!(
            log_path().file_name().and_then(|name| name.to_str()),
            Some("stigterm.log")
        );
    }

    #[test]
    fn test_log_line_strips_colors() {
        let report = "\u{1b}[31mThe application panicked (crashed).\u{1b}[0m\nMessage: boom\n\n";
        assert_eq!(
            log_line(report),
            "panic: The application panicked (crashed).\nMessage: boom"
        );
    }
}
