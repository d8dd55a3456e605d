// file: src/utils/logging.rs
// description: Tracing subscriber initialization on stderr with optional ANSI coloring

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logs go to stderr; stdout carries only the exported JSON.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn format_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg.green())
}

pub fn format_error(msg: &str) -> String {
    format!("{} {}", "✗".red().bold(), msg.red())
}

pub fn format_warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg.yellow())
}

pub fn format_info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatters_keep_message() {
        colored::control::set_override(false);
        assert_eq!(format_success("done"), "✓ done");
        assert_eq!(format_error("bad"), "✗ bad");
        assert_eq!(format_warning("hmm"), "⚠ hmm");
        assert_eq!(format_info("fyi"), "ℹ fyi");
    }
}
