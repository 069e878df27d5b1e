// ABOUTME: Styled terminal feedback for CLI messages.
// ABOUTME: Success, warning, and error lines get distinct colors.

use crossterm::style::Stylize;

/// Print a plain progress message.
pub fn progress(message: &str) {
    println!("{message}");
}

/// Print a success message in green.
pub fn success(message: &str) {
    println!("{}", message.green().bold());
}

/// Print a warning in yellow.
pub fn warn(message: &str) {
    println!("{}", message.yellow().bold());
}

/// Print an error in red to stderr.
pub fn error(message: &str) {
    eprintln!("{}", format!("Error: {message}").red().bold());
}
