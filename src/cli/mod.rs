//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

/// Print name, version and build target.
pub fn print_version() {
    use colored::Colorize;

    println!(
        "{} {}",
        userstore::constants::APP_NAME.bold(),
        userstore::constants::VERSION.green().bold()
    );
    println!("{}  {}", "target:".dimmed(), userstore::constants::TARGET);
}
