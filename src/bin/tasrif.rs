//! Tasrif CLI binary.

use std::error::Error;
use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use tasrif::cli::args::TasrifArgs;
use tasrif::cli::commands::execute_command;

fn main() {
    let args = TasrifArgs::parse();
    let log_level = args.log_level();

    // -v raises tasrif's own level; other crates stay at warn or quieter.
    Builder::new()
        .filter_level(log_level.min(LevelFilter::Warn))
        .filter_module("tasrif", log_level)
        .format(|buf, record| writeln!(buf, "tasrif [{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {}", error_report(&e));
        process::exit(1);
    }
}

/// Render an error with the causes its own message does not already show.
fn error_report(error: &dyn Error) -> String {
    let mut report = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !report.contains(&cause_text) {
            report.push_str(": ");
            report.push_str(&cause_text);
        }
        source = cause.source();
    }
    report
}
