//! Logger setup for the resumate binary.
//!
//! Logs go to a file because stdout belongs to the wizard. If the file cannot
//! be created we fall back to stderr rather than running blind.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

pub fn initialize(log_file: &Path, level: LevelFilter) {
    let config = build_config();
    let logger: Box<dyn SharedLogger> = match File::create(log_file) {
        Ok(file) => WriteLogger::new(level, config, file),
        Err(err) => {
            eprintln!(
                "Warning: could not create log file at {}: {}",
                log_file.display(),
                err
            );
            TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        }
    };

    let _ = simplelog::CombinedLogger::init(vec![logger]);
}

fn build_config() -> Config {
    let mut builder = ConfigBuilder::new();
    builder
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error);
    // Keep reqwest/hyper chatter out of the wizard's log.
    builder.add_filter_allow_str("resumate");
    builder.build()
}
