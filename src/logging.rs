//! log4rs setup.

use crate::config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initialise logging from `log4rs.yml` if it exists, otherwise log
/// warnings and errors to stderr.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(config::LOG4RS_FILE).exists() {
        log4rs::init_file(config::LOG4RS_FILE, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", config::LOG4RS_FILE))?;
    } else {
        log4rs::init_config(fallback_config()?)?;
    }
    Ok(())
}

fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}
