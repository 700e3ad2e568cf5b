pub mod utils;
pub mod files;
pub mod error;

use std::path::Path;

use log::{warn, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use error::{ServiceError, ServiceErrorType, ServiceExuctionResult};

pub const DEFAULT_LOG_CONFIG: &str = "config/logs/log4rs.yml";
const CONSOLE_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initialises log4rs from `file`. Without that file a stderr console
/// logger at `info` is installed instead.
pub fn configure_log4rs(file: &str) -> ServiceExuctionResult<()> {
    if Path::new(file).exists() {
        log4rs::init_file(file, Default::default()).map_err(|err| {
            ServiceError::throw(&format!("log4rs.init.failed: {}", err), ServiceErrorType::Failure)
        })?;
        warn!("SUCCESS: Loggers are configured from: {}", file);
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))
        .map_err(|err| {
            ServiceError::throw(&format!("log4rs.config.invalid: {}", err), ServiceErrorType::Failure)
        })?;
    log4rs::init_config(config).map_err(|err| {
        ServiceError::throw(&format!("log4rs.init.failed: {}", err), ServiceErrorType::Failure)
    })?;
    warn!("log config {} not found, logging to stderr", file);
    Ok(())
}
