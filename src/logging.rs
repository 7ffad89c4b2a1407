//! log4rs initialisation.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const CONSOLE_PATTERN: &str = "{d(%H:%M:%S)} {h({l:5})} {t} - {m}{n}";

/// Initialise logging from `config_file`, or a stderr logger if it is missing.
///
/// `verbose` raises the root level to debug in both cases.
pub fn init(config_file: &Path, verbose: bool) -> Result<(), Box<dyn Error>> {
    if config_file.exists() {
        if verbose {
            // init_file would apply the file's root level as is
            log4rs::init_config(file_config(config_file, verbose)?)?;
        } else {
            log4rs::init_file(config_file, Default::default())?;
        }
        log::debug!("Logging configured from {}", config_file.display());
        return Ok(());
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    log4rs::init_config(console_config(level)?)?;
    log::debug!(
        "No {} found, logging to stderr at {level}",
        config_file.display()
    );
    Ok(())
}

/// Load `config_file`, raising the root level to debug when `verbose`.
fn file_config(config_file: &Path, verbose: bool) -> Result<Config, Box<dyn Error>> {
    let mut config = log4rs::config::load_config_file(config_file, Default::default())?;
    if verbose && config.root().level() < LevelFilter::Debug {
        config.root_mut().set_level(LevelFilter::Debug);
    }
    Ok(config)
}

fn console_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
