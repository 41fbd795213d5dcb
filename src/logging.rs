//! log4rs setup. Everything goes to stderr so stdout only carries the report.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

const PATTERN: &str = "{h({l})} {m}{n}";

pub fn level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

pub fn config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Install the global logger. Can only succeed once per process.
pub fn init(verbose: bool) -> Result<log4rs::Handle, Box<dyn Error>> {
    let handle = log4rs::init_config(config(level(verbose))?)?;
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level() {
        assert_eq!(level(false), LevelFilter::Warn);
        assert_eq!(level(true), LevelFilter::Debug);
    }

    #[test]
    fn test_config() {
        let config = config(LevelFilter::Debug).expect("Error building log4rs config");
        assert_eq!(config.root().level(), LevelFilter::Debug);
        assert_eq!(config.appenders().len(), 1);
        assert_eq!(config.appenders()[0].name(), "stderr");
    }
}
