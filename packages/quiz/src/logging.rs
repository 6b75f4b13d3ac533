//! Logger setup for the command line. Without the `log` feature every record
//! is dropped.

use std::error::Error;

#[cfg(feature = "log")]
pub fn init(verbosity: u8) -> Result<(), Box<dyn Error>> {
    use log::LevelFilter;
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    };

    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;

    log4rs::init_config(config)?;

    Ok(())
}

#[cfg(not(feature = "log"))]
pub fn init(_verbosity: u8) -> Result<(), Box<dyn Error>> {
    Ok(())
}
