use std::str::FromStr;
use std::time::SystemTime;

use log::LevelFilter;

use crate::config::LogConfig;

/// sets up the global logger. Rocket's own log output goes through this as well,
/// since rocket won't replace a logger that's already been set
pub fn setup_logger(config: &LogConfig) -> Result<(), fern::InitError> {
    let level = parse_level(&config.level);
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // hyper is extremely noisy on debug
        .level_for("hyper", LevelFilter::Warn)
        .chain(std::io::stdout());
    if let Some(file) = &config.file {
        dispatch = dispatch.chain(fern::log_file(file)?);
    }
    dispatch.apply()?;
    Ok(())
}

/// unknown levels fall back to info
fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::parse_level;

    #[test]
    fn parse_level_is_case_insensitive() {
        assert_eq!(LevelFilter::Debug, parse_level("DEBUG"));
        assert_eq!(LevelFilter::Off, parse_level("off"));
    }

    #[test]
    fn parse_level_defaults_to_info() {
        assert_eq!(LevelFilter::Info, parse_level("loud"));
    }
}
