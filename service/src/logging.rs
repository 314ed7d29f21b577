use crate::config::Config;
use log::{LevelFilter, SetLoggerError};
use simplelog::{self, ConfigBuilder};

/// Modules to filter out from logging when not in Trace mode.
/// The HTTP stack under the Daily.co client logs every connection and TLS
/// handshake, which buries the client's own request logs.
const FILTERED_MODULES: &[&str] = &["hyper", "hyper_util", "reqwest", "rustls", "h2"];

pub struct Logger {}

impl Logger {
    /// Installs a terminal logger at the level set in `config`.
    ///
    /// Transport dependency logs are hidden unless the level is Trace.
    /// Fails if a global logger has already been installed.
    pub fn init_logger(config: &Config) -> Result<(), SetLoggerError> {
        let apply_filters = Self::should_filter_dependencies(config.log_level_filter);

        simplelog::TermLogger::init(
            config.log_level_filter,
            Self::build_log_config(apply_filters),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        )
    }

    fn should_filter_dependencies(level: LevelFilter) -> bool {
        level != LevelFilter::Trace
    }

    /// Builds a simplelog Config with RFC 3339 timestamps, ignoring
    /// `FILTERED_MODULES` when `apply_filters` is set.
    fn build_log_config(apply_filters: bool) -> simplelog::Config {
        let mut builder = ConfigBuilder::new();
        builder.set_time_format_rfc3339();

        if apply_filters {
            for module in FILTERED_MODULES {
                builder.add_filter_ignore_str(module);
            }
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtered_modules_contains_transport_dependencies() {
        for module in ["hyper", "hyper_util", "reqwest", "rustls", "h2"] {
            assert!(
                FILTERED_MODULES.contains(&module),
                "{module} should be filtered"
            );
        }
    }

    #[test]
    fn test_filtered_modules_does_not_hide_client_logs() {
        assert!(
            !FILTERED_MODULES.contains(&"dailyco"),
            "dailyco should never be filtered"
        );
    }

    #[test]
    fn test_trace_level_shows_dependency_logs() {
        assert!(!Logger::should_filter_dependencies(LevelFilter::Trace));
    }

    #[test]
    fn test_other_levels_hide_dependency_logs() {
        for level in [
            LevelFilter::Off,
            LevelFilter::Error,
            LevelFilter::Warn,
            LevelFilter::Info,
            LevelFilter::Debug,
        ] {
            assert!(
                Logger::should_filter_dependencies(level),
                "{level} should filter dependencies"
            );
        }
    }

    #[test]
    fn test_build_log_config_does_not_panic() {
        let _filtered = Logger::build_log_config(true);
        let _unfiltered = Logger::build_log_config(false);
    }
}
